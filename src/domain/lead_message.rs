use unicode_segmentation::UnicodeSegmentation;

use super::text::trimmed_within;

/// Free text describing the project. At least 10 graphemes.
#[derive(Debug, Clone)]
pub struct LeadMessage(String);

impl LeadMessage {
    const MIN_LEN: usize = 10;
    const MAX_LEN: usize = 5000;

    pub fn parse(message: String) -> Result<Self, String> {
        match trimmed_within(&message, Self::MIN_LEN, Self::MAX_LEN) {
            Some(message) => Ok(Self(message)),
            None if message.trim().graphemes(true).count() < Self::MIN_LEN => {
                Err("El mensaje debe tener al menos 10 caracteres.".to_string())
            }
            None => Err("El mensaje no puede superar los 5000 caracteres.".to_string()),
        }
    }
}

impl AsRef<str> for LeadMessage {
    fn as_ref(&self) -> &str { &self.0 }
}
