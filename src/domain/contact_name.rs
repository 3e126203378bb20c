use super::text::trimmed_within;

/// Name of the person behind a lead. Between 2 and 256 graphemes, surrounding
/// whitespace removed.
///
/// Must be instantiated with `ContactName::parse`; the field is private so
/// the checks cannot be bypassed.
#[derive(Debug, Clone)]
pub struct ContactName(String);

impl ContactName {
    pub fn parse(name: String) -> Result<Self, String> {
        match trimmed_within(&name, 2, 256) {
            Some(name) => Ok(Self(name)),
            None => Err("El nombre debe tener al menos 2 caracteres.".to_string()),
        }
    }
}

impl AsRef<str> for ContactName {
    fn as_ref(&self) -> &str { &self.0 }
}
