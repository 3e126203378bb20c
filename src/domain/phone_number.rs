use std::collections::HashSet;

/// A phone number as typed by the visitor: digits plus the usual separators
/// (`+`, `-`, `(`, `)`, spaces). At least 8 digits are required; separators
/// are kept verbatim.
#[derive(Debug, Clone)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    const MIN_DIGITS: usize = 8;

    pub fn parse(phone: String) -> Result<Self, String> {
        let phone = phone.trim().to_string();
        let allowed: HashSet<char> = "+-() ".chars().collect();
        if !phone
            .chars()
            .all(|c| c.is_ascii_digit() || allowed.contains(&c))
        {
            return Err("Por favor, ingresá un número de teléfono válido.".to_string());
        }
        let digits = phone.chars().filter(char::is_ascii_digit).count();
        match digits >= Self::MIN_DIGITS {
            true => Ok(Self(phone)),
            false => Err("El teléfono debe tener al menos 8 dígitos.".to_string()),
        }
    }
}

impl AsRef<str> for PhoneNumber {
    fn as_ref(&self) -> &str { &self.0 }
}
