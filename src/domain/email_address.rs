use validator::ValidateEmail;

/// An email address that passed syntax validation. Shared by contact form
/// leads and newsletter subscribers.
#[derive(Debug, Clone)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn parse(email: String) -> Result<Self, String> {
        let email = email.trim().to_string();
        ValidateEmail::validate_email(&email)
            .then_some(Self(email))
            .ok_or("Por favor, ingresá un correo electrónico válido.".to_string())
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str { &self.0 }
}
