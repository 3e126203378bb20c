use super::text::trimmed_within;

/// Company a lead writes on behalf of. Same bounds as `ContactName`.
#[derive(Debug, Clone)]
pub struct CompanyName(String);

impl CompanyName {
    pub fn parse(company: String) -> Result<Self, String> {
        trimmed_within(&company, 2, 256)
            .map(Self)
            .ok_or("El nombre de la empresa debe tener al menos 2 caracteres.".to_string())
    }
}

impl AsRef<str> for CompanyName {
    fn as_ref(&self) -> &str { &self.0 }
}
