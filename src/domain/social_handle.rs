/// An Instagram/TikTok handle or a channel URL. Optional in the form: blank
/// input yields `None`. A leading `@` is kept, since visitors type it either
/// way and the panel shows what they wrote.
pub fn parse_social_handle(value: &str) -> Result<Option<String>, String> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    if value.chars().count() > 256 {
        return Err("El usuario o enlace es demasiado largo.".to_string());
    }
    if value.chars().any(char::is_whitespace) {
        return Err("El usuario o enlace no puede contener espacios.".to_string());
    }
    Ok(Some(value.to_string()))
}
