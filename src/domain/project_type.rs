use std::fmt::Display;

use serde::Serialize;

/// The kinds of work offered in the contact form's select box. Stored in the
/// `leads` table by label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ProjectType {
    #[serde(rename = "Producción de Video")]
    VideoProduction,
    #[serde(rename = "Fotografía")]
    Photography,
    #[serde(rename = "Post-Producción")]
    PostProduction,
    #[serde(rename = "Estrategia de Contenido")]
    ContentStrategy,
    #[serde(rename = "Otro")]
    Other,
}

impl ProjectType {
    pub const ALL: [ProjectType; 5] = [
        Self::VideoProduction,
        Self::Photography,
        Self::PostProduction,
        Self::ContentStrategy,
        Self::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::VideoProduction => "Producción de Video",
            Self::Photography => "Fotografía",
            Self::PostProduction => "Post-Producción",
            Self::ContentStrategy => "Estrategia de Contenido",
            Self::Other => "Otro",
        }
    }

    pub fn parse(value: String) -> Result<Self, String> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.label() == value)
            .ok_or("Por favor, seleccioná un tipo de proyecto.".to_string())
    }
}

impl Display for ProjectType {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
