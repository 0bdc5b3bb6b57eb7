use thiserror::Error as ThisError;

pub type Result<T, E = CardError> = std::result::Result<T, E>;

#[derive(ThisError, Debug)]
pub enum CardError {
    /// A required attribute is missing or cannot be displayed.
    #[error("Invalid attribute `{field}`: {reason}")]
    InvalidAttributes { field: &'static str, reason: String },

    #[error("Failed to parse catalog: {0}")]
    CatalogParse(#[from] serde_json::Error),

    #[error("Failed to read card config: {0}")]
    ConfigIo(#[from] std::io::Error),

    #[error("Failed to parse card config: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

impl CardError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidAttributes {
            field,
            reason: reason.into(),
        }
    }

    /// The attribute that failed validation, if this is an attribute error.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::InvalidAttributes { field, .. } => Some(field),
            _ => None,
        }
    }
}
