use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    #[error("Malformed number in field '{field}': {raw:?}")]
    MalformedNumber { field: String, raw: String },

    #[error("Malformed effect spec {raw:?}: {reason}")]
    MalformedEffectSpec { raw: String, reason: &'static str },

    #[error("Invalid note line at line {line}: {text:?}")]
    InvalidNoteLine { line: usize, text: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn missing_field(field: impl Into<String>) -> Self {
        Error::MissingField {
            field: field.into(),
        }
    }

    pub fn malformed_number(field: impl Into<String>, raw: impl Into<String>) -> Self {
        Error::MalformedNumber {
            field: field.into(),
            raw: raw.into(),
        }
    }

    pub fn malformed_effect(raw: impl Into<String>, reason: &'static str) -> Self {
        Error::MalformedEffectSpec {
            raw: raw.into(),
            reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_field() {
        let err = Error::malformed_number("level", "1a");
        assert_eq!(err.to_string(), "Malformed number in field 'level': \"1a\"");

        let err = Error::missing_field("title");
        assert_eq!(err.to_string(), "Missing required field: title");
    }
}
