//! Crate-level error types.

use std::fmt;

/// Errors produced by the groupcam crate.
///
/// The per-frame tick never fails; only loading and saving options touches
/// anything fallible.
#[derive(Debug)]
pub enum GroupCamError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// An options value outside its valid range.
    InvalidOption {
        /// Dotted path of the offending field, e.g. `follow.speed`.
        field: &'static str,
        /// The rejected value.
        value: f32,
    },
}

impl fmt::Display for GroupCamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::InvalidOption { field, value } => {
                write!(f, "invalid option {field} = {value}")
            }
        }
    }
}

impl std::error::Error for GroupCamError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::OptionsParse(_) | Self::InvalidOption { .. } => None,
        }
    }
}

impl From<std::io::Error> for GroupCamError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for GroupCamError {
    fn from(e: toml::de::Error) -> Self {
        Self::OptionsParse(e.to_string())
    }
}

impl From<toml::ser::Error> for GroupCamError {
    fn from(e: toml::ser::Error) -> Self {
        Self::OptionsParse(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::*;

    #[test]
    fn io_errors_keep_their_source() {
        let err = GroupCamError::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing preset",
        ));
        assert!(err.source().is_some());
        assert_eq!(err.to_string(), "I/O error: missing preset");
    }

    #[test]
    fn parse_errors_have_no_source() {
        let err = GroupCamError::OptionsParse("bad value".to_owned());
        assert!(err.source().is_none());
        assert_eq!(err.to_string(), "options parse error: bad value");
    }

    #[test]
    fn invalid_option_names_the_field() {
        let err = GroupCamError::InvalidOption {
            field: "follow.speed",
            value: -2.0,
        };
        assert!(err.source().is_none());
        assert_eq!(err.to_string(), "invalid option follow.speed = -2");
    }
}
