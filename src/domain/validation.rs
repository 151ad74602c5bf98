use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    Empty {
        field: &'static str,
    },
    CountMismatch {
        recipients: usize,
        messages: usize,
    },
    CoordinateOutOfRange {
        field: &'static str,
        min: f64,
        max: f64,
        actual: f64,
    },
    Encoding {
        field: &'static str,
        reason: String,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::CountMismatch {
                recipients,
                messages,
            } => write!(
                f,
                "recipient count ({recipients}) does not match message count ({messages})"
            ),
            Self::CoordinateOutOfRange {
                field,
                min,
                max,
                actual,
            } => write!(
                f,
                "{field} out of range: {actual} (expected {min}..={max})"
            ),
            Self::Encoding { field, reason } => write!(f, "cannot encode {field}: {reason}"),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::ValidationError;

    #[test]
    fn display_messages_are_human_readable() {
        let err = ValidationError::Empty { field: "appkey" };
        assert_eq!(err.to_string(), "appkey must not be empty");

        let err = ValidationError::CountMismatch {
            recipients: 2,
            messages: 3,
        };
        assert_eq!(
            err.to_string(),
            "recipient count (2) does not match message count (3)"
        );

        let err = ValidationError::CoordinateOutOfRange {
            field: "latitude",
            min: -90.0,
            max: 90.0,
            actual: 91.5,
        };
        assert_eq!(
            err.to_string(),
            "latitude out of range: 91.5 (expected -90..=90)"
        );

        let err = ValidationError::Encoding {
            field: "buttons",
            reason: "bad".to_owned(),
        };
        assert_eq!(err.to_string(), "cannot encode buttons: bad");
    }
}
