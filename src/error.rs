use thiserror::Error;

pub type Result<T> = std::result::Result<T, WidgetError>;

#[derive(Error, Debug)]
pub enum WidgetError {
    /// The store was asked for a snapshot before any were loaded
    #[error("forecast store is empty")]
    EmptyStore,

    /// The selection points past the populated snapshots (legacy wrap bound)
    #[error("selection index {index} is out of range for {len} snapshot(s)")]
    SelectionOutOfRange { index: usize, len: usize },

    #[error("invalid input: {what} has length {actual}, expected {expected}")]
    InvalidInput {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A value that cannot be placed on a drawing surface
    #[error("invalid input: {what} value {value} is out of range")]
    OutOfRange { what: &'static str, value: i64 },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl WidgetError {
    pub fn invalid_input(what: &'static str, expected: usize, actual: usize) -> Self {
        Self::InvalidInput {
            what,
            expected,
            actual,
        }
    }

    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    /// Precondition violations skip the current cycle instead of aborting
    pub fn is_precondition_violation(&self) -> bool {
        matches!(
            self,
            WidgetError::EmptyStore
                | WidgetError::SelectionOutOfRange { .. }
                | WidgetError::InvalidInput { .. }
                | WidgetError::OutOfRange { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precondition_classification() {
        assert!(WidgetError::EmptyStore.is_precondition_violation());
        assert!(WidgetError::invalid_input("temps", 6, 5).is_precondition_violation());
        assert!(WidgetError::OutOfRange {
            what: "high",
            value: 1_000
        }
        .is_precondition_violation());
        assert!(!WidgetError::config("bad").is_precondition_violation());
    }

    #[test]
    fn test_invalid_input_message() {
        let err = WidgetError::invalid_input("x positions", 6, 4);
        assert_eq!(
            err.to_string(),
            "invalid input: x positions has length 4, expected 6"
        );
    }
}
