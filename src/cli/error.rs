// Parse failures and the user-facing messages they carry

use thiserror::Error;

use crate::utils::INPUT_FORMAT_HINT;

/// Broad class of a parse failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Unrecognized,
    MissingArgument,
    MalformedDateTime,
    InvalidIndex,
}

/// Why a line could not become a command.
///
/// `Display` is the exact text shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Sorry, I am not programmed to do this yet :(")]
    Unrecognized,

    #[error("Hmmmm what to do? Think again?")]
    MissingTodoDescription,

    #[error("Deadline or task description missing.")]
    MissingDeadline,

    #[error("Event time or event description missing.")]
    MissingEvent,

    #[error("Kindly enter the keyword for finding task")]
    MissingFindKeyword,

    #[error("Please enter a valid date in the format {}", INPUT_FORMAT_HINT)]
    InvalidDateTime,

    #[error("Kindly enter the date in the format {} to filter by date", INPUT_FORMAT_HINT)]
    InvalidListDate,

    #[error("Invalid arguments for deletion. Please check again!")]
    InvalidDeleteIndex,

    #[error("Invalid arguments for marking. Please check again!")]
    InvalidMarkIndex,

    #[error("Invalid arguments for unmarking. Please check again!")]
    InvalidUnmarkIndex,
}

impl ParseError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ParseError::Unrecognized => ErrorCategory::Unrecognized,
            ParseError::MissingTodoDescription
            | ParseError::MissingDeadline
            | ParseError::MissingEvent
            | ParseError::MissingFindKeyword => ErrorCategory::MissingArgument,
            ParseError::InvalidDateTime | ParseError::InvalidListDate => {
                ErrorCategory::MalformedDateTime
            }
            ParseError::InvalidDeleteIndex
            | ParseError::InvalidMarkIndex
            | ParseError::InvalidUnmarkIndex => ErrorCategory::InvalidIndex,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            ParseError::Unrecognized.to_string(),
            "Sorry, I am not programmed to do this yet :("
        );
        assert_eq!(
            ParseError::InvalidDateTime.to_string(),
            "Please enter a valid date in the format yyyy-MM-dd HHmm"
        );
        assert_eq!(
            ParseError::InvalidListDate.to_string(),
            "Kindly enter the date in the format yyyy-MM-dd HHmm to filter by date"
        );
        assert_ne!(
            ParseError::InvalidMarkIndex.to_string(),
            ParseError::InvalidUnmarkIndex.to_string()
        );
    }

    #[test]
    fn test_categories() {
        assert_eq!(ParseError::Unrecognized.category(), ErrorCategory::Unrecognized);
        assert_eq!(ParseError::MissingEvent.category(), ErrorCategory::MissingArgument);
        assert_eq!(ParseError::InvalidListDate.category(), ErrorCategory::MalformedDateTime);
        assert_eq!(ParseError::InvalidDeleteIndex.category(), ErrorCategory::InvalidIndex);
    }
}
