use std::process::ExitCode as StdExitCode;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Success = 0,
    GeneralError = 1,
    InvalidInput = 10,
    IoError = 12,
    UnknownScheme = 13,
}

impl From<ExitCode> for StdExitCode {
    fn from(code: ExitCode) -> Self {
        StdExitCode::from(code as u8)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LengthConstraint {
    MultipleOf(usize),
    Range { min: usize, max: Option<usize> },
}

impl std::fmt::Display for LengthConstraint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LengthConstraint::MultipleOf(n) => write!(f, "multiple of {}", n),
            LengthConstraint::Range { min, max: Some(max) } => write!(f, "between {} and {}", min, max),
            LengthConstraint::Range { min, max: None } => write!(f, "at least {}", min),
        }
    }
}

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("invalid input: {message}")]
    InvalidInput { message: String },

    #[error("invalid character '{char}' at position {position}")]
    InvalidCharacter { char: char, position: usize },

    #[error("invalid length: expected {expected}, got {actual}")]
    InvalidLength {
        expected: LengthConstraint,
        actual: usize,
    },

    #[error("invalid padding: {message}")]
    InvalidPadding { message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unknown scheme: {name}")]
    UnknownScheme { name: String },
}

impl DecodeError {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            DecodeError::InvalidInput { .. }
            | DecodeError::InvalidCharacter { .. }
            | DecodeError::InvalidLength { .. }
            | DecodeError::InvalidPadding { .. } => ExitCode::InvalidInput,
            DecodeError::Io(_) => ExitCode::IoError,
            DecodeError::UnknownScheme { .. } => ExitCode::UnknownScheme,
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    pub fn invalid_char(ch: char, pos: usize) -> Self {
        Self::InvalidCharacter {
            char: ch,
            position: pos,
        }
    }

    pub fn invalid_length(expected: LengthConstraint, actual: usize) -> Self {
        Self::InvalidLength { expected, actual }
    }

    pub fn invalid_padding(message: impl Into<String>) -> Self {
        Self::InvalidPadding {
            message: message.into(),
        }
    }

    pub fn unknown_scheme(name: impl Into<String>) -> Self {
        Self::UnknownScheme { name: name.into() }
    }
}

pub type Result<T> = std::result::Result<T, DecodeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_mapping() {
        assert_eq!(DecodeError::invalid_input("x").exit_code(), ExitCode::InvalidInput);
        assert_eq!(DecodeError::invalid_char('!', 0).exit_code(), ExitCode::InvalidInput);
        assert_eq!(DecodeError::unknown_scheme("nope").exit_code(), ExitCode::UnknownScheme);
    }

    #[test]
    fn test_length_constraint_display() {
        assert_eq!(LengthConstraint::MultipleOf(2).to_string(), "multiple of 2");
        assert_eq!(
            LengthConstraint::Range { min: 1, max: None }.to_string(),
            "at least 1"
        );
    }

    #[test]
    fn test_invalid_character_display() {
        let err = DecodeError::invalid_char('$', 7);
        assert_eq!(err.to_string(), "invalid character '$' at position 7");
    }
}
