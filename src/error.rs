//! Application error: a message plus the category that decides the exit code.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Dataset missing or unreadable.
    Io,
    /// Dataset read, but not a rectangular numeric table.
    Parse,
    /// Worker pool or fan-in failure.
    Runtime,
}

impl ErrorKind {
    pub fn exit_code(self) -> u8 {
        match self {
            ErrorKind::Io => 2,
            ErrorKind::Parse => 3,
            ErrorKind::Runtime => 4,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppError {
    kind: ErrorKind,
    message: String,
}

impl AppError {
    pub fn io(message: impl Into<String>) -> Self {
        Self::with_kind(ErrorKind::Io, message)
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::with_kind(ErrorKind::Parse, message)
    }

    pub fn runtime(message: impl Into<String>) -> Self {
        Self::with_kind(ErrorKind::Runtime, message)
    }

    fn with_kind(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Append `(context)` to the message, keeping the kind.
    pub fn context(self, context: impl fmt::Display) -> Self {
        Self {
            kind: self.kind,
            message: format!("{} ({context})", self.message),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn exit_code(&self) -> u8 {
        self.kind.exit_code()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct_and_non_zero() {
        let codes = [
            AppError::io("x").exit_code(),
            AppError::parse("x").exit_code(),
            AppError::runtime("x").exit_code(),
        ];
        assert_eq!(codes, [2, 3, 4]);
    }

    #[test]
    fn context_keeps_kind() {
        let err = AppError::parse("bad cell").context("boston.csv");
        assert_eq!(err.kind(), ErrorKind::Parse);
        assert_eq!(err.to_string(), "bad cell (boston.csv)");
    }
}
