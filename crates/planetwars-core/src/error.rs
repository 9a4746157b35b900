//! Snapshot parse errors.

use thiserror::Error;

/// A snapshot could not be parsed. Any state built before the failing line
/// must be discarded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {kind}")]
pub struct ParseError {
    /// 1-based line number in the snapshot text.
    pub line: usize,
    pub kind: ParseErrorKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    #[error("`{tag}` record needs {expected} tokens, found {found}")]
    WrongTokenCount {
        tag: String,
        expected: usize,
        found: usize,
    },
    #[error("fleet record with zero ships")]
    ZeroShipFleet,
    #[error("merged fleet ship count overflows")]
    FleetShipOverflow,
    #[error("unknown record tag `{0}`")]
    UnknownRecord(String),
    #[error("invalid number `{token}`")]
    InvalidNumber { token: String },
}

impl ParseError {
    pub fn new(line: usize, kind: ParseErrorKind) -> Self {
        Self { line, kind }
    }
}
