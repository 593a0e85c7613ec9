/**
 * Errors produced while parsing a pattern.
 */

use regex_syntax::ast;
use regex_syntax::hir;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The pattern is not valid syntax
    #[error("error parsing regexp: {0}")]
    Syntax(#[from] regex_syntax::Error),

    /// A counted repetition, alone or nested, asks for more than 1000 copies
    #[error("error parsing regexp: invalid repeat count: `{0}`")]
    RepeatSize(String),
}

/// A coarse classification of parse errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    MissingBracket,
    MissingParen,
    UnexpectedParen,
    MissingRepeatArgument,
    InvalidRepeatSize,
    InvalidEscape,
    InvalidCharRange,
    UnknownClass,
    Other,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::RepeatSize(_) => ErrorKind::InvalidRepeatSize,
            Error::Syntax(regex_syntax::Error::Parse(err)) => match err.kind() {
                ast::ErrorKind::ClassUnclosed => ErrorKind::MissingBracket,
                ast::ErrorKind::GroupUnclosed => ErrorKind::MissingParen,
                ast::ErrorKind::GroupUnopened => ErrorKind::UnexpectedParen,
                ast::ErrorKind::RepetitionMissing => ErrorKind::MissingRepeatArgument,
                  ast::ErrorKind::RepetitionCountInvalid
                | ast::ErrorKind::RepetitionCountUnclosed => ErrorKind::InvalidRepeatSize,
                  ast::ErrorKind::EscapeUnrecognized
                | ast::ErrorKind::EscapeUnexpectedEof => ErrorKind::InvalidEscape,
                ast::ErrorKind::ClassRangeInvalid => ErrorKind::InvalidCharRange,
                ast::ErrorKind::UnicodeClassInvalid => ErrorKind::UnknownClass,
                _ => ErrorKind::Other,
            },
            Error::Syntax(regex_syntax::Error::Translate(err)) => match err.kind() {
                  hir::ErrorKind::UnicodePropertyNotFound
                | hir::ErrorKind::UnicodePropertyValueNotFound => ErrorKind::UnknownClass,
                _ => ErrorKind::Other,
            },
            Error::Syntax(_) => ErrorKind::Other,
        }
    }
}
