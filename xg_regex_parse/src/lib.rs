/*!
 * Parsing regular expressions into a syntax tree. The dialect is the one of
 * regex-syntax with the Perl extras `\Q...\E` and literal braces, so the
 * usual operators, bracket classes, Perl, POSIX and Unicode classes, named
 * groups and inline flags are all available.
 */

extern crate xg_intervals;
extern crate regex_syntax;

mod ast;
mod error;
mod parser;

pub use ast::{Node, Look};
pub use error::{Error, ErrorKind};
pub use parser::parse;
