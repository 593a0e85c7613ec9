/*!
 * Generating random strings that match a regular expression, the dual of
 * matching. Build a `Generator` once from a pattern, then draw as many
 * samples as needed, or use `generate` for a one-off string.
 *
 * ```
 * let mut gen = xg_gen::Generator::with_seed(r"[0-9]{3}-[a-z]+", 42).unwrap();
 * let s = gen.generate();
 * assert_eq!(s.as_bytes()[3], b'-');
 * ```
 */

extern crate xg_intervals;
extern crate xg_regex_parse;
extern crate rand;
extern crate rand_pcg;

mod config;
mod generator;
mod source;

pub use config::{Config, DEFAULT_REPEAT_LIMIT};
pub use generator::{Generator, generate};
pub use source::{RandomSource, Shared, DefaultSource, default_source, seeded_source};
pub use xg_regex_parse::{Node, Look, ErrorKind, Error as ParseError};
