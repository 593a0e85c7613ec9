/**
 * The generator walks the syntax tree of a pattern and builds a string that
 * the pattern matches, drawing every choice from its random source.
 *
 * Output size is not bounded beyond what the pattern implies: nested
 * repetitions multiply, so `(a{100}b*){10}` can produce long strings, and
 * recursion depth follows the nesting depth of the pattern.
 */

use tracing::{debug, trace};
use xg_intervals::IntervalSet;
use xg_regex_parse::{self as regex, Node};
use crate::config::Config;
use crate::source::{RandomSource, DefaultSource, default_source, seeded_source};

/// The characters `.` draws from, newline last so it can be cut off
const PRINTABLE: &[u8] = b"0123456789\
    abcdefghijklmnopqrstuvwxyz\
    ABCDEFGHIJKLMNOPQRSTUVWXYZ \
    !\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~\
    \t\x0B\x0C\r\
    \n";

fn alphabet(with_newline: bool) -> &'static [u8] {
    if with_newline {
        PRINTABLE
    }
    else {
        &PRINTABLE[..PRINTABLE.len() - 1]
    }
}

#[derive(Debug, Clone)]
pub struct Generator<R = DefaultSource> {
    node: Node,
    source: R,
    config: Config,
}

/**
 * Construction with the default engine.
 */

impl Generator<DefaultSource> {
    /// A generator with a time-seeded source and the default configuration.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Self::with_source(pattern, default_source())
    }

    /// A generator whose output sequence is fully determined by the seed.
    pub fn with_seed(pattern: &str, seed: u64) -> Result<Self, regex::Error> {
        Self::with_source(pattern, seeded_source(seed))
    }
}

impl <R> Generator<R> where R : RandomSource {
    pub fn with_source(pattern: &str, source: R) -> Result<Self, regex::Error> {
        let node = match regex::parse(pattern) {
            Ok(node) => node,
            Err(err) => {
                debug!(pattern, error = %err, "rejected pattern");
                return Err(err);
            },
        };
        debug!(pattern, depth = node.depth(), "compiled pattern");
        Ok(Self::from_node(node, source))
    }

    pub fn from_node(node: Node, source: R) -> Self {
        Self{ node, source, config: Config::default() }
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn node(&self) -> &Node {
        &self.node
    }

    pub fn into_source(self) -> R {
        self.source
    }

    /// Produces one string matched by the pattern. Never fails.
    pub fn generate(&mut self) -> String {
        let mut out = String::new();
        let mut walker = Walker{ source: &mut self.source, limit: self.config.repeat_limit() };
        walker.node(&self.node, &mut out);
        trace!(len = out.len(), "generated sample");
        out
    }
}

/// An endless stream of samples.
impl <R> Iterator for Generator<R> where R : RandomSource {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        Some(self.generate())
    }
}

/// Generates a single string matching the pattern.
pub fn generate(pattern: &str) -> Result<String, regex::Error> {
    Ok(Generator::new(pattern)?.generate())
}

/**
 * The actual tree walk.
 */

struct Walker<'a, R> {
    source: &'a mut R,
    limit: u32,
}

impl <'a, R> Walker<'a, R> where R : RandomSource {
    fn node(&mut self, node: &Node, out: &mut String) {
        match node {
            Node::Literal(s) => out.push_str(s),

            Node::CharClass(set) => out.extend(self.class_member(set)),

            Node::AnyCharNotNewline => out.push(self.pick(alphabet(false))),

            Node::AnyChar => out.push(self.pick(alphabet(true))),

            Node::Capture{ node, .. } => self.node(node, out),

            Node::Star(node) => {
                let count = self.source.below(self.limit as u64 + 1);
                self.repeat(node, count, out);
            },

            Node::Plus(node) => {
                let count = self.source.below(self.limit as u64) + 1;
                self.repeat(node, count, out);
            },

            Node::Quest(node) => {
                let count = self.source.below(2);
                self.repeat(node, count, out);
            },

            Node::Repeat{ node, min, max } => {
                let max = max.unwrap_or(self.limit);
                // A limit below the minimum leaves only the minimum
                let max = std::cmp::max(max, *min);
                let count = self.source.below((max - min) as u64 + 1) + *min as u64;
                self.repeat(node, count, out);
            },

            Node::Concat(nodes) => {
                for node in nodes {
                    self.node(node, out);
                }
            },

            Node::Alternate(nodes) => {
                if !nodes.is_empty() {
                    let idx = self.source.below(nodes.len() as u64) as usize;
                    self.node(&nodes[idx], out);
                }
            },

              Node::Empty
            | Node::NoMatch
            | Node::Look(_) => {},
        }
    }

    fn repeat(&mut self, node: &Node, count: u64, out: &mut String) {
        for _ in 0..count {
            self.node(node, out);
        }
    }

    /// Draws a member of the class, weighting every range by its size.
    fn class_member(&mut self, set: &IntervalSet<char>) -> Option<char> {
        let total = set.len();
        if total == 0 {
            return None;
        }
        let mut idx = self.source.below(total);
        for iv in set {
            let size = iv.len();
            if idx < size {
                return iv.nth(idx);
            }
            idx -= size;
        }
        None
    }

    fn pick(&mut self, chars: &[u8]) -> char {
        chars[self.source.below(chars.len() as u64) as usize] as char
    }
}

// Tests ///////////////////////////////////////////////////////////////////////
