/**
 * Turning a pattern string into the regex AST. The syntax is handled by
 * regex-syntax; we only rewrite the Perl spellings it doesn't accept, then
 * lower its HIR into our own tree.
 */

use regex_syntax::ParserBuilder;
use regex_syntax::hir::{self, Hir, HirKind};
use xg_intervals::{Interval, IntervalSet};
use crate::ast::Node;
use crate::error::Error;

/// The largest count a counted repetition may use, also bounding the
/// product of nested counted repetitions
const MAX_REPEAT: u32 = 1000;

/// A small helper to ease the Chars interface a bit
#[derive(Clone)]
struct Chars<'a>(std::str::Chars<'a>);

impl <'a> Chars<'a> {
    fn new(source: &'a str) -> Self {
        Chars(source.chars())
    }

    fn next(&self) -> Option<(char, Chars<'a>)> {
        let mut clone = self.clone();
        match clone.0.next() {
            Some(c) => Some((c, clone)),
            None => None,
        }
    }

    fn peek(&self) -> Option<char> {
        self.0.clone().next()
    }

    fn as_str(&self) -> &'a str {
        self.0.as_str()
    }
}

/**
 * Actual parsing.
 */

pub fn parse(source: &str) -> Result<Node, Error> {
    let rewritten = rewrite(source);
    let hir = ParserBuilder::new()
        .octal(true)
        .build()
        .parse(&rewritten)?;
    lower(&hir, 1)
}

/**
 * Rewriting Perl spellings. `\Q...\E` quotes everything up to the `\E` (or
 * the end), and a `{` that doesn't open `{n}`, `{n,}` or `{n,m}` is a
 * literal brace.
 */

fn rewrite(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    let mut it = Chars::new(source);
    while let Some((c, rest)) = it.next() {
        it = match c {
            '\\' => rewrite_escape(rest, &mut out),
            '{' if !is_repeat(rest.as_str()) => {
                out.push_str(r"\{");
                rest
            },
            _ => {
                out.push(c);
                rest
            },
        };
    }
    out
}

fn rewrite_escape<'a>(it: Chars<'a>, out: &mut String) -> Chars<'a> {
    match it.next() {
        Some(('Q', rest)) => {
            let text = rest.as_str();
            let (quoted, after) = match text.find(r"\E") {
                Some(end) => (&text[..end], &text[end + 2..]),
                None => (text, ""),
            };
            out.push_str(&regex_syntax::escape(quoted));
            Chars::new(after)
        },
        // The braces belong to the escape
        Some((c, rest)) if "xpP".contains(c) && rest.peek() == Some('{') => {
            let text = rest.as_str();
            let end = text.find('}').map_or(text.len(), |i| i + 1);
            out.push('\\');
            out.push(c);
            out.push_str(&text[..end]);
            Chars::new(&text[end..])
        },
        Some((c, rest)) => {
            out.push('\\');
            out.push(c);
            rest
        },
        // Trailing backslash, reported by the parser
        None => {
            out.push('\\');
            it
        },
    }
}

/// Checks if the text after a `{` completes a counted repetition.
fn is_repeat(text: &str) -> bool {
    let rest = match skip_count(text) {
        Some(rest) => rest,
        None => return false,
    };
    let rest = match rest.strip_prefix(',') {
        Some(rest) if rest.starts_with('}') => rest,
        Some(rest) => match skip_count(rest) {
            Some(rest) => rest,
            None => return false,
        },
        None => rest,
    };
    rest.starts_with('}')
}

/// Skips a decimal count. Leading zeroes are not allowed.
fn skip_count(text: &str) -> Option<&str> {
    let len = text.bytes().take_while(u8::is_ascii_digit).count();
    if len == 0 || (len > 1 && text.starts_with('0')) {
        None
    }
    else {
        Some(&text[len..])
    }
}

/**
 * Lowering the HIR. `outer` is the product of the counts of the enclosing
 * counted repetitions.
 */

fn lower(hir: &Hir, outer: u32) -> Result<Node, Error> {
    let node = match hir.kind() {
        HirKind::Empty => Node::Empty,

        // Literals of a UTF-8 HIR are always valid UTF-8
        HirKind::Literal(hir::Literal(bytes)) => Node::literal(String::from_utf8_lossy(bytes)),

        HirKind::Class(class) => lower_class(class),

        HirKind::Look(look) => Node::Look(*look),

        HirKind::Capture(cap) => Node::Capture{
            index: cap.index as usize,
            name: cap.name.as_deref().map(String::from),
            node: Box::new(lower(&cap.sub, outer)?),
        },

        HirKind::Repetition(rep) => lower_repetition(rep, outer)?,

        HirKind::Concat(subs) => Node::Concat(lower_all(subs, outer)?),

        HirKind::Alternation(subs) => Node::Alternate(lower_all(subs, outer)?),
    };
    Ok(node)
}

fn lower_all(subs: &[Hir], outer: u32) -> Result<Vec<Node>, Error> {
    subs.iter().map(|sub| lower(sub, outer)).collect()
}

fn lower_repetition(rep: &hir::Repetition, outer: u32) -> Result<Node, Error> {
    let sub = |outer| lower(&rep.sub, outer).map(Box::new);
    let node = match (rep.min, rep.max) {
        (0, None) => Node::Star(sub(outer)?),
        (1, None) => Node::Plus(sub(outer)?),
        (0, Some(1)) => Node::Quest(sub(outer)?),
        (min, max) => {
            let count = max.unwrap_or(min);
            let nested = outer.saturating_mul(std::cmp::max(count, 1));
            if count > MAX_REPEAT || nested > MAX_REPEAT {
                return Err(Error::RepeatSize(repeat_text(min, max)));
            }
            Node::Repeat{ node: sub(nested)?, min, max }
        },
    };
    Ok(node)
}

fn repeat_text(min: u32, max: Option<u32>) -> String {
    match max {
        Some(max) if max == min => format!("{{{}}}", min),
        Some(max) => format!("{{{},{}}}", min, max),
        None => format!("{{{},}}", min),
    }
}

/// `.` arrives as a class too, so the two dot classes are recognized here.
fn lower_class(class: &hir::Class) -> Node {
    let set: IntervalSet<char> = match class {
        hir::Class::Unicode(cls) => cls.ranges().iter()
            .map(|r| Interval::with_bounds(r.start(), r.end()))
            .collect(),
        // In a UTF-8 HIR byte classes are ASCII only
        hir::Class::Bytes(cls) => cls.ranges().iter()
            .map(|r| Interval::with_bounds(r.start() as char, r.end() as char))
            .collect(),
    };

    let any = [Interval::with_bounds('\0', '\u{10FFFF}')];
    let any_but_newline = [
        Interval::with_bounds('\0', '\t'),
        Interval::with_bounds('\u{B}', '\u{10FFFF}'),
    ];
    if set.intervals() == &any[..] {
        Node::AnyChar
    }
    else if set.intervals() == &any_but_newline[..] {
        Node::AnyCharNotNewline
    }
    else {
        Node::class(set)
    }
}

// Tests ///////////////////////////////////////////////////////////////////////
