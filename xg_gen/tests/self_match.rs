
mod common;

use xg_gen::{Generator, generate};
use common::{full_matcher, assert_matches};

const PATTERNS: &[&str] = &[
    r"abc",
    r"abc[abc][abc]{3}",
    r"abc[abc]{15,}",
    r"[a-ce-gy-z]{5}",
    r"a*b+c?",
    r"(foo|bar|baz)+",
    r"x{2,4}y{0,3}z{0}",
    r"(a|b)(c|d)*",
    r"[0-9]{3}-[0-9]{4}",
    r"\d+\.\d{2}",
    r"\w+@\w+\.com",
    r"[[:alpha:]][[:alnum:]_]*",
    r"[[:punct:]]{3}",
    r"(?i)[a-f]+",
    r"[^a-z]{4}",
    r"((a|b)c){2,}",
    r"(?:ab|cd){3}",
    r".{5}",
    r"(?s).{5}",
    r"\x41\x{263a}",
    r"[\x{3b1}-\x{3c9}]+",
    r"^abc$",
    r"\bword\b",
    r"(?P<year>[0-9]{4})-(?P<month>0[1-9]|1[0-2])",
    r"[\]\-]+",
    r"a|",
    r"()",
    r"((((a?)b*)c+)d{1,2})",
    r"[a-z]+(-[a-z]+)*",
    r"ab*?c+?d??",
    r"[\t\n ]{2}",
    r"\pL{3}",
    r"\p{Greek}+",
    r"\PL\pN",
    r"(?i)[^a-z]{3}",
    r"(?i)[^ß]",
    r"(?i)[^\x{3B1}-\x{3400}]{2}",
    r"(?i)straße",
];

#[test]
fn seeded_samples_match() {
    for pattern in PATTERNS {
        let re = full_matcher(pattern);
        for seed in 0..200 {
            let sample = Generator::with_seed(pattern, seed).unwrap().generate();
            assert!(re.is_match(&sample), "seed {}: {:?} doesn't match {:?}", seed, sample, pattern);
        }
    }
}

#[test]
fn repeated_calls_match() {
    for pattern in PATTERNS {
        let re = full_matcher(pattern);
        let mut gen = Generator::new(pattern).unwrap();
        for _ in 0..50 {
            let sample = gen.generate();
            assert!(re.is_match(&sample), "{:?} doesn't match {:?}", sample, pattern);
        }
    }
}

#[test]
fn one_off_generation_matches() {
    for pattern in PATTERNS {
        assert_matches(pattern, &generate(pattern).unwrap());
    }
}

#[test]
fn basic_pattern() {
    let pattern = "abc[abc][abc]{3}";
    let mut gen = Generator::new(pattern).unwrap();
    assert_matches(pattern, &gen.generate());
}

#[test]
fn min_max_pattern() {
    let pattern = "abc[abc]{15,}";
    let mut gen = Generator::new(pattern).unwrap();
    let sample = gen.generate();
    assert_matches(pattern, &sample);
    assert_eq!(sample.len(), 18);
}

/// Perl spellings the matcher doesn't take, next to an equivalent it does.
const REWRITTEN: &[(&str, &str)] = &[
    (r"a*{", r"a*\{"),
    (r"a+{x}", r"a+\{x\}"),
    (r"a{2}{,3}", r"a{2}\{,3\}"),
    (r"x{01}y", r"x\{01\}y"),
    (r"\Q1+1=2?\E!", r"1\+1=2\?!"),
];

#[test]
fn perl_spellings_match() {
    for (pattern, equivalent) in REWRITTEN {
        let re = full_matcher(equivalent);
        for seed in 0..50 {
            let sample = Generator::with_seed(pattern, seed).unwrap().generate();
            assert!(re.is_match(&sample), "seed {}: {:?} doesn't match {:?}", seed, sample, pattern);
        }
    }
}
