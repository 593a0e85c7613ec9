
use regex::Regex;

/// A matcher that only accepts the whole input.
pub fn full_matcher(pattern: &str) -> Regex {
    Regex::new(&format!("^(?:{})$", pattern)).unwrap()
}

pub fn assert_matches(pattern: &str, sample: &str) {
    assert!(full_matcher(pattern).is_match(sample), "{:?} doesn't match the pattern {:?}", sample, pattern);
}
