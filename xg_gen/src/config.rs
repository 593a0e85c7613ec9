/**
 * Generator configuration.
 */

/// The repetition count used for `*`, `+` and `{n,}` when nothing else is set
pub const DEFAULT_REPEAT_LIMIT: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    repeat_limit: u32,
}

impl Config {
    pub fn new() -> Self {
        Self{ repeat_limit: DEFAULT_REPEAT_LIMIT }
    }

    /// Caps the repetitions the pattern leaves open. The limit is at least 1.
    pub fn with_repeat_limit(mut self, limit: u32) -> Self {
        self.repeat_limit = std::cmp::max(limit, 1);
        self
    }

    pub fn repeat_limit(&self) -> u32 {
        self.repeat_limit
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod config_tests {
    use super::*;

    #[test]
    fn default_limit() {
        assert_eq!(Config::default().repeat_limit(), 10);
    }

    #[test]
    fn custom_limit() {
        assert_eq!(Config::new().with_repeat_limit(3).repeat_limit(), 3);
    }

    #[test]
    fn zero_limit_is_raised() {
        assert_eq!(Config::new().with_repeat_limit(0).repeat_limit(), 1);
    }
}
