// Configuration: where jokes come from and where ratings go.
// Both values can be overridden through environment variables, the same
// way the HTTP client picks up its base URL.

use std::path::PathBuf;

/// Search endpoint used when `JOKE_API_URL` is not set.
pub const DEFAULT_API_URL: &str = "https://icanhazdadjoke.com/search";

/// Store file used when `JOKES_FILE` is not set.
pub const DEFAULT_JOKES_FILE: &str = "jokes.txt";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub api_url: String,
    pub jokes_file: PathBuf,
}

impl Config {
    pub fn new(api_url: impl Into<String>, jokes_file: impl Into<PathBuf>) -> Self {
        Config {
            api_url: api_url.into(),
            jokes_file: jokes_file.into(),
        }
    }

    /// Read `JOKE_API_URL` and `JOKES_FILE`, falling back to the defaults
    /// when a variable is unset or empty.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let api_url = non_empty("JOKE_API_URL").unwrap_or_else(|| DEFAULT_API_URL.into());
        let jokes_file = non_empty("JOKES_FILE").unwrap_or_else(|| DEFAULT_JOKES_FILE.into());
        Config::new(api_url, jokes_file)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new(DEFAULT_API_URL, DEFAULT_JOKES_FILE)
    }
}
