// API client module: a small blocking HTTP client that searches the joke
// service and hands back one joke picked at random from the results.

use crate::config::Config;
use anyhow::{Context, Result};
use rand::Rng;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// One element of the `results` array returned by the search endpoint.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct JokeRecord {
    pub id: Option<String>,
    pub joke: String,
}

/// Search response. Only `results` matters; a response without the array
/// is treated as having no results.
#[derive(Deserialize, Debug, Default)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<JokeRecord>,
}

/// Outcome of a successful search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fetched {
    Joke(String),
    /// The search worked but matched nothing.
    NotFound,
}

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("Request failed with status code {}", .status.as_u16())]
    Status { status: StatusCode, body: String },

    #[error("Unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Anything that can produce a joke for a search term. The feedback loop
/// only talks to this trait.
pub trait JokeSource {
    fn fetch(&self, term: &str) -> Result<Fetched, ProviderError>;
}

/// Pick one record uniformly at random and return its text.
pub fn pick_joke<'a, R: Rng + ?Sized>(results: &'a [JokeRecord], rng: &mut R) -> Option<&'a str> {
    if results.is_empty() {
        return None;
    }
    let index = rng.gen_range(0..results.len());
    Some(results[index].joke.as_str())
}

/// Joke service client holding a reqwest blocking client and the search
/// endpoint URL.
#[derive(Clone)]
pub struct JokeClient {
    client: Client,
    search_url: String,
}

impl JokeClient {
    pub fn new(config: &Config) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .default_headers(headers)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;
        Ok(JokeClient {
            client,
            search_url: config.api_url.clone(),
        })
    }

    /// Run the search and return every matching record.
    pub fn search(&self, term: &str) -> Result<Vec<JokeRecord>, ProviderError> {
        log::debug!("GET {} term={:?}", self.search_url, term);
        let res = self
            .client
            .get(&self.search_url)
            .query(&[("term", term)])
            .send()?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().unwrap_or_else(|e| {
                log::debug!("could not read body of {} response: {}", status, e);
                "".into()
            });
            return Err(ProviderError::Status { status, body });
        }

        let body = res.text()?;
        let parsed: SearchResponse = serde_json::from_str(&body)?;
        log::debug!("search returned {} results", parsed.results.len());
        Ok(parsed.results)
    }
}

impl JokeSource for JokeClient {
    fn fetch(&self, term: &str) -> Result<Fetched, ProviderError> {
        let results = self.search(term)?;
        Ok(match pick_joke(&results, &mut rand::thread_rng()) {
            Some(joke) => Fetched::Joke(joke.to_string()),
            None => Fetched::NotFound,
        })
    }
}
