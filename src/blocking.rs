//! Synchronous client.
//!
//! Mirrors [`crate::Sc2Ranks`] method for method, built on
//! `reqwest::blocking`. Each call blocks the current thread until its single
//! request completes. Do not use it from inside an async runtime; use the
//! async client there instead.

use crate::endpoint::*;
use crate::entity::{Character, SearchResult, Team};
use crate::response;
use crate::types::*;
use reqwest::blocking::Client as HttpClient;
use serde::de::DeserializeOwned;
use std::fmt;
use std::sync::Arc;

/// Blocking counterpart of [`crate::Transport`]
pub trait BlockingTransport: Send + Sync {
    fn send(&self, request: &ApiRequest) -> Sc2RanksResult<String>;
}

/// Transport backed by `reqwest::blocking` with its default settings
#[derive(Clone)]
pub struct BlockingHttpTransport {
    http_client: HttpClient,
}

impl BlockingHttpTransport {
    pub fn new() -> Sc2RanksResult<Self> {
        Ok(Self {
            http_client: HttpClient::builder().build()?,
        })
    }

    pub fn with_client(http_client: HttpClient) -> Self {
        Self { http_client }
    }
}

impl BlockingTransport for BlockingHttpTransport {
    fn send(&self, request: &ApiRequest) -> Sc2RanksResult<String> {
        let builder = match request.method {
            HttpMethod::Get => self.http_client.get(request.url.clone()),
            HttpMethod::Post => self.http_client.post(request.url.clone()).form(&request.form),
        };

        let response = builder.send()?;
        tracing::trace!(status = %response.status(), "sc2ranks response received");

        Ok(response.text()?)
    }
}

/// Blocking client for the sc2ranks API
#[derive(Clone)]
pub struct BlockingSc2Ranks {
    app_key: String,
    transport: Arc<dyn BlockingTransport>,
}

impl BlockingSc2Ranks {
    /// Create a new client identified by `app_key`.
    ///
    /// Fails only if the underlying HTTP client cannot be initialised. For
    /// that reason there is no `Default` impl; pass
    /// [`DEFAULT_APP_KEY`](crate::DEFAULT_APP_KEY) here instead.
    pub fn new(app_key: impl Into<String>) -> Sc2RanksResult<Self> {
        Ok(Self::with_transport(
            app_key,
            Arc::new(BlockingHttpTransport::new()?),
        ))
    }

    pub fn with_transport(
        app_key: impl Into<String>,
        transport: Arc<dyn BlockingTransport>,
    ) -> Self {
        Self {
            app_key: app_key.into(),
            transport,
        }
    }

    pub fn app_key(&self) -> &str {
        &self.app_key
    }

    pub fn fetch_base_character(
        &self,
        name: &str,
        code: u32,
        region: &str,
    ) -> Sc2RanksResult<Character> {
        self.call(Endpoint::base_character(name, code, region))
    }

    pub fn fetch_base_character_team(
        &self,
        name: &str,
        code: u32,
        region: &str,
    ) -> Sc2RanksResult<Character> {
        self.call(Endpoint::base_character_team(name, code, region))
    }

    pub fn fetch_extended_character_team(
        &self,
        name: &str,
        code: u32,
        region: &str,
        bracket: Bracket,
        random: bool,
    ) -> Sc2RanksResult<Character> {
        self.call(Endpoint::extended_character_team(name, code, region, bracket, random))
    }

    pub fn fetch_mass_base_characters(
        &self,
        characters: &[CharacterQuery],
    ) -> Sc2RanksResult<Vec<Character>> {
        self.call(Endpoint::mass_base_characters(characters))
    }

    pub fn fetch_mass_base_characters_teams(
        &self,
        characters: &[CharacterQuery],
        bracket: Bracket,
        random: bool,
    ) -> Sc2RanksResult<Vec<Character>> {
        self.call(Endpoint::mass_base_characters_teams(characters, bracket, random))
    }

    pub fn search(
        &self,
        kind: SearchKind,
        region: &str,
        name: &str,
        offset: u32,
    ) -> Sc2RanksResult<SearchResult> {
        self.call(Endpoint::search(kind, region, name, offset))
    }

    pub fn fetch_custom_division_list(
        &self,
        division_id: u64,
        region: &str,
        league: &str,
        bracket: Bracket,
        random: bool,
    ) -> Sc2RanksResult<Vec<Team>> {
        self.call(Endpoint::custom_division_list(
            division_id,
            region,
            league,
            bracket,
            random,
        ))
    }

    fn call<T: DeserializeOwned>(&self, endpoint: Endpoint) -> Sc2RanksResult<T> {
        let request = endpoint.to_request(BASE_URL, &self.app_key)?;
        tracing::debug!(method = ?request.method, path = %endpoint.path(), "sending sc2ranks request");

        let body = self.transport.send(&request)?;
        response::decode(&body)
    }
}

impl fmt::Debug for BlockingSc2Ranks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BlockingSc2Ranks")
            .field("app_key", &self.app_key)
            .finish_non_exhaustive()
    }
}

/// Blocking client keyed from the `SC2RANKS_APP_KEY` environment variable
pub fn from_env() -> Sc2RanksResult<BlockingSc2Ranks> {
    match std::env::var(crate::APP_KEY_ENV) {
        Ok(key) => BlockingSc2Ranks::new(key),
        Err(_) => Err(Sc2RanksError::MissingAppKey),
    }
}
