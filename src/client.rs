// Core Client Implementation

use crate::endpoint::*;
use crate::entity::{Character, SearchResult, Team};
use crate::response;
use crate::types::*;
use async_trait::async_trait;
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;
use std::fmt;
use std::sync::Arc;

/// Sends a built request and hands back the raw response body.
///
/// [`HttpTransport`] is the real implementation; tests and callers with
/// their own HTTP plumbing can provide another one through
/// [`Sc2Ranks::with_transport`].
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: &ApiRequest) -> Sc2RanksResult<String>;
}

/// Transport backed by `reqwest` with its default settings
#[derive(Clone, Default)]
pub struct HttpTransport {
    http_client: HttpClient,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a preconfigured `reqwest` client, e.g. one with a timeout
    pub fn with_client(http_client: HttpClient) -> Self {
        Self { http_client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: &ApiRequest) -> Sc2RanksResult<String> {
        let builder = match request.method {
            HttpMethod::Get => self.http_client.get(request.url.clone()),
            HttpMethod::Post => self.http_client.post(request.url.clone()).form(&request.form),
        };

        let response = builder.send().await?;
        tracing::trace!(status = %response.status(), "sc2ranks response received");

        Ok(response.text().await?)
    }
}

/// Async client for the sc2ranks API.
///
/// Every method performs exactly one request. Nothing is retried or cached;
/// remote failures come back as [`Sc2RanksError::Remote`].
#[derive(Clone)]
pub struct Sc2Ranks {
    app_key: String,
    transport: Arc<dyn Transport>,
}

impl Sc2Ranks {
    /// Create a new client identified by `app_key`
    pub fn new(app_key: impl Into<String>) -> Self {
        Self::with_transport(app_key, Arc::new(HttpTransport::new()))
    }

    /// Create a client that sends its requests through `transport`
    pub fn with_transport(app_key: impl Into<String>, transport: Arc<dyn Transport>) -> Self {
        Self {
            app_key: app_key.into(),
            transport,
        }
    }

    pub fn app_key(&self) -> &str {
        &self.app_key
    }

    /// Basic profile of `name$code` in `region`
    pub async fn fetch_base_character(
        &self,
        name: &str,
        code: u32,
        region: &str,
    ) -> Sc2RanksResult<Character> {
        self.call(Endpoint::base_character(name, code, region)).await
    }

    /// Basic profile plus the basic team list
    pub async fn fetch_base_character_team(
        &self,
        name: &str,
        code: u32,
        region: &str,
    ) -> Sc2RanksResult<Character> {
        self.call(Endpoint::base_character_team(name, code, region)).await
    }

    /// Profile with extended team data, including members, for `bracket`.
    ///
    /// `Bracket::All` asks for every bracket; `random` includes teams formed
    /// by random matchmaking.
    pub async fn fetch_extended_character_team(
        &self,
        name: &str,
        code: u32,
        region: &str,
        bracket: Bracket,
        random: bool,
    ) -> Sc2RanksResult<Character> {
        self.call(Endpoint::extended_character_team(name, code, region, bracket, random))
            .await
    }

    /// Up to [`MAX_MASS_CHARACTERS`] profiles in one request, in request order
    pub async fn fetch_mass_base_characters(
        &self,
        characters: &[CharacterQuery],
    ) -> Sc2RanksResult<Vec<Character>> {
        self.call(Endpoint::mass_base_characters(characters)).await
    }

    /// Like [`Sc2Ranks::fetch_mass_base_characters`], with team data for `bracket`
    pub async fn fetch_mass_base_characters_teams(
        &self,
        characters: &[CharacterQuery],
        bracket: Bracket,
        random: bool,
    ) -> Sc2RanksResult<Vec<Character>> {
        self.call(Endpoint::mass_base_characters_teams(characters, bracket, random))
            .await
    }

    /// Search characters by name; `offset` pages past the first 10 matches
    pub async fn search(
        &self,
        kind: SearchKind,
        region: &str,
        name: &str,
        offset: u32,
    ) -> Sc2RanksResult<SearchResult> {
        self.call(Endpoint::search(kind, region, name, offset)).await
    }

    /// Teams of a custom division, filtered by region, league and bracket
    pub async fn fetch_custom_division_list(
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
        .await
    }

    async fn call<T: DeserializeOwned>(&self, endpoint: Endpoint) -> Sc2RanksResult<T> {
        let request = endpoint.to_request(BASE_URL, &self.app_key)?;
        tracing::debug!(method = ?request.method, path = %endpoint.path(), "sending sc2ranks request");

        let body = self.transport.send(&request).await?;
        response::decode(&body)
    }
}

impl Default for Sc2Ranks {
    fn default() -> Self {
        Self::new(DEFAULT_APP_KEY)
    }
}

impl fmt::Debug for Sc2Ranks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sc2Ranks")
            .field("app_key", &self.app_key)
            .finish_non_exhaustive()
    }
}
