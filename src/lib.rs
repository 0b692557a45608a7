//! # sc2ranks: a Rust client for the sc2ranks.com API
//!
//! This crate wraps the sc2ranks.com StarCraft II ranking service. Each
//! client method builds the REST path for one query, performs a single HTTP
//! request and maps the JSON answer onto [`Character`] and [`Team`] values.
//!
//! ## Key Features
//!
//! - Async client ([`Sc2Ranks`]) and blocking client ([`blocking::BlockingSc2Ranks`])
//! - Typed entities that still keep every unrecognised field the service sends
//! - Remote failures surfaced as [`Sc2RanksError::Remote`]
//! - Pluggable [`Transport`] for tests or custom HTTP stacks
//!
//! ## Basic Usage
//!
//! ```no_run
//! use sc2ranks::{Bracket, Sc2Ranks, DEFAULT_REGION};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api = Sc2Ranks::new("my sc2ranks app");
//!
//!     let huk = api.fetch_base_character_team("HuK", 530, DEFAULT_REGION).await?;
//!     println!("{} has {:?} achievement points", huk, huk.achievement_points);
//!
//!     for team in huk.teams.iter().filter(|t| t.bracket == Some(Bracket::OneVsOne.as_u8())) {
//!         println!("1v1: region rank {:?}, world rank {:?}", team.region_rank, team.world_rank);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod types;
pub mod entity;
pub mod endpoint;
pub mod client;
mod response;

#[cfg(feature = "blocking")]
pub mod blocking;

// Re-export core components
pub use client::{HttpTransport, Sc2Ranks, Transport};
pub use endpoint::{ApiRequest, CharacterId, CharacterQuery, Endpoint, HttpMethod, BASE_URL, MAX_MASS_CHARACTERS};
pub use entity::{Character, SearchResult, Team};
pub use response::decode;
pub use types::{Bracket, SearchKind, Sc2RanksError, Sc2RanksResult, ALL, DEFAULT_APP_KEY, DEFAULT_REGION};

pub mod prelude {
    //! Convenient imports for commonly used types and functions
    pub use crate::{
        from_env, Bracket, Character, CharacterQuery, SearchKind, SearchResult, Sc2Ranks, Sc2RanksError,
        Sc2RanksResult, Team, ALL, DEFAULT_REGION,
    };

    #[cfg(feature = "blocking")]
    pub use crate::blocking::BlockingSc2Ranks;
}

/// Environment variable read by [`from_env`]
pub const APP_KEY_ENV: &str = "SC2RANKS_APP_KEY";

// Entry point functions
pub fn new_client(app_key: impl Into<String>) -> Sc2Ranks {
    Sc2Ranks::new(app_key)
}

pub fn from_env() -> Result<Sc2Ranks, Sc2RanksError> {
    match std::env::var(APP_KEY_ENV) {
        Ok(key) => Ok(Sc2Ranks::new(key)),
        Err(_) => Err(Sc2RanksError::MissingAppKey),
    }
}
