// Core types and errors

use std::fmt;
use thiserror::Error;

/// The result type used throughout the sc2ranks client
pub type Sc2RanksResult<T> = Result<T, Sc2RanksError>;

/// Region used by the single-character queries when the caller has no preference
pub const DEFAULT_REGION: &str = "us";

/// Wildcard accepted by the service for region and league filters
pub const ALL: &str = "all";

/// Application key sent when the client is built with `Default`
pub const DEFAULT_APP_KEY: &str = "sc2ranks Rust API";

#[derive(Debug, Error)]
pub enum Sc2RanksError {
    /// The service answered with a JSON object carrying an `error` key.
    #[error("sc2ranks returned error: {message}")]
    Remote { message: String },

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Url(#[from] url::ParseError),

    #[error("application key not provided")]
    MissingAppKey,

    /// A path argument was `.` or `..`, which no URL can carry as a segment.
    #[error("path segment {segment:?} cannot be sent")]
    DotSegment { segment: String },
}

impl Sc2RanksError {
    /// Build a remote error from the value found under the `error` key
    pub fn remote(message: impl Into<String>) -> Self {
        let error = Self::Remote {
            message: message.into(),
        };
        log::warn!("{}", error);
        error
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Remote { .. })
    }

    /// The message supplied by the service, if this is a remote error
    pub fn remote_message(&self) -> Option<&str> {
        match self {
            Self::Remote { message } => Some(message),
            _ => None,
        }
    }
}

/// Ladder bracket, i.e. the team size a ranking applies to.
///
/// `All` is only meaningful for the extended character query, where it asks
/// for every bracket at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Bracket {
    #[default]
    All,
    OneVsOne,
    TwoVsTwo,
    ThreeVsThree,
    FourVsFour,
}

impl Bracket {
    /// The numeric form used in request paths and form bodies
    pub fn as_u8(self) -> u8 {
        match self {
            Bracket::All => 0,
            Bracket::OneVsOne => 1,
            Bracket::TwoVsTwo => 2,
            Bracket::ThreeVsThree => 3,
            Bracket::FourVsFour => 4,
        }
    }

    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Bracket::All),
            1 => Some(Bracket::OneVsOne),
            2 => Some(Bracket::TwoVsTwo),
            3 => Some(Bracket::ThreeVsThree),
            4 => Some(Bracket::FourVsFour),
            _ => None,
        }
    }
}

impl fmt::Display for Bracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

/// How a search name is matched against character names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchKind {
    Exact,
    Contains,
    Starts,
    Ends,
}

impl SearchKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchKind::Exact => "exact",
            SearchKind::Contains => "contains",
            SearchKind::Starts => "starts",
            SearchKind::Ends => "ends",
        }
    }
}

impl fmt::Display for SearchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Render a boolean toggle the way the service expects it in paths and forms
pub(crate) fn flag(value: bool) -> &'static str {
    if value {
        "1"
    } else {
        "0"
    }
}
