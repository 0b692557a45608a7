//! Request construction for the sc2ranks API.
//!
//! Every operation the client offers is an [`Endpoint`]. An endpoint knows
//! its path segments, its HTTP method and, for the mass queries, its form
//! body. [`Endpoint::to_request`] combines these with a base URL and an
//! application key into an [`ApiRequest`] that a transport can send as is.
//!
//! Single-item queries are GET requests to `<base>/<path>.json?appKey=<key>`.
//! Mass queries are POST requests to `<base>/<path>?appKey=<key>` with an
//! `application/x-www-form-urlencoded` body.

use url::Url;

use crate::entity::Character;
use crate::types::{flag, Bracket, SearchKind, Sc2RanksError, Sc2RanksResult};

/// Root of the public sc2ranks API
pub const BASE_URL: &str = "http://sc2ranks.com/api/";

/// Largest number of characters the service accepts in one mass query
pub const MAX_MASS_CHARACTERS: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

/// A fully built request, ready for a transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub url: Url,
    /// Form fields in order; empty for GET requests
    pub form: Vec<(String, String)>,
}

/// How a mass query identifies one character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterId {
    BnetId(u64),
    Code(u32),
}

/// One entry of a mass character query
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CharacterQuery {
    pub name: String,
    pub region: String,
    pub id: CharacterId,
}

impl CharacterQuery {
    pub fn by_bnet_id(name: impl Into<String>, region: impl Into<String>, bnet_id: u64) -> Self {
        Self {
            name: name.into(),
            region: region.into(),
            id: CharacterId::BnetId(bnet_id),
        }
    }

    pub fn by_code(name: impl Into<String>, region: impl Into<String>, code: u32) -> Self {
        Self {
            name: name.into(),
            region: region.into(),
            id: CharacterId::Code(code),
        }
    }

    /// Whether `character` is the one this entry asks for
    pub fn matches(&self, character: &Character) -> bool {
        match self.id {
            CharacterId::BnetId(id) => character.bnet_id == Some(id),
            CharacterId::Code(code) => {
                character.character_code == Some(code)
                    && character.name.as_deref() == Some(self.name.as_str())
            }
        }
    }

    fn push_form_fields(&self, index: usize, form: &mut Vec<(String, String)>) {
        let field = |name: &str| format!("characters[{}][{}]", index, name);
        form.push((field("name"), self.name.clone()));
        form.push((field("region"), self.region.clone()));
        match self.id {
            CharacterId::BnetId(id) => form.push((field("bnet_id"), id.to_string())),
            CharacterId::Code(code) => form.push((field("code"), code.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    BaseCharacter {
        region: String,
        name: String,
        code: u32,
    },
    BaseCharacterTeam {
        region: String,
        name: String,
        code: u32,
    },
    ExtendedCharacterTeam {
        region: String,
        name: String,
        code: u32,
        bracket: Bracket,
        random: bool,
    },
    MassBaseCharacters {
        characters: Vec<CharacterQuery>,
    },
    MassBaseCharactersTeams {
        characters: Vec<CharacterQuery>,
        bracket: Bracket,
        random: bool,
    },
    Search {
        kind: SearchKind,
        region: String,
        name: String,
        offset: u32,
    },
    CustomDivisionList {
        division_id: u64,
        region: String,
        league: String,
        bracket: Bracket,
        random: bool,
    },
}

impl Endpoint {
    pub fn base_character(name: &str, code: u32, region: &str) -> Self {
        Endpoint::BaseCharacter {
            region: region.to_owned(),
            name: name.to_owned(),
            code,
        }
    }

    pub fn base_character_team(name: &str, code: u32, region: &str) -> Self {
        Endpoint::BaseCharacterTeam {
            region: region.to_owned(),
            name: name.to_owned(),
            code,
        }
    }

    pub fn extended_character_team(
        name: &str,
        code: u32,
        region: &str,
        bracket: Bracket,
        random: bool,
    ) -> Self {
        Endpoint::ExtendedCharacterTeam {
            region: region.to_owned(),
            name: name.to_owned(),
            code,
            bracket,
            random,
        }
    }

    pub fn mass_base_characters(characters: &[CharacterQuery]) -> Self {
        Endpoint::MassBaseCharacters {
            characters: characters.to_vec(),
        }
    }

    pub fn mass_base_characters_teams(
        characters: &[CharacterQuery],
        bracket: Bracket,
        random: bool,
    ) -> Self {
        Endpoint::MassBaseCharactersTeams {
            characters: characters.to_vec(),
            bracket,
            random,
        }
    }

    pub fn search(kind: SearchKind, region: &str, name: &str, offset: u32) -> Self {
        Endpoint::Search {
            kind,
            region: region.to_owned(),
            name: name.to_owned(),
            offset,
        }
    }

    pub fn custom_division_list(
        division_id: u64,
        region: &str,
        league: &str,
        bracket: Bracket,
        random: bool,
    ) -> Self {
        Endpoint::CustomDivisionList {
            division_id,
            region: region.to_owned(),
            league: league.to_owned(),
            bracket,
            random,
        }
    }

    pub fn method(&self) -> HttpMethod {
        match self {
            Endpoint::MassBaseCharacters { .. } | Endpoint::MassBaseCharactersTeams { .. } => {
                HttpMethod::Post
            }
            _ => HttpMethod::Get,
        }
    }

    /// Path segments below the base URL, without the `.json` suffix
    pub fn segments(&self) -> Vec<String> {
        let handle = |name: &str, code: u32| format!("{}${}", name, code);
        match self {
            Endpoint::BaseCharacter { region, name, code } => vec![
                "base".into(),
                "char".into(),
                region.clone(),
                handle(name, *code),
            ],
            Endpoint::BaseCharacterTeam { region, name, code } => vec![
                "base".into(),
                "teams".into(),
                region.clone(),
                handle(name, *code),
            ],
            Endpoint::ExtendedCharacterTeam {
                region,
                name,
                code,
                bracket,
                random,
            } => vec![
                "char".into(),
                "teams".into(),
                region.clone(),
                handle(name, *code),
                bracket.to_string(),
                flag(*random).into(),
            ],
            Endpoint::MassBaseCharacters { .. } => {
                vec!["mass".into(), "base".into(), "char".into()]
            }
            Endpoint::MassBaseCharactersTeams { .. } => {
                vec!["mass".into(), "base".into(), "teams".into()]
            }
            Endpoint::Search {
                kind,
                region,
                name,
                offset,
            } => vec![
                "search".into(),
                kind.to_string(),
                region.clone(),
                name.clone(),
                offset.to_string(),
            ],
            Endpoint::CustomDivisionList {
                division_id,
                region,
                league,
                bracket,
                random,
            } => vec![
                "clist".into(),
                division_id.to_string(),
                region.clone(),
                league.clone(),
                bracket.to_string(),
                flag(*random).into(),
            ],
        }
    }

    /// The path as the service documents it, e.g. `base/char/us/HuK$530`
    pub fn path(&self) -> String {
        self.segments().join("/")
    }

    /// Form body fields; empty for GET endpoints
    pub fn form(&self) -> Vec<(String, String)> {
        let mut form = Vec::new();
        match self {
            Endpoint::MassBaseCharacters { characters } => {
                for (index, character) in characters.iter().enumerate() {
                    character.push_form_fields(index, &mut form);
                }
            }
            Endpoint::MassBaseCharactersTeams {
                characters,
                bracket,
                random,
            } => {
                for (index, character) in characters.iter().enumerate() {
                    character.push_form_fields(index, &mut form);
                }
                form.push(("team[bracket]".to_owned(), bracket.to_string()));
                form.push(("team[is_random]".to_owned(), flag(*random).to_owned()));
            }
            _ => {}
        }
        form
    }

    /// Build the request against `base_url`, authenticating with `app_key`.
    ///
    /// Each segment is percent-encoded on its own, so a name containing `/`,
    /// `?` or `#` cannot change the shape of the path. URLs cannot carry a
    /// `.` or `..` segment (parsers collapse them, escaped or not), so such
    /// an argument is rejected with [`Sc2RanksError::DotSegment`].
    pub fn to_request(&self, base_url: &str, app_key: &str) -> Sc2RanksResult<ApiRequest> {
        let mut url = Url::parse(base_url)?;
        let method = self.method();

        let mut segments = self.segments();
        if method == HttpMethod::Get {
            if let Some(last) = segments.last_mut() {
                last.push_str(".json");
            }
        }
        if let Some(segment) = segments.iter().find(|s| matches!(s.as_str(), "." | "..")) {
            return Err(Sc2RanksError::DotSegment {
                segment: segment.clone(),
            });
        }

        url.path_segments_mut()
            .map_err(|_| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
            .pop_if_empty()
            .extend(&segments);
        url.query_pairs_mut().append_pair("appKey", app_key);

        Ok(ApiRequest {
            method,
            url,
            form: self.form(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_request_url() {
        let request = Endpoint::base_character("HuK", 530, "us")
            .to_request(BASE_URL, "key")
            .unwrap();
        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(
            request.url.as_str(),
            "http://sc2ranks.com/api/base/char/us/HuK$530.json?appKey=key"
        );
        assert!(request.form.is_empty());
    }

    #[test]
    fn name_cannot_escape_its_segment() {
        let request = Endpoint::search(SearchKind::Contains, "eu", "a/b?c", 0)
            .to_request(BASE_URL, "key")
            .unwrap();
        assert_eq!(request.url.path(), "/api/search/contains/eu/a%2Fb%3Fc/0.json");

        let err = Endpoint::search(SearchKind::Exact, "us", "..", 0)
            .to_request(BASE_URL, "key")
            .unwrap_err();
        assert!(matches!(err, Sc2RanksError::DotSegment { ref segment } if segment == ".."));
    }
}
