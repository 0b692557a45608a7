//! Characters and teams returned by the sc2ranks API.
//!
//! The service attaches more keys to its objects than any client cares
//! about, and the set changes between endpoints. Each entity therefore
//! carries a fixed set of typed fields plus an `extra` map holding every key
//! that was not recognised. A recognised key whose value has an unexpected
//! JSON type is kept in `extra` as well, so mapping never fails on the shape
//! of an individual field and nothing the service sent is lost.
//!
//! `teams` on a character and `members` on a team are mapped recursively.

use serde::de::{Deserialize, DeserializeOwned, Deserializer};
use serde::ser::{Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::types::Sc2RanksResult;

type JsonMap = Map<String, Value>;

/// A player profile.
///
/// Two characters are equal when their battle.net ids are equal; every other
/// field is informational. Characters without a `bnet_id` all compare equal
/// to each other (and hash alike), so `Team::has_member`, sets and `!=`
/// filters cannot tell id-less characters apart.
#[derive(Debug, Clone, Default)]
pub struct Character {
    pub name: Option<String>,
    pub region: Option<String>,
    pub character_code: Option<u32>,
    pub bnet_id: Option<u64>,
    pub achievement_points: Option<u32>,
    pub teams: Vec<Team>,
    /// Keys the service sent that have no typed field
    pub extra: JsonMap,
}

/// A ranked team entry, as listed on a character or in a division
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Team {
    pub bracket: Option<u8>,
    pub is_random: Option<bool>,
    pub league: Option<String>,
    pub division: Option<String>,
    pub region_rank: Option<u32>,
    pub world_rank: Option<u32>,
    pub points: Option<i64>,
    pub wins: Option<u32>,
    pub losses: Option<u32>,
    pub members: Vec<Character>,
    /// Keys the service sent that have no typed field
    pub extra: JsonMap,
}

/// Result of a character search
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SearchResult {
    /// Number of characters matching the query, across all pages
    pub total: u64,
    /// The current page, at most 10 characters
    #[serde(default)]
    pub characters: Vec<Character>,
}

impl Character {
    /// Map a decoded JSON object onto a character
    pub fn from_map(mut map: JsonMap) -> Self {
        let teams = take_list(&mut map, "teams", Team::from_map);
        Self {
            name: take_field(&mut map, "name"),
            region: take_field(&mut map, "region"),
            character_code: take_field(&mut map, "character_code"),
            bnet_id: take_field(&mut map, "bnet_id"),
            achievement_points: take_field(&mut map, "achievement_points"),
            teams,
            extra: map,
        }
    }

    /// Map any JSON value; fails unless the value is an object
    pub fn from_json(value: Value) -> Sc2RanksResult<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// The inverse of [`Character::from_map`].
    ///
    /// Lossy for one shape: an empty `teams` list is omitted, so
    /// `"teams": []` comes back without the key.
    pub fn to_map(&self) -> JsonMap {
        let mut map = JsonMap::new();
        put(&mut map, "name", &self.name);
        put(&mut map, "region", &self.region);
        put(&mut map, "character_code", &self.character_code);
        put(&mut map, "bnet_id", &self.bnet_id);
        put(&mut map, "achievement_points", &self.achievement_points);
        if !self.teams.is_empty() {
            let teams = self.teams.iter().map(|t| Value::Object(t.to_map())).collect();
            map.insert("teams".to_owned(), Value::Array(teams));
        }
        merge_extra(&mut map, &self.extra);
        map
    }

    /// The only team of this character, when exactly one was returned
    pub fn team(&self) -> Option<&Team> {
        match self.teams.as_slice() {
            [team] => Some(team),
            _ => None,
        }
    }

    /// Look up a key that has no typed field
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }
}

impl Team {
    /// Map a decoded JSON object onto a team
    pub fn from_map(mut map: JsonMap) -> Self {
        let members = take_list(&mut map, "members", Character::from_map);
        Self {
            bracket: take_field(&mut map, "bracket"),
            is_random: take_field(&mut map, "is_random"),
            league: take_field(&mut map, "league"),
            division: take_field(&mut map, "division"),
            region_rank: take_field(&mut map, "region_rank"),
            world_rank: take_field(&mut map, "world_rank"),
            points: take_field(&mut map, "points"),
            wins: take_field(&mut map, "wins"),
            losses: take_field(&mut map, "losses"),
            members,
            extra: map,
        }
    }

    pub fn from_json(value: Value) -> Sc2RanksResult<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// The inverse of [`Team::from_map`].
    ///
    /// Lossy for one shape: an empty `members` list is omitted.
    pub fn to_map(&self) -> JsonMap {
        let mut map = JsonMap::new();
        put(&mut map, "bracket", &self.bracket);
        put(&mut map, "is_random", &self.is_random);
        put(&mut map, "league", &self.league);
        put(&mut map, "division", &self.division);
        put(&mut map, "region_rank", &self.region_rank);
        put(&mut map, "world_rank", &self.world_rank);
        put(&mut map, "points", &self.points);
        put(&mut map, "wins", &self.wins);
        put(&mut map, "losses", &self.losses);
        if !self.members.is_empty() {
            let members = self.members.iter().map(|c| Value::Object(c.to_map())).collect();
            map.insert("members".to_owned(), Value::Array(members));
        }
        merge_extra(&mut map, &self.extra);
        map
    }

    /// Whether `character` is listed among this team's members
    pub fn has_member(&self, character: &Character) -> bool {
        self.members.contains(character)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }
}

impl PartialEq for Character {
    fn eq(&self, other: &Self) -> bool {
        self.bnet_id == other.bnet_id
    }
}

impl Eq for Character {}

impl Hash for Character {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bnet_id.hash(state);
    }
}

// `name$code`, the form the service uses to address a character
impl fmt::Display for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name.as_deref().unwrap_or_default())?;
        if let Some(code) = self.character_code {
            write!(f, "${}", code)?;
        }
        Ok(())
    }
}

impl<'de> Deserialize<'de> for Character {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        JsonMap::deserialize(deserializer).map(Character::from_map)
    }
}

impl Serialize for Character {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_map().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Team {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        JsonMap::deserialize(deserializer).map(Team::from_map)
    }
}

impl Serialize for Team {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_map().serialize(serializer)
    }
}

/// Move `key` out of `map` into a typed value.
///
/// `null` counts as absent. A value of the wrong type goes back into the map.
fn take_field<T: DeserializeOwned>(map: &mut JsonMap, key: &str) -> Option<T> {
    let value = map.remove(key)?;
    if value.is_null() {
        return None;
    }
    match T::deserialize(&value) {
        Ok(typed) => Some(typed),
        Err(_) => {
            map.insert(key.to_owned(), value);
            None
        }
    }
}

/// Move an array of objects out of `map`, converting each element.
///
/// Anything other than an array of objects stays in the map untouched.
fn take_list<T>(map: &mut JsonMap, key: &str, convert: fn(JsonMap) -> T) -> Vec<T> {
    match map.remove(key) {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) if items.iter().all(Value::is_object) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::Object(object) => Some(convert(object)),
                _ => None,
            })
            .collect(),
        Some(other) => {
            map.insert(key.to_owned(), other);
            Vec::new()
        }
    }
}

fn put<T: Serialize>(map: &mut JsonMap, key: &str, value: &Option<T>) {
    if let Some(value) = value {
        if let Ok(value) = serde_json::to_value(value) {
            map.insert(key.to_owned(), value);
        }
    }
}

fn merge_extra(map: &mut JsonMap, extra: &JsonMap) {
    for (key, value) in extra {
        map.entry(key.clone()).or_insert_with(|| value.clone());
    }
}
