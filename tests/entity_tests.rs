use pretty_assertions::assert_eq;
use sc2ranks::{Character, SearchResult, Team};
use serde_json::json;
use std::collections::HashSet;

mod test_helpers;
use test_helpers::*;

#[test]
fn test_literal_mapping() {
    let character = Character::from_json(json!({
        "name": "X",
        "bnet_id": 1,
        "teams": [{"division": "D"}]
    }))
    .unwrap();

    assert_eq!(character.name.as_deref(), Some("X"));
    assert_eq!(character.bnet_id, Some(1));
    assert_eq!(character.teams[0].division.as_deref(), Some("D"));
}

#[test]
fn test_equality_uses_bnet_id_only() {
    let a = Character::from_json(json!({"name": "A", "bnet_id": 7, "character_code": 1})).unwrap();
    let b = Character::from_json(json!({"name": "B", "bnet_id": 7, "region": "kr"})).unwrap();
    let c = Character::from_json(json!({"name": "A", "bnet_id": 8, "character_code": 1})).unwrap();

    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(tlo(), tlo());
    assert_ne!(tlo(), socke());
}

#[test]
fn test_characters_without_bnet_id_are_indistinguishable() {
    let a = Character::from_json(json!({"name": "A", "character_code": 1})).unwrap();
    let b = Character::from_json(json!({"name": "B", "character_code": 2})).unwrap();

    assert_eq!(a, b);
    assert_ne!(a, tlo());

    let team = Team::from_json(json!({"members": [{"name": "A", "character_code": 1}]})).unwrap();
    assert!(team.has_member(&b));

    let unique: HashSet<_> = vec![a, b].into_iter().collect();
    assert_eq!(unique.len(), 1);
}

#[test]
fn test_hash_follows_equality() {
    let mut seen = HashSet::new();
    seen.insert(tlo());
    seen.insert(Character::from_json(json!({"name": "renamed", "bnet_id": 326029})).unwrap());
    seen.insert(socke());

    assert_eq!(seen.len(), 2);
}

#[test]
fn test_teams_are_mapped_recursively() {
    let character = Character::from_json(json!({
        "name": "LiquidTLO",
        "bnet_id": 326029,
        "teams": [
            {"bracket": 1, "division": "Division Tal\u{2019}darim Theta"},
            two_vs_two_json(),
            {"bracket": 3, "members": []}
        ]
    }))
    .unwrap();

    assert_eq!(character.teams.len(), 3);
    assert!(character.team().is_none());

    let duo = &character.teams[1];
    assert_eq!(duo.bracket, Some(2));
    assert_eq!(duo.members.len(), 2);
    assert!(duo.has_member(&character));
    assert!(duo.has_member(&socke()));
    assert_eq!(duo.members[1].character_code, Some(521));

    assert!(character.teams[2].members.is_empty());
}

#[test]
fn test_typed_team_fields() {
    let tlo = tlo();
    let team = tlo.team().expect("one team");

    assert_eq!(team.bracket, Some(1));
    assert_eq!(team.is_random, Some(false));
    assert_eq!(team.league.as_deref(), Some("grandmaster"));
    assert_eq!(team.region_rank, Some(12));
    assert_eq!(team.world_rank, Some(40));
    assert_eq!(team.points, Some(1410));
    assert_eq!(team.wins, Some(288));
    assert_eq!(team.losses, Some(180));
    assert!(team.extra.is_empty());
}

#[test]
fn test_unknown_keys_are_preserved() {
    let tlo = tlo();

    assert_eq!(tlo.achievement_points, Some(2765));
    assert_eq!(tlo.get("portrait"), Some(&json!({"icon_id": 2, "row": 4, "column": 1})));
    assert_eq!(tlo.extra.len(), 1);
}

#[test]
fn test_serialisation_keeps_every_key() {
    let original = tlo_json();
    let reencoded = serde_json::to_value(tlo()).unwrap();

    assert_eq!(reencoded, original);
}

#[test]
fn test_empty_lists_are_omitted_when_serialised() {
    let character = Character::from_json(json!({
        "name": "A",
        "bnet_id": 1,
        "teams": [{"division": "D", "members": []}]
    }))
    .unwrap();
    assert_eq!(
        serde_json::to_value(&character).unwrap(),
        json!({"name": "A", "bnet_id": 1, "teams": [{"division": "D"}]})
    );

    let teamless = Character::from_json(json!({"name": "A", "bnet_id": 1, "teams": []})).unwrap();
    assert!(teamless.teams.is_empty());
    assert_eq!(
        serde_json::to_value(&teamless).unwrap(),
        json!({"name": "A", "bnet_id": 1})
    );
}

#[test]
fn test_team_from_json() {
    let team = Team::from_json(json!({"division": "Division Feld Delta", "ladder_id": 99})).unwrap();

    assert_eq!(team.division.as_deref(), Some("Division Feld Delta"));
    assert_eq!(team.get("ladder_id"), Some(&json!(99)));
}

#[test]
fn test_non_object_is_rejected() {
    assert!(Character::from_json(json!([1, 2, 3])).is_err());
    assert!(Team::from_json(json!("division")).is_err());
}

#[test]
fn test_display_uses_name_and_code() {
    assert_eq!(tlo().to_string(), "LiquidTLO$481");

    let nameless = Character::from_json(json!({"bnet_id": 1})).unwrap();
    assert_eq!(nameless.to_string(), "");
}

#[test]
fn test_search_result_mapping() {
    let result: SearchResult = serde_json::from_value(json!({
        "total": 12,
        "characters": [tlo_json(), socke_json()]
    }))
    .unwrap();

    assert_eq!(result.total, 12);
    assert_eq!(result.characters, vec![tlo(), socke()]);
}
