#![allow(dead_code)]

use sc2ranks::Character;
use serde_json::{json, Value};

pub const TEST_APP_KEY: &str = "sc2ranks test";

pub fn tlo_json() -> Value {
    json!({
        "name": "LiquidTLO",
        "character_code": 481,
        "region": "eu",
        "bnet_id": 326029,
        "achievement_points": 2765,
        "portrait": {"icon_id": 2, "row": 4, "column": 1},
        "teams": [{
            "bracket": 1,
            "is_random": false,
            "league": "grandmaster",
            "division": "Division Tal\u{2019}darim Theta",
            "region_rank": 12,
            "world_rank": 40,
            "points": 1410,
            "wins": 288,
            "losses": 180
        }]
    })
}

pub fn socke_json() -> Value {
    json!({
        "name": "aTnSocke",
        "region": "eu",
        "bnet_id": 172567,
        "character_code": 521,
        "teams": [{"bracket": 1, "division": "Division Feld Delta"}]
    })
}

pub fn tlo() -> Character {
    Character::from_json(tlo_json()).unwrap()
}

pub fn socke() -> Character {
    Character::from_json(socke_json()).unwrap()
}

/// A 2v2 team entry listing both players as members
pub fn two_vs_two_json() -> Value {
    json!({
        "bracket": 2,
        "is_random": false,
        "division": "Division Feld Delta",
        "region_rank": 3,
        "world_rank": 17,
        "members": [
            {"name": "LiquidTLO", "character_code": 481, "region": "eu", "bnet_id": 326029},
            {"name": "aTnSocke", "character_code": 521, "region": "eu", "bnet_id": 172567}
        ]
    })
}
