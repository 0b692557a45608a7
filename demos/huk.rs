// Looks up HuK's profile, 1v1 ranking and 2v2 partners
use sc2ranks::prelude::*;

const HUK_NAME: &str = "HuK";
const HUK_CODE: u32 = 530;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Prefer a key from SC2RANKS_APP_KEY, fall back to a demo key
    let api = from_env().unwrap_or_else(|_| Sc2Ranks::new("sc2ranks example"));

    // Basic profile with the basic team list
    let huk = api.fetch_base_character_team(HUK_NAME, HUK_CODE, DEFAULT_REGION).await?;
    println!("{} has {:?} achievement points", huk, huk.achievement_points);

    for team in huk.teams.iter().filter(|t| t.bracket == Some(Bracket::OneVsOne.as_u8())) {
        println!("1v1 ranks: region {:?}, world {:?}", team.region_rank, team.world_rank);
    }

    // The extended query narrows the team list to one bracket
    let huk = api
        .fetch_extended_character_team(HUK_NAME, HUK_CODE, DEFAULT_REGION, Bracket::OneVsOne, false)
        .await?;
    if let Some(team) = huk.team() {
        println!("{}'s 1v1 division is {:?}", huk, team.division);
    }

    let huk = api
        .fetch_extended_character_team(HUK_NAME, HUK_CODE, DEFAULT_REGION, Bracket::TwoVsTwo, false)
        .await?;
    println!("{} plays 2v2 with:", huk);
    for team in &huk.teams {
        // Characters compare by battle.net id
        for member in team.members.iter().filter(|m| **m != huk) {
            println!("  {}", member);
        }
    }

    Ok(())
}
