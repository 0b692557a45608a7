use sc2ranks::{Bracket, Sc2Ranks, Sc2RanksError, Sc2RanksResult, Team, ALL};

// Treat an empty or missing division as "no teams" instead of a failure
async fn division_or_empty(api: &Sc2Ranks, division_id: u64) -> Sc2RanksResult<Vec<Team>> {
    match api
        .fetch_custom_division_list(division_id, ALL, ALL, Bracket::OneVsOne, false)
        .await
    {
        Err(Sc2RanksError::Remote { message }) => {
            eprintln!("division {}: {}", division_id, message);
            Ok(Vec::new())
        }
        other => other,
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api = Sc2Ranks::default();

    // A name that cannot exist comes back as a remote error
    match api.fetch_base_character("012fakename345", 1, "us").await {
        Ok(character) => println!("unexpectedly found {}", character),
        Err(e) if e.is_remote() => println!("Expected remote error: {}", e),
        Err(e) => println!("Transport or decode failure: {}", e),
    }

    let teams = division_or_empty(&api, 1).await?;
    println!("Division 1 has {} teams", teams.len());

    Ok(())
}
