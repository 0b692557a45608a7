use sc2ranks::blocking::BlockingSc2Ranks;
use sc2ranks::{CharacterQuery, SearchKind, Sc2RanksError};

fn main() -> Result<(), Sc2RanksError> {
    let name = std::env::args().nth(1).unwrap_or_else(|| "LiquidTLO".to_string());
    let api = sc2ranks::blocking::from_env().or_else(|_| BlockingSc2Ranks::new("sc2ranks example"))?;

    let page = match api.search(SearchKind::Contains, "eu", &name, 0) {
        Ok(page) => page,
        Err(e) if e.is_remote() => {
            println!("No characters matching {}: {}", name, e);
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    println!("{} characters match {}; first page:", page.total, name);
    for character in &page.characters {
        println!("  {} (bnet id {:?})", character, character.bnet_id);
    }

    // Refresh the whole page in a single mass request
    let queries: Vec<CharacterQuery> = page
        .characters
        .iter()
        .filter_map(|c| match (&c.name, &c.region, c.bnet_id) {
            (Some(name), Some(region), Some(id)) => {
                Some(CharacterQuery::by_bnet_id(name.as_str(), region.as_str(), id))
            }
            _ => None,
        })
        .collect();

    for character in api.fetch_mass_base_characters(&queries)? {
        println!("  {} has {:?} achievement points", character, character.achievement_points);
    }

    Ok(())
}
