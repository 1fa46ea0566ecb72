//! Pet table example: catalog pets alongside user-entered samples
//!
//! This example demonstrates:
//! - Loading the official catalog
//! - Recording observed samples and fitting a model
//! - Filtering, ranking and tabulating pets for display
//! - Exporting the sample store
//!
//! Run with `RUST_LOG=debug cargo run --example pet_table` to see engine logs.

use petstat::view::format_stat;
use petstat::*;

const CATALOG: &str = r#"{
    "Slime":   { "BaseDamage": 2,   "BaseHealth": 30, "SellAmount": 5 },
    "Fire Fox":{ "BaseDamage": 4.5, "BaseHealth": 12, "SellAmount": 40 },
    "Dragon":  { "BaseDamage": 9,   "BaseHealth": 80, "SellAmount": 900, "Legendary": true }
}"#;

fn main() -> Result<(), PetError> {
    env_logger::init();

    let mut roster = Catalog::from_json(CATALOG)?.to_roster();

    // Observations typed in by a player
    println!("Recording samples for Wolf:");
    for (level, value) in [("1", "3"), ("4", "9.5"), ("8", "17"), ("x", "1")] {
        let sample = stat::parse_level(level)
            .and_then(|level| stat::parse_value(value).map(|value| (level, value)));
        match sample {
            Ok((level, value)) => {
                roster.record_sample("Wolf", StatKind::Damage, level, value)?;
                println!("  - level {}: {}", level, value);
            }
            Err(err) => println!("  - skipped: {}", err),
        }
    }

    let wolf = roster.get(&"Wolf".into());
    if let Some(reading) = wolf.and_then(|wolf| explain(wolf, StatKind::Damage, 20)) {
        println!("\n{}", reading.describe());
    }

    let filters = FilterState::new().with_levels(1, 5);
    let visible = filters.visible(&roster);

    println!("\n=== Damage Ranking ===");
    for (rank, id) in visible.iter().enumerate() {
        println!("  {}. {}", rank + 1, id);
    }

    if let Some(best) = BestPet::find(&roster, &visible) {
        let star = if best.legendary { " *" } else { "" };
        println!("\nBest pet: {}{} (damage {} per level)", best.entity, star, best.damage);
    }

    println!("\n=== Progression ===");
    let table = ProgressionTable::build(&roster, &visible, filters.level_range);
    let header: Vec<String> = table.entities.iter().map(|id| format!("{:>12}", id)).collect();
    println!("Level {}", header.join(""));
    for row in &table.rows {
        let cells: Vec<String> = row
            .cells
            .iter()
            .map(|cell| {
                let damage = cell.damage.map(format_stat).unwrap_or_else(|| "-".into());
                format!("{:>12}", damage)
            })
            .collect();
        println!("{:>5} {}", row.level, cells.join(""));
    }

    println!("\n=== Exported Samples ===");
    println!("{}", SampleStore::from_roster(&roster, StatKind::Damage).to_json()?);

    Ok(())
}
