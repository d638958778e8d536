use std::path::PathBuf;

use comfy_table::{ContentArrangement, Table};
use seedmix_core::{MergeConfig, SourceDocument};

pub fn run(sources: &[PathBuf]) -> Result<(), String> {
    let config = MergeConfig::default();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Source", "Slot", "Name", "Games", "Triggers"]);

    let mut slot_count = 0;
    let mut game_count = 0;

    for path in sources {
        let source =
            SourceDocument::load(path, config.default_weight).map_err(|e| e.to_string())?;

        for (index, slot) in source.slots.iter().enumerate() {
            let games = slot.game_names();
            game_count += games.len();
            slot_count += 1;

            let kind = if slot.is_multi() { " (multi)" } else { "" };
            table.add_row(vec![
                path.display().to_string(),
                (index + 1).to_string(),
                slot.name.clone().unwrap_or_else(|| "—".to_string()),
                format!("{}{kind}", games.join(", ")),
                slot.triggers.len().to_string(),
            ]);
        }
    }

    println!("{table}");
    println!();
    println!(
        "  {} sources, {slot_count} slots, {game_count} game entries",
        sources.len()
    );

    Ok(())
}
