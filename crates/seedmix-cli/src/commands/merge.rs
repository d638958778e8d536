use std::path::Path;

use colored::Colorize;
use seedmix_core::{MergeConfig, MergeSession};

use super::SourceArg;

pub fn run(
    sources: &[String],
    name: Option<&str>,
    output: Option<&Path>,
    stdout: bool,
) -> Result<(), String> {
    let args: Vec<SourceArg> = sources.iter().map(|s| SourceArg::parse(s)).collect();

    let mut session = MergeSession::new(MergeConfig::default());
    let report = session.add_sources(args.iter().map(|a| a.path.clone()));
    super::print_add_report(&report);

    let weights: Vec<(&Path, &str)> = args
        .iter()
        .filter(|a| session.contains(&a.path))
        .filter_map(|a| a.weight.as_deref().map(|w| (a.path.as_path(), w)))
        .collect();
    session.set_weights(weights).map_err(|e| e.to_string())?;

    let name = name.unwrap_or(&session.config().default_name).to_string();

    if stdout {
        let combined = session.merge(&name).map_err(|e| e.to_string())?;
        print!("{}", combined.to_yaml().map_err(|e| e.to_string())?);
        return Ok(());
    }

    let destination = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| MergeSession::default_destination(&name));
    let combined = session
        .merge_and_save(&name, &destination)
        .map_err(|e| e.to_string())?;

    println!(
        "  {} '{}' to {}",
        "Merged".green().bold(),
        combined.name,
        destination.display()
    );
    println!(
        "  {} games from {} sources, {} triggers ({} carried over)",
        combined.game.len(),
        session.len(),
        combined.triggers.len(),
        combined.carried_trigger_count()
    );

    Ok(())
}
