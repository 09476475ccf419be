use colored::Colorize;

use tw_odds::{RollParams, roll_distribution};

pub fn run(params: RollParams, json: bool) -> Result<(), String> {
    let dist = roll_distribution(params).map_err(|e| e.to_string())?;

    if json {
        let out = serde_json::to_string_pretty(&dist).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    println!(
        "  {} {}",
        "Roll".bold(),
        super::describe_roll(params).dimmed()
    );
    println!();
    println!("{}", super::distribution_table(&dist, "Outcome"));
    println!();
    println!(
        "  mean {:.2}, range {}..{}",
        dist.expected_value(),
        dist.min_outcome().unwrap_or(0),
        dist.max_outcome().unwrap_or(0)
    );
    Ok(())
}
