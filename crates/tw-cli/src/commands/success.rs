use colored::Colorize;

use tw_odds::{RollParams, roll_distribution, success_distribution};

pub fn run(params: RollParams, threshold: i32, rolls: u32, json: bool) -> Result<(), String> {
    let dist = success_distribution(params, threshold, rolls).map_err(|e| e.to_string())?;

    if json {
        let out = serde_json::to_string_pretty(&dist).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    let single = roll_distribution(params).map_err(|e| e.to_string())?;
    let p = single.mass_at_or_above(threshold);

    println!(
        "  {} {}",
        "Success".bold(),
        format!(
            "{} needing {threshold}+, {rolls} roll{}",
            super::describe_roll(params),
            if rolls == 1 { "" } else { "s" }
        )
        .dimmed()
    );
    println!("  single-roll success chance {}", super::format_pct(p).bold());
    println!();
    println!("{}", super::distribution_table(&dist, "Successes"));
    println!();
    println!("  mean {:.2} successes", dist.expected_value());
    Ok(())
}
