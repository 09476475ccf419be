use std::fs;
use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use tw_odds::{Distribution, InjuryThresholds, RollParams, injury_outcome, success_distribution};

pub fn run(
    injury_params: RollParams,
    hits_json: Option<&str>,
    attack: RollParams,
    attacks: u32,
    hit_threshold: i32,
    thresholds_path: Option<&Path>,
    json: bool,
) -> Result<(), String> {
    let thresholds = load_thresholds(thresholds_path)?;

    let hits = match hits_json {
        Some(raw) => serde_json::from_str::<Distribution>(raw)
            .map_err(|e| format!("invalid hit distribution: {e}"))?,
        None => {
            success_distribution(attack, hit_threshold, attacks).map_err(|e| e.to_string())?
        }
    };

    let outcome = injury_outcome(&hits, injury_params, &thresholds).map_err(|e| e.to_string())?;

    if json {
        let (markers, probabilities) = outcome.blood_markers.series();
        let payload = serde_json::json!({
            "hit_distribution": hits,
            "blood_marker_distribution": {
                "markers": markers,
                "probabilities": probabilities,
            },
            "out_of_action_probability": outcome.out_of_action,
        });
        let out = serde_json::to_string_pretty(&payload).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    println!(
        "  {} {}",
        "Hits".bold(),
        format!("mean {:.2}", hits.expected_value()).dimmed()
    );
    println!();
    println!("{}", super::distribution_table(&hits, "Hits"));
    println!();
    println!(
        "  {} {}",
        "Injury".bold(),
        super::describe_roll(injury_params).dimmed()
    );
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Outcome", "Probability", ""]);
    for (markers, prob) in outcome.blood_markers.iter() {
        let label = format!("{markers} marker{}", if markers == 1 { "" } else { "s" });
        table.add_row(vec![label, super::format_pct(prob), super::prob_bar(prob)]);
    }
    table.add_row(vec![
        "Out of action".red().bold().to_string(),
        super::format_pct(outcome.out_of_action),
        super::prob_bar(outcome.out_of_action),
    ]);
    println!("{table}");
    Ok(())
}

/// Load threshold bands from a JSON file, or fall back to the standard chart.
fn load_thresholds(path: Option<&Path>) -> Result<InjuryThresholds, String> {
    let Some(path) = path else {
        return Ok(InjuryThresholds::default());
    };
    let raw =
        fs::read_to_string(path).map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    let thresholds: InjuryThresholds =
        serde_json::from_str(&raw).map_err(|e| format!("invalid threshold file: {e}"))?;
    thresholds.validate().map_err(|e| e.to_string())?;
    Ok(thresholds)
}
