pub mod injury;
pub mod roll;
pub mod success;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use tw_odds::{Distribution, RollParams};

/// Render a distribution as an outcome/probability/bar table.
pub fn distribution_table(dist: &Distribution, outcome_header: &str) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![outcome_header, "Probability", ""]);
    for (outcome, prob) in dist.iter() {
        table.add_row(vec![outcome.to_string(), format_pct(prob), prob_bar(prob)]);
    }
    table
}

/// A short human description of roll parameters, e.g. "3d6 keep best 2, +1".
pub fn describe_roll(params: RollParams) -> String {
    let mut parts = vec![format!("{}d6", params.pool_size())];
    if params.dice_modifier > 0 {
        parts.push("keep best 2".to_string());
    } else if params.dice_modifier < 0 {
        parts.push("keep worst 2".to_string());
    }
    if params.extra_die {
        parts.push("+1d6".to_string());
    }
    if params.flat_modifier != 0 {
        parts.push(format!("{:+}", params.flat_modifier));
    }
    parts.join(", ")
}

/// Format a probability as a fixed-width percentage.
pub fn format_pct(prob: f64) -> String {
    format!("{:>6.2}%", prob * 100.0)
}

/// A proportional bar, colored by how much mass the outcome carries.
pub fn prob_bar(prob: f64) -> String {
    let filled = (prob * 20.0).round() as usize;
    let bar = "#".repeat(filled);
    if prob >= 0.5 {
        bar.green().to_string()
    } else if prob >= 0.15 {
        bar.yellow().to_string()
    } else {
        bar.dimmed().to_string()
    }
}
