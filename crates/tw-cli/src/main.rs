//! Terminal frontend for the Trenchwarden probability engine.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};
use tw_odds::RollParams;

#[derive(Parser)]
#[command(
    name = "tw",
    about = "Trenchwarden — dice odds for the trenches",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct RollArgs {
    /// Dice added to the 2d6 pool: positive keeps the best two, negative the worst two
    #[arg(short = 'd', long = "dice", default_value_t = 0, allow_negative_numbers = true)]
    dice: i32,

    /// Add one extra d6 on top of the kept dice
    #[arg(short = 'x', long)]
    extra_die: bool,

    /// Flat modifier added to the result
    #[arg(
        short = 'm',
        long = "modifier",
        default_value_t = 0,
        allow_negative_numbers = true
    )]
    modifier: i32,
}

impl RollArgs {
    fn params(&self) -> RollParams {
        RollParams {
            dice_modifier: self.dice,
            extra_die: self.extra_die,
            flat_modifier: self.modifier,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Show the outcome distribution of a single combined roll
    Roll {
        #[command(flatten)]
        roll: RollArgs,

        /// Print machine-readable JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show the distribution of successes across independent rolls
    Success {
        #[command(flatten)]
        roll: RollArgs,

        /// Minimum outcome that counts as a success
        #[arg(short, long, default_value_t = 7)]
        threshold: i32,

        /// Number of independent rolls
        #[arg(short, long, default_value_t = 1)]
        rolls: u32,

        /// Print machine-readable JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Simulate injury rolls for a volley of attacks
    Injury {
        /// Injury-roll parameters
        #[command(flatten)]
        roll: RollArgs,

        /// Number of attack rolls against the target
        #[arg(short, long, default_value_t = 1)]
        attacks: u32,

        /// Minimum attack outcome that scores a hit
        #[arg(short = 't', long, default_value_t = 7)]
        hit_threshold: i32,

        /// Dice modifier for the attack rolls
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        attack_dice: i32,

        /// Extra d6 on the attack rolls
        #[arg(long)]
        attack_extra_die: bool,

        /// Flat modifier on the attack rolls
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        attack_modifier: i32,

        /// Hit-count distribution as JSON (hits to probability), replacing the attack parameters
        #[arg(
            long,
            conflicts_with_all = [
                "attacks",
                "hit_threshold",
                "attack_dice",
                "attack_extra_die",
                "attack_modifier",
            ]
        )]
        hits: Option<String>,

        /// JSON file with custom injury threshold bands
        #[arg(long)]
        thresholds: Option<PathBuf>,

        /// Print machine-readable JSON instead of tables
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Roll { roll, json } => commands::roll::run(roll.params(), json),
        Commands::Success {
            roll,
            threshold,
            rolls,
            json,
        } => commands::success::run(roll.params(), threshold, rolls, json),
        Commands::Injury {
            roll,
            attacks,
            hit_threshold,
            attack_dice,
            attack_extra_die,
            attack_modifier,
            hits,
            thresholds,
            json,
        } => {
            let attack = RollParams {
                dice_modifier: attack_dice,
                extra_die: attack_extra_die,
                flat_modifier: attack_modifier,
            };
            commands::injury::run(
                roll.params(),
                hits.as_deref(),
                attack,
                attacks,
                hit_threshold,
                thresholds.as_deref(),
                json,
            )
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
