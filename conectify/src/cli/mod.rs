use std::path::PathBuf;

use clap::{Parser, Subcommand};
use conectify_util::XpEvent;

pub mod output;

#[derive(Parser, Debug)]
#[command(name = "conectify", version, about = "Inspect Conectify experience levels")]
pub struct Cli {
    /// Directory containing the `config/` folder. Missing files are created with defaults.
    #[arg(long, default_value = ".")]
    pub config_dir: PathBuf,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Show the level and progress for each XP value.
    Progress {
        #[arg(long)]
        json: bool,
        #[arg(required = true, allow_negative_numbers = true)]
        xp: Vec<i64>,
    },
    /// Award XP events, in order, starting from XP.
    Award {
        #[arg(long)]
        json: bool,
        #[arg(allow_negative_numbers = true)]
        xp: i64,
        /// project_completed, five_star_review, proposal_accepted, answer_accepted,
        /// question_answered or profile_completed
        #[arg(required = true)]
        events: Vec<XpEvent>,
    },
    /// Print the XP at which every level starts.
    Table,
}
