use clap::{Parser, Subcommand};

/// MacroMixer: daily macro targets and a complete shake recipe to hit them.
#[derive(Parser, Debug)]
#[command(name = "macro_mixer")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the profile JSON file.
    #[arg(short, long, default_value = "profile.json")]
    pub file: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create or update the saved profile interactively.
    Profile,

    /// Show daily macro-nutrient targets for the profile.
    Macros {
        /// Print the result as JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Show the full ingredient recipe for the profile's macro targets.
    Recipe {
        /// Print the result as JSON instead of a table.
        #[arg(long)]
        json: bool,

        /// Also write the recipe to a CSV file.
        #[arg(long, value_name = "PATH")]
        csv: Option<String>,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Recipe {
            json: false,
            csv: None,
        }
    }
}
