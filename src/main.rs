use clap::Parser;
use std::path::Path;

use macro_mixer_rs::calculator::calculate_macros;
use macro_mixer_rs::cli::{Cli, Command};
use macro_mixer_rs::error::Result;
use macro_mixer_rs::generator::{generate_recipe, STANDARD_TABLE};
use macro_mixer_rs::interface::{
    display_macros, display_recipe, prompt_profile, prompt_yes_no, write_recipe_csv,
};
use macro_mixer_rs::models::Profile;
use macro_mixer_rs::persistence::{load_profile, save_profile};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Profile => cmd_profile(&cli.file),
        Command::Macros { json } => cmd_macros(&cli.file, json),
        Command::Recipe { json, csv } => cmd_recipe(&cli.file, json, csv.as_deref()),
    }
}

/// Load the saved profile, or collect one interactively and offer to save it.
fn obtain_profile(file_path: &str) -> Result<Profile> {
    let path = Path::new(file_path);
    if path.exists() {
        let profile = load_profile(path)?;
        println!(
            "Loaded profile from {} ({}, {}, {:.0} kg)",
            file_path, profile.gender, profile.regime, profile.weight_kg
        );
        return Ok(profile);
    }

    println!("No profile found at {}", file_path);
    let profile = prompt_profile()?;

    if prompt_yes_no("Save this profile for next time?", true)? {
        save_profile(path, &profile)?;
        println!("Profile saved to {}", file_path);
    }

    Ok(profile)
}

/// Create or update the saved profile interactively.
fn cmd_profile(file_path: &str) -> Result<()> {
    let profile = prompt_profile()?;
    save_profile(file_path, &profile)?;
    println!("Profile saved to {}", file_path);
    Ok(())
}

/// Show daily macro targets for the profile.
fn cmd_macros(file_path: &str, json: bool) -> Result<()> {
    let profile = obtain_profile(file_path)?;
    let macros = calculate_macros(&profile)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&macros)?);
    } else {
        display_macros(&macros);
    }

    Ok(())
}

/// Show the full recipe for the profile's macro targets.
fn cmd_recipe(file_path: &str, json: bool, csv: Option<&str>) -> Result<()> {
    let profile = obtain_profile(file_path)?;
    let macros = calculate_macros(&profile)?;
    let recipe = generate_recipe(&macros, &STANDARD_TABLE)?;

    if json {
        let combined = serde_json::json!({
            "macros": macros,
            "recipe": recipe,
        });
        println!("{}", serde_json::to_string_pretty(&combined)?);
    } else {
        display_macros(&macros);
        display_recipe(&recipe);
    }

    if let Some(csv_path) = csv {
        write_recipe_csv(Path::new(csv_path), &recipe)?;
        println!("Recipe written to {}", csv_path);
    }

    Ok(())
}
