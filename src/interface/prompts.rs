use dialoguer::{Confirm, Input};
use strsim::jaro_winkler;

use crate::error::{MixerError, Result};
use crate::models::Profile;

/// Prompt for a number.
fn prompt_number(prompt: &str) -> Result<f64> {
    let input: String = Input::new().with_prompt(prompt).interact_text()?;

    input.trim().parse().map_err(|_| {
        MixerError::InvalidProfile(format!("expected a number, got \"{}\"", input.trim()))
    })
}

/// Prompt for one of a fixed set of values, with fuzzy matching.
///
/// Retries until an accepted value is entered or a near-miss is confirmed.
fn prompt_choice(prompt: &str, accepted: &[&str]) -> Result<String> {
    loop {
        let input: String = Input::new().with_prompt(prompt).interact_text()?;
        let input = input.trim().to_lowercase();

        if accepted.contains(&input.as_str()) {
            return Ok(input);
        }

        let mut candidates: Vec<(&str, f64)> = accepted
            .iter()
            .map(|a| (*a, jaro_winkler(&input, a)))
            .filter(|(_, score)| *score > 0.7)
            .collect();
        candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        if let Some((best, _)) = candidates.first() {
            let confirm = Confirm::new()
                .with_prompt(format!("Did you mean '{}'?", best))
                .default(true)
                .interact()?;

            if confirm {
                return Ok(best.to_string());
            }
        }

        println!("Expected one of: {}", accepted.join(", "));
    }
}

/// Collect a complete profile interactively.
///
/// The assembled profile is validated before it is returned, so callers never
/// see out-of-domain values.
pub fn prompt_profile() -> Result<Profile> {
    let weight_kg = prompt_number("Body weight (kg)")?;
    let height_cm = prompt_number("Height (cm)")?;
    let body_fat_fraction = prompt_number("Body fat fraction (0.15 for 15%)")?;
    let activity_level = prompt_number("Activity level, 1.0 (sedentary) to 2.0 (athlete)")?;
    let age = prompt_number("Age (years)")?;
    let gender = prompt_choice("Gender (male/female)", &["male", "female"])?.parse()?;
    let regime =
        prompt_choice("Regime (bulk/cut/maintain)", &["bulk", "cut", "maintain"])?.parse()?;

    let profile = Profile {
        weight_kg,
        height_cm,
        body_fat_fraction,
        activity_level,
        age,
        gender,
        regime,
    };
    profile.validate()?;
    Ok(profile)
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
