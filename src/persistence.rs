use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::models::Profile;

/// Load a profile from a JSON file.
///
/// The profile is validated after parsing, so a hand-edited file cannot
/// smuggle out-of-domain values into a calculation.
pub fn load_profile<P: AsRef<Path>>(path: P) -> Result<Profile> {
    let content = fs::read_to_string(path)?;
    let profile: Profile = serde_json::from_str(&content)?;
    profile.validate()?;
    Ok(profile)
}

/// Save a profile to a JSON file.
pub fn save_profile<P: AsRef<Path>>(path: P, profile: &Profile) -> Result<()> {
    let json = serde_json::to_string_pretty(profile)?;
    fs::write(path, json)?;
    Ok(())
}
