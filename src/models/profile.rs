use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strsim::jaro_winkler;

use crate::error::{MixerError, Result};

/// Biological gender, selecting the gender-specific calorie formulas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

/// Dietary goal: calorie surplus, deficit, or neither.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Regime {
    Bulk,
    Cut,
    Maintain,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl Regime {
    pub fn as_str(&self) -> &'static str {
        match self {
            Regime::Bulk => "bulk",
            Regime::Cut => "cut",
            Regime::Maintain => "maintain",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Regime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = MixerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            other => Err(unknown_variant("gender", other, &["male", "female"])),
        }
    }
}

impl FromStr for Regime {
    type Err = MixerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "bulk" => Ok(Regime::Bulk),
            "cut" => Ok(Regime::Cut),
            "maintain" => Ok(Regime::Maintain),
            other => Err(unknown_variant("regime", other, &["bulk", "cut", "maintain"])),
        }
    }
}

/// Build an InvalidProfile error for an unrecognized enum string, suggesting
/// the closest accepted value when one is a near-miss.
fn unknown_variant(field: &str, input: &str, accepted: &[&str]) -> MixerError {
    let mut msg = format!(
        "unknown {} \"{}\" (expected {})",
        field,
        input,
        accepted.join(" or ")
    );
    if let Some(closest) = closest_match(input, accepted) {
        msg.push_str(&format!("; did you mean \"{}\"?", closest));
    }
    MixerError::InvalidProfile(msg)
}

/// Fuzzy-match an input against accepted values (Jaro-Winkler > 0.7).
fn closest_match<'a>(input: &str, accepted: &[&'a str]) -> Option<&'a str> {
    accepted
        .iter()
        .map(|a| (*a, jaro_winkler(&input.to_lowercase(), a)))
        .filter(|(_, score)| *score > 0.7)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(a, _)| a)
}

/// Body metrics and goal for one calculation.
///
/// A profile is plain input data: nothing here is cached or shared between
/// calls, and every calculation takes it by reference and returns a fresh
/// result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Body weight in kilograms.
    pub weight_kg: f64,

    /// Height in centimeters.
    pub height_cm: f64,

    /// Body fat as a fraction (0.15 for 15%).
    pub body_fat_fraction: f64,

    /// Daily activity multiplier, 1.0 (sedentary) to 2.0 (athlete).
    pub activity_level: f64,

    /// Age in years.
    pub age: f64,

    pub gender: Gender,

    pub regime: Regime,
}

impl Profile {
    /// Body weight minus estimated fat mass, in kilograms.
    #[inline]
    pub fn lean_body_mass_kg(&self) -> f64 {
        self.weight_kg * (1.0 - self.body_fat_fraction)
    }

    /// Check every numeric field against its documented domain.
    ///
    /// Calculations call this before touching any arithmetic, so an
    /// out-of-domain profile can never produce a partial result.
    pub fn validate(&self) -> Result<()> {
        let numeric_fields = [
            ("weight_kg", self.weight_kg),
            ("height_cm", self.height_cm),
            ("body_fat_fraction", self.body_fat_fraction),
            ("activity_level", self.activity_level),
            ("age", self.age),
        ];
        for (name, value) in numeric_fields {
            if !value.is_finite() {
                return Err(MixerError::InvalidProfile(format!(
                    "{} must be a finite number, got {}",
                    name, value
                )));
            }
        }

        if self.weight_kg <= 0.0 {
            return Err(MixerError::InvalidProfile(format!(
                "weight_kg must be positive, got {}",
                self.weight_kg
            )));
        }
        if self.height_cm <= 0.0 {
            return Err(MixerError::InvalidProfile(format!(
                "height_cm must be positive, got {}",
                self.height_cm
            )));
        }
        if !(0.0..1.0).contains(&self.body_fat_fraction) {
            return Err(MixerError::InvalidProfile(format!(
                "body_fat_fraction must be in [0, 1), got {}",
                self.body_fat_fraction
            )));
        }
        if !(1.0..=2.0).contains(&self.activity_level) {
            return Err(MixerError::InvalidProfile(format!(
                "activity_level must be in [1, 2], got {}",
                self.activity_level
            )));
        }
        if self.age <= 0.0 {
            return Err(MixerError::InvalidProfile(format!(
                "age must be positive, got {}",
                self.age
            )));
        }

        Ok(())
    }
}
