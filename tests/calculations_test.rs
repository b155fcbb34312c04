use assert_float_eq::assert_float_relative_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use macro_mixer_rs::calculator::{calculate_calories, calculate_macros};
use macro_mixer_rs::error::MixerError;
use macro_mixer_rs::models::{Gender, Profile, Regime};

fn male_profile(weight_kg: f64, regime: Regime) -> Profile {
    Profile {
        weight_kg,
        height_cm: 180.0,
        body_fat_fraction: 0.15,
        activity_level: 1.5,
        age: 30.0,
        gender: Gender::Male,
        regime,
    }
}

#[test]
fn test_reference_male_maintain_scenario() {
    // 80 kg, 180 cm, 15% body fat, activity 1.5, age 30:
    // Harris-Benedict 1859.2, Mifflin-St Jeor 1781.6, Katch-McArdle 1838.8,
    // so the averaged and activity-scaled target is 2739.8 kcal.
    let macros = calculate_macros(&male_profile(80.0, Regime::Maintain)).unwrap();

    assert_float_relative_eq!(macros.calories, 2739.8, 1e-9);
    assert_float_relative_eq!(macros.protein_g, 224.87150724, 1e-9);
    assert_float_relative_eq!(macros.fat_g, 79.36641432, 1e-9);
    assert_float_relative_eq!(macros.carbs_g, 281.50406054, 1e-9);
}

#[test]
fn test_reference_female_cut_scenario() {
    let profile = Profile {
        weight_kg: 65.0,
        height_cm: 165.0,
        body_fat_fraction: 0.25,
        activity_level: 1.3,
        age: 28.0,
        gender: Gender::Female,
        regime: Regime::Cut,
    };
    let macros = calculate_macros(&profile).unwrap();

    assert_float_relative_eq!(macros.calories, 1657.2036, 1e-9);
    assert_float_relative_eq!(macros.protein_g, 161.2130290875, 1e-9);
    assert_float_relative_eq!(macros.fat_g, 64.485211635, 1e-9);
    assert_float_relative_eq!(macros.carbs_g, 107.99614473375, 1e-9);
}

#[test]
fn test_regime_scales_calories_only() {
    let maintain = calculate_macros(&male_profile(80.0, Regime::Maintain)).unwrap();
    let bulk = calculate_macros(&male_profile(80.0, Regime::Bulk)).unwrap();
    let cut = calculate_macros(&male_profile(80.0, Regime::Cut)).unwrap();

    assert_float_relative_eq!(bulk.calories / maintain.calories, 1.1, 1e-12);
    assert_float_relative_eq!(cut.calories / maintain.calories, 0.9, 1e-12);

    // Protein and fat come from body composition alone.
    assert_eq!(bulk.protein_g.to_bits(), cut.protein_g.to_bits());
    assert_eq!(bulk.fat_g.to_bits(), cut.fat_g.to_bits());
    assert!(bulk.carbs_g > maintain.carbs_g);
    assert!(maintain.carbs_g > cut.carbs_g);
}

#[test]
fn test_calories_consistent_across_entry_points() {
    let profile = male_profile(80.0, Regime::Bulk);
    let calories = calculate_calories(&profile).unwrap();
    let macros = calculate_macros(&profile).unwrap();
    assert_eq!(calories.to_bits(), macros.calories.to_bits());
}

#[test]
fn test_protein_and_fat_grow_with_weight() {
    let mut last_protein = 0.0;
    let mut last_fat = 0.0;
    for weight_kg in [50.0, 65.0, 80.0, 95.0, 110.0, 125.0] {
        let macros = calculate_macros(&male_profile(weight_kg, Regime::Maintain)).unwrap();
        assert!(macros.protein_g > last_protein);
        assert!(macros.fat_g > last_fat);
        last_protein = macros.protein_g;
        last_fat = macros.fat_g;
    }
}

#[test]
fn test_deterministic_over_random_profiles() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..200 {
        let profile = Profile {
            weight_kg: rng.gen_range(45.0..150.0),
            height_cm: rng.gen_range(140.0..210.0),
            body_fat_fraction: rng.gen_range(0.05..0.45),
            activity_level: rng.gen_range(1.0..=2.0),
            age: rng.gen_range(18.0..90.0),
            gender: if rng.gen_bool(0.5) {
                Gender::Male
            } else {
                Gender::Female
            },
            regime: match rng.gen_range(0..3) {
                0 => Regime::Bulk,
                1 => Regime::Cut,
                _ => Regime::Maintain,
            },
        };
        match (calculate_macros(&profile), calculate_macros(&profile)) {
            (Ok(first), Ok(second)) => {
                assert_eq!(first.calories.to_bits(), second.calories.to_bits());
                assert_eq!(first.protein_g.to_bits(), second.protein_g.to_bits());
                assert_eq!(first.fat_g.to_bits(), second.fat_g.to_bits());
                assert_eq!(first.carbs_g.to_bits(), second.carbs_g.to_bits());
            }
            (Err(_), Err(_)) => {}
            _ => panic!("same profile produced both success and failure"),
        }
    }
}

#[test]
fn test_energy_identity_holds() {
    let macros = calculate_macros(&male_profile(95.0, Regime::Bulk)).unwrap();
    let reconstructed = 4.0 * macros.protein_g + 9.0 * macros.fat_g + 4.0 * macros.carbs_g;
    assert_float_relative_eq!(reconstructed, macros.calories, 1e-9);
}

#[test]
fn test_invalid_profiles_rejected_before_computation() {
    let valid = male_profile(80.0, Regime::Maintain);

    let cases = [
        Profile {
            weight_kg: 0.0,
            ..valid
        },
        Profile {
            height_cm: -170.0,
            ..valid
        },
        Profile {
            body_fat_fraction: 1.0,
            ..valid
        },
        Profile {
            activity_level: 2.5,
            ..valid
        },
        Profile {
            activity_level: 0.8,
            ..valid
        },
        Profile {
            age: f64::NAN,
            ..valid
        },
    ];

    for profile in cases {
        let err = calculate_macros(&profile).unwrap_err();
        assert!(
            matches!(err, MixerError::InvalidProfile(_)),
            "expected InvalidProfile, got {err}"
        );
    }
}

#[test]
fn test_enum_parse_rejects_unknown_strings() {
    let err = "other".parse::<Gender>().unwrap_err();
    assert!(matches!(err, MixerError::InvalidProfile(_)));

    let err = "maintian".parse::<Regime>().unwrap_err();
    let message = err.to_string();
    assert!(message.contains("did you mean \"maintain\"?"), "{message}");
}

#[test]
fn test_infeasible_carbs_named_in_error() {
    // Heavy, short, lean and sedentary on a cut: protein and fat energy
    // alone exceed the calorie target.
    let profile = Profile {
        weight_kg: 200.0,
        height_cm: 150.0,
        body_fat_fraction: 0.0,
        activity_level: 1.0,
        age: 80.0,
        gender: Gender::Male,
        regime: Regime::Cut,
    };

    match calculate_macros(&profile).unwrap_err() {
        MixerError::InfeasibleTarget { field, value } => {
            assert_eq!(field, "carbs_g");
            assert!(value < 0.0);
        }
        other => panic!("expected InfeasibleTarget, got {other}"),
    }
}
