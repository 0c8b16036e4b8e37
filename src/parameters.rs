//! Per-run simulation configuration.
//!
//! A [`Parameters`] value is immutable for the duration of a run and is passed explicitly into
//! every operation; there is no ambient global configuration. Values can come from
//! [`Parameters::default`], [`Parameters::lethal`], a JSON file, or be built by hand.

use std::fs::File;
use std::path::Path;

use serde_derive::{Deserialize, Serialize};

use crate::error::ContagionError;

/// Configuration for a simulation run. All chance fields are percentages in `[0, 100]`.
///
/// The base model covers infection, recovery and quarantine. Setting `death_chance` and
/// `incubation_period` together enables the lethal variant, in which infected agents may die and
/// only become eligible for recovery or quarantine once symptomatic.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct Parameters {
    /// Chance of infection per exposure to an infectious contact.
    pub infection_chance: f64,
    /// Chance of recovering per symptomatic round.
    pub recovery_chance: f64,
    /// Chance per round of entering quarantine once symptomatic and not already quarantined.
    pub quarantine_chance: f64,
    /// Number of rounds an agent remains quarantined.
    pub quarantine_duration: u32,
    /// Chance of dying per infected round. Lethal variant only.
    pub death_chance: Option<f64>,
    /// Rounds between infection and symptom onset. Lethal variant only.
    pub incubation_period: Option<u32>,
}

impl Default for Parameters {
    fn default() -> Self {
        Parameters {
            infection_chance: 50.0,
            recovery_chance: 40.0,
            quarantine_chance: 30.0,
            quarantine_duration: 240,
            death_chance: None,
            incubation_period: None,
        }
    }
}

impl Parameters {
    /// Default configuration for the lethal variant, modeled on a disease with a long incubation
    /// period and a high fatality rate.
    pub fn lethal() -> Self {
        Parameters {
            death_chance: Some(50.0),
            incubation_period: Some(5),
            ..Parameters::default()
        }
    }

    /// True when the death and incubation extensions are active.
    pub fn is_lethal(&self) -> bool {
        self.death_chance.is_some()
    }

    /// Checks every field against its documented range. Out-of-range values fail with
    /// `InvalidParameter` rather than being silently clamped.
    ///
    /// # Errors
    ///
    /// Returns `ContagionError::InvalidParameter` describing the offending field.
    pub fn validate(&self) -> Result<(), ContagionError> {
        check_chance("infection_chance", self.infection_chance)?;
        check_chance("recovery_chance", self.recovery_chance)?;
        check_chance("quarantine_chance", self.quarantine_chance)?;
        if self.quarantine_duration == 0 {
            return Err(ContagionError::InvalidParameter(
                "quarantine_duration must be positive".to_string(),
            ));
        }
        match (self.death_chance, self.incubation_period) {
            (None, None) => {}
            (Some(death_chance), Some(incubation_period)) => {
                check_chance("death_chance", death_chance)?;
                if incubation_period == 0 {
                    return Err(ContagionError::InvalidParameter(
                        "incubation_period must be positive".to_string(),
                    ));
                }
            }
            _ => {
                return Err(ContagionError::InvalidParameter(
                    "death_chance and incubation_period must be set together".to_string(),
                ));
            }
        }
        Ok(())
    }

    /// Loads parameters from a JSON file and validates them. Fields absent from the file take
    /// their default values.
    ///
    /// # Errors
    ///
    /// Returns a `ContagionError` if the file cannot be read, parsed, or validated.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ContagionError> {
        let file = File::open(path)?;
        let parameters: Parameters = serde_json::from_reader(file)?;
        parameters.validate()?;
        Ok(parameters)
    }
}

fn check_chance(name: &str, value: f64) -> Result<(), ContagionError> {
    if !(0.0..=100.0).contains(&value) {
        return Err(ContagionError::InvalidParameter(format!(
            "{name} must be in [0, 100], got {value}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn defaults_are_valid() {
        Parameters::default().validate().unwrap();
        Parameters::lethal().validate().unwrap();
    }

    #[test]
    fn lethal_variant_detection() {
        assert!(!Parameters::default().is_lethal());
        assert!(Parameters::lethal().is_lethal());
    }

    #[test]
    fn chance_out_of_range() {
        let parameters = Parameters {
            infection_chance: 101.0,
            ..Parameters::default()
        };
        let err = parameters.validate().unwrap_err();
        assert!(matches!(err, ContagionError::InvalidParameter(_)));

        let parameters = Parameters {
            recovery_chance: -1.0,
            ..Parameters::default()
        };
        assert!(parameters.validate().is_err());
    }

    #[test]
    fn zero_quarantine_duration_rejected() {
        let parameters = Parameters {
            quarantine_duration: 0,
            ..Parameters::default()
        };
        assert!(parameters.validate().is_err());
    }

    #[test]
    fn lethal_fields_must_be_set_together() {
        let parameters = Parameters {
            death_chance: Some(50.0),
            ..Parameters::default()
        };
        assert!(parameters.validate().is_err());

        let parameters = Parameters {
            incubation_period: Some(5),
            ..Parameters::default()
        };
        assert!(parameters.validate().is_err());
    }

    #[test]
    fn load_from_json_file() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config.json");
        let mut file = File::create(&path).unwrap();
        file.write_all(br#"{"infection_chance": 25.0, "quarantine_duration": 10}"#)
            .unwrap();

        let parameters = Parameters::from_json_file(&path).unwrap();
        assert_eq!(parameters.infection_chance, 25.0);
        assert_eq!(parameters.quarantine_duration, 10);
        // Unspecified fields fall back to defaults.
        assert_eq!(parameters.recovery_chance, 40.0);
        assert_eq!(parameters.death_chance, None);
    }

    #[test]
    fn load_rejects_invalid_json_values() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config.json");
        let mut file = File::create(&path).unwrap();
        file.write_all(br#"{"infection_chance": 200.0}"#).unwrap();

        assert!(Parameters::from_json_file(&path).is_err());
    }
}
