//! Attempt configuration.
//!
//! Every field may be overridden from a TOML file; omitted fields keep the
//! historical defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::{
    CAPSULE_MASS, GRAVITY, INITIAL_ALTITUDE, INITIAL_FUEL, INITIAL_VELOCITY, MAX_BURN_RATE,
    PERIOD_LENGTH, SPECIFIC_IMPULSE,
};
use crate::errors::SimulationError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LanderConfig {
    /// Starting altitude in miles
    pub initial_altitude: f64,
    /// Starting velocity in miles/s, positive = descending
    pub initial_velocity: f64,
    /// Dry mass in lbs
    pub capsule_mass: f64,
    /// Propellant mass in lbs
    pub fuel: f64,
    pub specific_impulse: f64,
    pub gravity: f64,
    /// Seconds of simulated flight per burn-rate decision
    pub period_length: f64,
    pub max_burn_rate: f64,
}

impl Default for LanderConfig {
    fn default() -> Self {
        LanderConfig {
            initial_altitude: INITIAL_ALTITUDE,
            initial_velocity: INITIAL_VELOCITY,
            capsule_mass: CAPSULE_MASS,
            fuel: INITIAL_FUEL,
            specific_impulse: SPECIFIC_IMPULSE,
            gravity: GRAVITY,
            period_length: PERIOD_LENGTH,
            max_burn_rate: MAX_BURN_RATE,
        }
    }
}

impl LanderConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, SimulationError> {
        let config: LanderConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SimulationError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(SimulationError::ConfigIo)?;
        log::info!("Loaded lander configuration from {}", path.display());
        Self::from_toml_str(&contents)
    }

    pub fn validate(&self) -> Result<(), SimulationError> {
        let finite = [
            ("initial_altitude", self.initial_altitude),
            ("initial_velocity", self.initial_velocity),
            ("capsule_mass", self.capsule_mass),
            ("fuel", self.fuel),
            ("specific_impulse", self.specific_impulse),
            ("gravity", self.gravity),
            ("period_length", self.period_length),
            ("max_burn_rate", self.max_burn_rate),
        ];
        if let Some((name, _)) = finite.iter().find(|(_, value)| !value.is_finite()) {
            return Err(SimulationError::InvalidConfig(format!(
                "{name} must be a finite number"
            )));
        }

        if self.initial_altitude <= 0.0 {
            return Err(SimulationError::InvalidConfig(
                "initial_altitude must be above the surface".to_string(),
            ));
        }
        if self.capsule_mass <= 0.0 {
            return Err(SimulationError::InvalidConfig(
                "capsule_mass must be positive".to_string(),
            ));
        }
        if self.fuel < 0.0 {
            return Err(SimulationError::InvalidConfig(
                "fuel cannot be negative".to_string(),
            ));
        }
        if self.specific_impulse <= 0.0 {
            return Err(SimulationError::InvalidConfig(
                "specific_impulse must be positive".to_string(),
            ));
        }
        if self.gravity <= 0.0 {
            return Err(SimulationError::InvalidConfig(
                "gravity must be positive".to_string(),
            ));
        }
        if self.period_length <= 0.0 {
            return Err(SimulationError::InvalidConfig(
                "period_length must be positive".to_string(),
            ));
        }
        if self.max_burn_rate <= 0.0 {
            return Err(SimulationError::InvalidConfig(
                "max_burn_rate must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
