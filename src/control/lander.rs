use crate::control::config::LanderConfig;
use crate::errors::SimulationError;
use crate::trajectory_system::kinematics::PhysicsState;

/// Mass and propulsion parameters of the capsule.
#[derive(Debug, Clone, PartialEq)]
pub struct LanderState {
    pub capsule_mass: f64,
    pub fuel: f64,
    pub total_mass: f64,
    pub specific_impulse: f64,
    pub gravity: f64,
}

impl LanderState {
    pub fn new(capsule_mass: f64, fuel: f64, specific_impulse: f64, gravity: f64) -> Self {
        LanderState {
            capsule_mass,
            fuel,
            total_mass: capsule_mass + fuel,
            specific_impulse,
            gravity,
        }
    }

    // Tanks never go negative; total mass follows fuel.
    pub fn consume_fuel(&mut self, amount: f64) {
        self.fuel = (self.fuel - amount).max(0.0);
        self.total_mass = self.capsule_mass + self.fuel;
    }

    pub fn is_out_of_fuel(&self) -> bool {
        self.fuel < crate::constants::FUEL_EPSILON
    }

    /// Acceleration delivered by the engine at `burn_rate` with the current mass.
    pub fn thrust_acceleration(&self, burn_rate: f64) -> f64 {
        self.specific_impulse * burn_rate / self.total_mass
    }
}

/// Builds the initial state pair for a fresh landing attempt.
pub fn new_attempt(config: &LanderConfig) -> Result<(PhysicsState, LanderState), SimulationError> {
    config.validate()?;

    let physics = PhysicsState::new(config.initial_altitude, config.initial_velocity);
    let lander = LanderState::new(
        config.capsule_mass,
        config.fuel,
        config.specific_impulse,
        config.gravity,
    );

    log::debug!(
        "New attempt: altitude {:.3}, velocity {:.4}, fuel {:.1}",
        physics.altitude,
        physics.velocity,
        lander.fuel
    );

    Ok((physics, lander))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    #[test]
    fn test_new_attempt_defaults() {
        let (physics, lander) = new_attempt(&LanderConfig::default()).unwrap();
        assert_eq!(physics.altitude, INITIAL_ALTITUDE);
        assert_eq!(physics.velocity, INITIAL_VELOCITY);
        assert_eq!(physics.elapsed_time, 0.0);
        assert_eq!(lander.capsule_mass, CAPSULE_MASS);
        assert_eq!(lander.fuel, INITIAL_FUEL);
        assert_eq!(lander.total_mass, 33_000.0);
        assert_eq!(lander.specific_impulse, SPECIFIC_IMPULSE);
        assert_eq!(lander.gravity, GRAVITY);
    }

    #[test]
    fn test_new_attempt_rejects_invalid_config() {
        let config = LanderConfig {
            fuel: -1.0,
            ..LanderConfig::default()
        };
        assert!(matches!(
            new_attempt(&config),
            Err(SimulationError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_consume_fuel() {
        let mut lander = LanderState::new(1000.0, 500.0, 1.8, GRAVITY);
        lander.consume_fuel(200.0);
        assert_eq!(lander.fuel, 300.0);
        assert_eq!(lander.total_mass, 1300.0);
        assert!(!lander.is_out_of_fuel());
    }

    #[test]
    fn test_consume_fuel_stops_at_empty() {
        let mut lander = LanderState::new(1000.0, 5.0, 1.8, GRAVITY);
        lander.consume_fuel(10.0);
        assert_eq!(lander.fuel, 0.0);
        assert_eq!(lander.total_mass, 1000.0);
        assert!(lander.is_out_of_fuel());
    }

    #[test]
    fn test_thrust_acceleration() {
        let lander = LanderState::new(CAPSULE_MASS, INITIAL_FUEL, SPECIFIC_IMPULSE, GRAVITY);
        assert_abs_diff_eq!(lander.thrust_acceleration(200.0), 1.8 * 200.0 / 33_000.0);
        assert_eq!(lander.thrust_acceleration(0.0), 0.0);
    }

    proptest! {
        #[test]
        fn prop_total_mass_tracks_fuel(
            fuel in 0.0..20_000.0f64,
            burns in proptest::collection::vec(0.0..2_000.0f64, 1..20),
        ) {
            let mut lander = LanderState::new(CAPSULE_MASS, fuel, SPECIFIC_IMPULSE, GRAVITY);
            for amount in burns {
                lander.consume_fuel(amount);
                prop_assert!(lander.fuel >= 0.0);
                prop_assert_eq!(lander.total_mass, lander.capsule_mass + lander.fuel);
            }
        }
    }
}
