use crate::constants::ZERO_CROSSING_MARGIN;
use crate::control::lander::LanderState;
use crate::errors::SimulationError;
use crate::trajectory_system::kinematics::PhysicsState;

/// Shortens a burn so it never asks for more fuel than is left.
///
/// A zero burn rate draws nothing, so the request passes through unchanged.
pub fn clamp_to_fuel(burn_rate: f64, requested_time: f64, fuel: f64) -> f64 {
    if burn_rate > 0.0 && fuel < burn_rate * requested_time {
        fuel / burn_rate
    } else {
        requested_time
    }
}

/// Burn duration after which a descending craft reaches zero vertical
/// velocity under constant `burn_rate`.
///
/// Only meaningful while the lander is descending and the engine is lit; both
/// are checked rather than assumed.
pub fn solve_zero_crossing_time(
    state: &PhysicsState,
    lander: &LanderState,
    burn_rate: f64,
) -> Result<f64, SimulationError> {
    if burn_rate <= 0.0 {
        return Err(SimulationError::DivisionDegeneracy(
            "zero-crossing burn time requires a positive burn rate",
        ));
    }
    if state.velocity <= 0.0 {
        return Err(SimulationError::DivisionDegeneracy(
            "zero-crossing burn time requires a descending lander",
        ));
    }

    let isp = lander.specific_impulse;
    let factor = (1.0 - (lander.total_mass * lander.gravity) / (isp * burn_rate)) / 2.0;
    let denominator =
        isp * burn_rate * (factor + (factor * factor + state.velocity / isp).sqrt());

    let corrected_time = (lander.total_mass * state.velocity) / denominator + ZERO_CROSSING_MARGIN;
    log::debug!(
        "Zero-crossing correction: burn {:.4}s at rate {:.1}",
        corrected_time,
        burn_rate
    );
    Ok(corrected_time)
}
