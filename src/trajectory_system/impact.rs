use crate::constants::{IMPACT_TOLERANCE, MAX_IMPACT_ITERATIONS};
use crate::control::burn_scheduler::clamp_to_fuel;
use crate::control::lander::LanderState;
use crate::errors::SimulationError;
use crate::trajectory_system::kinematics::{commit, integrate, PhysicsState};

/// Moment and speed of ground contact.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Touchdown {
    pub elapsed_time: f64,
    pub impact_velocity: f64,
    /// Altitude left by the last refinement step before it was pinned to zero.
    pub residual_altitude: f64,
    pub iterations: usize,
}

/// Walks the lander down to the surface in shrinking sub-steps, each one
/// sized by a constant-acceleration estimate of the remaining time to impact.
///
/// `initial_time` is the burn interval that was found to end below ground.
/// Fails with [`SimulationError::NonConvergence`] if the residual time has not
/// dropped below the tolerance within [`MAX_IMPACT_ITERATIONS`] steps.
pub fn refine_impact(
    state: &mut PhysicsState,
    lander: &mut LanderState,
    burn_rate: f64,
    initial_time: f64,
) -> Result<Touchdown, SimulationError> {
    refine_impact_within(state, lander, burn_rate, initial_time, MAX_IMPACT_ITERATIONS)
}

fn refine_impact_within(
    state: &mut PhysicsState,
    lander: &mut LanderState,
    burn_rate: f64,
    initial_time: f64,
    max_iterations: usize,
) -> Result<Touchdown, SimulationError> {
    let mut iter_time = initial_time;
    let mut iterations = 0;

    while iter_time >= IMPACT_TOLERANCE {
        if iterations >= max_iterations {
            log::error!(
                "Impact refinement stuck at altitude {:.6} after {} iterations",
                state.altitude,
                iterations
            );
            return Err(SimulationError::NonConvergence {
                iterations,
                residual_time: iter_time,
            });
        }

        // Once the tanks are dry the rest of the descent is unpowered
        let rate = if lander.is_out_of_fuel() { 0.0 } else { burn_rate };
        let net_acceleration = lander.gravity - lander.thrust_acceleration(rate);
        let mut discriminant = state.velocity.powi(2) + 2.0 * state.altitude * net_acceleration;
        if discriminant < 0.0 {
            log::warn!(
                "Negative impact discriminant {:.3e}, falling back to current velocity",
                discriminant
            );
            discriminant = 0.0;
        }

        let iter_velocity = state.velocity + discriminant.sqrt();
        if iter_velocity <= 0.0 || !iter_velocity.is_finite() {
            return Err(SimulationError::DivisionDegeneracy(
                "impact velocity estimate is not positive",
            ));
        }

        iter_time = 2.0 * state.altitude / iter_velocity;
        let step_time = clamp_to_fuel(rate, iter_time, lander.fuel);
        if step_time < iter_time {
            log::warn!(
                "Fuel ran out {:.4}s into a {:.4}s refinement step",
                step_time,
                iter_time
            );
        }
        let projection = integrate(state, lander, rate, step_time);
        commit(state, lander, projection, rate, step_time);
        iterations += 1;

        log::debug!(
            "Impact refinement {}: step {:.5}s, altitude {:.6}, velocity {:.5}",
            iterations,
            step_time,
            state.altitude,
            state.velocity
        );
    }

    let residual_altitude = state.altitude;
    state.altitude = 0.0;

    Ok(Touchdown {
        elapsed_time: state.elapsed_time,
        impact_velocity: state.velocity,
        residual_altitude,
        iterations,
    })
}

/// Unpowered fall from the current state to the surface.
pub fn free_fall_impact(state: &mut PhysicsState, gravity: f64) -> Touchdown {
    let seconds_to_impact =
        (-state.velocity + (state.velocity.powi(2) + 2.0 * state.altitude * gravity).sqrt())
            / gravity;

    state.velocity += gravity * seconds_to_impact;
    state.elapsed_time += seconds_to_impact;
    let residual_altitude = state.altitude
        - state.velocity * seconds_to_impact
        + gravity * seconds_to_impact.powi(2) / 2.0;
    state.altitude = 0.0;

    Touchdown {
        elapsed_time: state.elapsed_time,
        impact_velocity: state.velocity,
        residual_altitude,
        iterations: 0,
    }
}
