use crate::constants::{MAX_BURN_RATE, PERIOD_EPSILON};
use crate::control::burn_scheduler::{clamp_to_fuel, solve_zero_crossing_time};
use crate::control::config::LanderConfig;
use crate::control::lander::{new_attempt, LanderState};
use crate::errors::SimulationError;
use crate::trajectory_system::impact::{free_fall_impact, refine_impact, Touchdown};
use crate::trajectory_system::kinematics::{commit, integrate, PhysicsState};

#[derive(PartialEq, Debug, Clone, Copy)]
pub enum FlightPhase {
    Flying,
    OutOfFuel,
    Landed,
}

/// Result of one decision period.
#[derive(PartialEq, Debug, Clone, Copy)]
pub enum PeriodOutcome {
    Continuing,
    /// Tanks ran dry at `fuel_out_time`; the lander then fell to the surface.
    OutOfFuel {
        fuel_out_time: f64,
        touchdown: Touchdown,
    },
    Landed(Touchdown),
}

impl PeriodOutcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, PeriodOutcome::Continuing)
    }

    pub fn touchdown(&self) -> Option<&Touchdown> {
        match self {
            PeriodOutcome::Continuing => None,
            PeriodOutcome::OutOfFuel { touchdown, .. } => Some(touchdown),
            PeriodOutcome::Landed(touchdown) => Some(touchdown),
        }
    }
}

/// Flies `period_length` seconds at a constant `burn_rate`.
///
/// The period is split into sub-steps when the fuel runs out or when thrust
/// would turn a descent into a climb. Ends early on fuel exhaustion or ground
/// contact.
pub fn run_period(
    state: &mut PhysicsState,
    lander: &mut LanderState,
    burn_rate: f64,
    period_length: f64,
) -> Result<PeriodOutcome, SimulationError> {
    check_burn_rate(burn_rate, MAX_BURN_RATE)?;
    advance(state, lander, burn_rate, period_length)
}

fn check_burn_rate(burn_rate: f64, max_burn_rate: f64) -> Result<(), SimulationError> {
    if (0.0..=max_burn_rate).contains(&burn_rate) {
        Ok(())
    } else {
        Err(SimulationError::BurnRateOutOfRange {
            rate: burn_rate,
            max: max_burn_rate,
        })
    }
}

fn advance(
    state: &mut PhysicsState,
    lander: &mut LanderState,
    burn_rate: f64,
    period_length: f64,
) -> Result<PeriodOutcome, SimulationError> {
    let mut time_left = period_length;

    loop {
        if lander.is_out_of_fuel() {
            let fuel_out_time = state.elapsed_time;
            log::info!(
                "Fuel exhausted at {:.2}s, altitude {:.4}",
                fuel_out_time,
                state.altitude
            );
            let touchdown = free_fall_impact(state, lander.gravity);
            return Ok(PeriodOutcome::OutOfFuel {
                fuel_out_time,
                touchdown,
            });
        }

        if time_left < PERIOD_EPSILON {
            return Ok(PeriodOutcome::Continuing);
        }

        let mut burn_time = clamp_to_fuel(burn_rate, time_left, lander.fuel);
        let mut projection = integrate(state, lander, burn_rate, burn_time);
        if projection.has_reached_surface() {
            return land(state, lander, burn_rate, burn_time);
        }

        if state.is_descending() && projection.velocity < 0.0 {
            let corrected = solve_zero_crossing_time(state, lander, burn_rate)?;
            burn_time = clamp_to_fuel(burn_rate, corrected, lander.fuel);
            projection = integrate(state, lander, burn_rate, burn_time);
            if projection.has_reached_surface() {
                return land(state, lander, burn_rate, burn_time);
            }
        }

        commit(state, lander, projection, burn_rate, burn_time);
        time_left -= burn_time;

        log::debug!(
            "Sub-step {:.3}s: altitude {:.4}, velocity {:.5}, fuel {:.1}",
            burn_time,
            state.altitude,
            state.velocity,
            lander.fuel
        );
    }
}

fn land(
    state: &mut PhysicsState,
    lander: &mut LanderState,
    burn_rate: f64,
    burn_time: f64,
) -> Result<PeriodOutcome, SimulationError> {
    let touchdown = refine_impact(state, lander, burn_rate, burn_time)?;
    log::info!(
        "Touchdown at {:.2}s, impact velocity {:.5} after {} refinement steps",
        touchdown.elapsed_time,
        touchdown.impact_velocity,
        touchdown.iterations
    );
    Ok(PeriodOutcome::Landed(touchdown))
}

/// One landing attempt, stepped a period at a time.
pub struct SimulationStepper {
    pub physics: PhysicsState,
    pub lander: LanderState,
    pub phase: FlightPhase,
    pub period_length: f64,
    pub max_burn_rate: f64,
}

impl SimulationStepper {
    pub fn new(config: &LanderConfig) -> Result<Self, SimulationError> {
        let (physics, lander) = new_attempt(config)?;
        Ok(SimulationStepper {
            physics,
            lander,
            phase: FlightPhase::Flying,
            period_length: config.period_length,
            max_burn_rate: config.max_burn_rate,
        })
    }

    pub fn run_period(&mut self, burn_rate: f64) -> Result<PeriodOutcome, SimulationError> {
        if self.phase != FlightPhase::Flying {
            return Err(SimulationError::AttemptOver);
        }
        check_burn_rate(burn_rate, self.max_burn_rate)?;

        let outcome = advance(
            &mut self.physics,
            &mut self.lander,
            burn_rate,
            self.period_length,
        )?;

        match outcome {
            PeriodOutcome::Continuing => {}
            PeriodOutcome::OutOfFuel { .. } => {
                self.transition(FlightPhase::OutOfFuel);
                self.transition(FlightPhase::Landed);
            }
            PeriodOutcome::Landed(_) => self.transition(FlightPhase::Landed),
        }
        Ok(outcome)
    }

    pub fn is_landed(&self) -> bool {
        self.phase == FlightPhase::Landed
    }

    fn transition(&mut self, next: FlightPhase) {
        log::debug!("Flight phase {:?} -> {:?}", self.phase, next);
        self.phase = next;
    }
}
