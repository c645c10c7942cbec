pub mod constants;
pub mod control;
pub mod errors;
pub mod session;
pub mod telemetry_system;
pub mod trajectory_system;

pub use constants::*;
pub use control::config::LanderConfig;
pub use control::lander::{new_attempt, LanderState};
pub use control::stepper::{run_period, FlightPhase, PeriodOutcome, SimulationStepper};
pub use errors::SimulationError;

// Re-export commonly used items from trajectory_system
pub use trajectory_system::impact::Touchdown;
pub use trajectory_system::kinematics::{integrate, PhysicsState, Projection};

// Re-export commonly used items from telemetry_system
pub use telemetry_system::telemetry::{LandingClass, LandingReport, Telemetry};

pub use session::game::Session;
pub use session::interrupt::exit_on_interrupt;
