use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("Invalid burn rate input: {0:?}")]
    InvalidBurnRate(String),

    #[error("Burn rate {rate} outside of [0, {max}]")]
    BurnRateOutOfRange { rate: f64, max: f64 },

    #[error("Impact refinement did not converge after {iterations} iterations (residual {residual_time:.6}s)")]
    NonConvergence {
        iterations: usize,
        residual_time: f64,
    },

    #[error("Degenerate computation: {0}")]
    DivisionDegeneracy(&'static str),

    #[error("Attempt already over: the lander is on the surface")]
    AttemptOver,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to read configuration: {0}")]
    ConfigIo(#[source] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Could not install interrupt handler: {0}")]
    SignalHandler(#[from] ctrlc::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
