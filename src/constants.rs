// Physical Constants
pub const GRAVITY: f64 = 0.001; // miles/s², lunar surface
pub const FEET_PER_MILE: f64 = 5280.0;
pub const SECONDS_PER_HOUR: f64 = 3600.0;

// Lander Defaults
pub const INITIAL_ALTITUDE: f64 = 120.0; // miles
pub const INITIAL_VELOCITY: f64 = 1.0; // miles/s, positive = descending
pub const CAPSULE_MASS: f64 = 16_500.0; // lbs dry
pub const INITIAL_FUEL: f64 = 16_500.0; // lbs
pub const SPECIFIC_IMPULSE: f64 = 1.8; // miles/s

// Control Parameters
pub const PERIOD_LENGTH: f64 = 10.0; // s between burn rate decisions
pub const MAX_BURN_RATE: f64 = 200.0; // lbs/s

// Integration Tolerances
pub const FUEL_EPSILON: f64 = 0.001; // lbs, below this the tanks are dry
pub const PERIOD_EPSILON: f64 = 0.001; // s, remaining period treated as spent
pub const IMPACT_TOLERANCE: f64 = 0.005; // s, residual time-to-impact
pub const MAX_IMPACT_ITERATIONS: usize = 1000;

// Empirical margin added to the zero-crossing burn time. Kept as found in the
// historical program.
pub const ZERO_CROSSING_MARGIN: f64 = 0.05; // s

// Landing Classification (impact speed, mph)
pub const PERFECT_LANDING_MPH: f64 = 1.2;
pub const GOOD_LANDING_MPH: f64 = 10.0;
pub const SURVIVABLE_LANDING_MPH: f64 = 60.0;
pub const CRATER_FEET_PER_MPH: f64 = 0.227;
