use crate::control::lander::LanderState;

/// Vertical motion of the lander.
///
/// Velocity is positive while the craft is descending: every closed-form
/// update below subtracts `velocity * t` from the altitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicsState {
    pub altitude: f64,
    pub velocity: f64,
    pub elapsed_time: f64,
}

impl PhysicsState {
    pub fn new(altitude: f64, velocity: f64) -> Self {
        PhysicsState {
            altitude,
            velocity,
            elapsed_time: 0.0,
        }
    }

    pub fn is_descending(&self) -> bool {
        self.velocity > 0.0
    }

    pub fn is_ascending(&self) -> bool {
        self.velocity < 0.0
    }

    pub fn get_altitude_feet(&self) -> f64 {
        self.altitude.fract() * crate::constants::FEET_PER_MILE
    }

    pub fn get_velocity_mph(&self) -> f64 {
        self.velocity * crate::constants::SECONDS_PER_HOUR
    }
}

/// Candidate end-of-interval state produced by [`integrate`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub altitude: f64,
    pub velocity: f64,
}

impl Projection {
    pub fn has_reached_surface(&self) -> bool {
        self.altitude <= 0.0
    }
}

/// Fraction of the current total mass consumed over the interval.
pub fn mass_fraction_burned(burn_rate: f64, burn_time: f64, total_mass: f64) -> f64 {
    (burn_rate * burn_time) / total_mass
}

/// Five-term series for `ln(1 - q)`.
pub fn velocity_factor(q: f64) -> f64 {
    -(q + q.powi(2) / 2.0 + q.powi(3) / 3.0 + q.powi(4) / 4.0 + q.powi(5) / 5.0)
}

/// Time-integral companion of [`velocity_factor`].
pub fn altitude_factor(q: f64) -> f64 {
    q / 2.0 + q.powi(2) / 6.0 + q.powi(3) / 12.0 + q.powi(4) / 20.0 + q.powi(5) / 30.0
}

/// Projects altitude and velocity across a burn of `burn_time` seconds at
/// `burn_rate`, accounting for the mass lost during the burn. Inputs are not
/// mutated.
pub fn integrate(
    state: &PhysicsState,
    lander: &LanderState,
    burn_rate: f64,
    burn_time: f64,
) -> Projection {
    let q = mass_fraction_burned(burn_rate, burn_time, lander.total_mass);
    let gravity = lander.gravity;
    let isp = lander.specific_impulse;

    let velocity = state.velocity + gravity * burn_time + isp * velocity_factor(q);
    let altitude = state.altitude
        - gravity * burn_time.powi(2) / 2.0
        - state.velocity * burn_time
        + isp * burn_time * altitude_factor(q);

    Projection { altitude, velocity }
}

/// Writes a projection back into the state and charges the burn to the lander.
pub fn commit(
    state: &mut PhysicsState,
    lander: &mut LanderState,
    projection: Projection,
    burn_rate: f64,
    burn_time: f64,
) {
    state.altitude = projection.altitude;
    state.velocity = projection.velocity;
    state.elapsed_time += burn_time;
    lander.consume_fuel(burn_rate * burn_time);
}
