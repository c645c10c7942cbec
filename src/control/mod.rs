pub mod burn_scheduler;
pub mod config;
pub mod lander;
pub mod stepper;
