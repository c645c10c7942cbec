pub mod impact;
pub mod kinematics;
