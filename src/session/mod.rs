pub mod game;
pub mod interrupt;
pub mod prompt;
