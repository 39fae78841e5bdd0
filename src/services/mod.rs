pub mod generator;
pub mod prompt;
pub mod relay;
pub mod slots;
