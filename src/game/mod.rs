pub mod ant;
pub mod constants;
pub mod input;
pub mod math;
pub mod types;
pub mod world;
