pub mod algorithms;
pub mod definitions;
pub mod engine;
pub mod error;
pub mod game;
pub mod status;
pub mod utils;
