pub mod models;
pub mod utils;

// Domain models and display helpers used by both the engine and the GUI.
