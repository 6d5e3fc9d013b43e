pub mod alphabet;
pub mod caesar;
pub mod config;
pub mod error;
pub mod optimizer;
pub mod scorer;
pub mod substitution;
