//! Calorie Planner Shared Library
//!
//! The calculation engine and wire types used by the backend and the WASM
//! module. Everything here is pure: no I/O, no clocks, no randomness.

pub mod energy;
pub mod engine;
pub mod errors;
pub mod insights;
pub mod macros;
pub mod targets;
pub mod types;
pub mod validation;
pub mod zigzag;

// Re-export commonly used items
pub use energy::{ActivityLevel, BiologicalSex, BmrFormula};
pub use engine::{
    calculate, fallback_estimate, CalculationInput, CalculationOutput, FallbackEstimate,
    FormulaResult,
};
pub use errors::*;
pub use macros::{suggest_macros, MacroAmount, MacroSuggestion};
pub use targets::{target_calories, HealthGoal};
pub use types::*;
pub use zigzag::{zigzag_options, ZigzagOptions, ZigzagPlan};
