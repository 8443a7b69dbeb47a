//! Business logic services
//!
//! Services encapsulate business logic and coordinate between
//! the calculation engine and repositories.

pub mod calories;
pub mod profile;

pub use calories::CalorieService;
pub use profile::ProfileService;
