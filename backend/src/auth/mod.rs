//! Authentication module
//!
//! Sign-in is handled by the external auth provider; this module only
//! verifies the HS256 bearer tokens it issues.

mod jwt;
mod middleware;

pub use jwt::{Claims, TokenVerifier};
pub use middleware::AuthUser;
