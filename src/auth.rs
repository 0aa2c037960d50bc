//! Credential sources, session tokens, and request signatures.

pub mod credentials;
pub mod signature;
pub mod token;

pub use credentials::*;
pub use signature::*;
pub use token::*;
