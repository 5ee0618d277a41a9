//! Domain entities representing core authentication objects.

pub mod claims;
pub mod credentials;


// Re-export commonly used types
pub use claims::Claims;
pub use credentials::UserCredentials;
