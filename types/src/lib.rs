//! Fundamental types for biometric identity authentication.
//!
//! This crate defines the data shared by every other crate in the workspace:
//! modality tags, captured biometric samples, authentication requests and
//! timestamps. None of these types carry behaviour beyond construction,
//! inspection and tag parsing.

pub mod error;
pub mod modality;
pub mod request;
pub mod sample;
pub mod time;

pub use error::TypesError;
pub use modality::BioType;
pub use request::AuthRequest;
pub use sample::BiometricSample;
pub use time::Timestamp;
