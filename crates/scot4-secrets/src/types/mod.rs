//! Secret type implementations.

pub mod random;
pub mod uuid_secret;
pub mod fixed;

pub use random::{RandomSecret, ALPHABET, DEFAULT_LENGTH, MEILI_KEY_LENGTH};
pub use uuid_secret::UuidSecret;
pub use fixed::{FixedSecret, UPDATE_ME};
