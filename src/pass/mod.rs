//! Password generation.

pub mod charset;
pub mod config;
mod generate;
mod password;
pub mod retry;

pub use charset::{CharacterCategory, Pool, SIMILAR};
pub use config::{Coverage, DEFAULT_LENGTH, GenerationConfig, MAX_LENGTH, MIN_LENGTH};
pub use generate::{Generated, PasswordEngine};
pub use password::Password;
