//! Shared terminal utilities.
//!
//! Box drawing, strength meter, and colour helpers.

mod output;

pub use output::*;
