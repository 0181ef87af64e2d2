//! Domain types for the Snapreview viewer subsystem.
//! Defines the data structures the surrounding application hands to viewers.

pub mod build;
pub mod error;
pub mod test_result;

pub use build::*;
pub use error::*;
pub use test_result::*;
