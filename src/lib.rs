//! Random test instances for the 0/1 knapsack problem.
//!
//! An instance is a capacity followed by uniquely named items, each with a
//! cost (weight) and a value. [`generate`] draws one from an explicit RNG
//! handle, so a seeded [`rand::rngs::StdRng`] makes the result reproducible.

pub mod error;
pub mod format;
pub mod generator;
pub mod instance;
pub mod policy;

pub use error::{Error, ParseError, Result};
pub use format::{parse_instance, write_instance};
pub use generator::{
    generate, generate_with_bounds, Generator, MAX_INSTANCE_BYTES, MAX_NAME_ATTEMPTS,
};
pub use instance::{Instance, Item};
pub use policy::{Bounds, RangePolicy};
