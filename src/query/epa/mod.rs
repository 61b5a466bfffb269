//! The EPA algorithm for penetration depth computation.

pub use self::epa3::{Epa, EpaOptions, EpaResult};

mod epa3;
