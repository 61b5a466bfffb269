//! The GJK algorithm for distance computation.

pub use self::cso_point::CsoPoint;
pub use self::gjk::*;
pub use self::simplex::Simplex;

mod cso_point;
mod gjk;
mod simplex;
