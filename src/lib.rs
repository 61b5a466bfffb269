/*!
pact
====

**pact** is a narrow-phase collision detection library for convex shapes
written with the rust programming language.

It answers three questions for a pair of convex shapes expressed in a
common frame:

- are they intersecting? ([`query::gjk`])
- if so, how deep and along which direction? ([`query::epa`])
- which of this frame's contact points are the same as last frame's?
  ([`query::ContactManifold`])

```
use pact3d::math::{Point, Vector};
use pact3d::query::{self, ContactManifold, TrackedContact};
use pact3d::shape::Cuboid;

let ground = Cuboid::new(Point::new(0.0, -1.0, 0.0), Vector::new(10.0, 1.0, 10.0));
let crate_ = Cuboid::new(Point::new(0.0, 0.45, 0.0), Vector::new(0.5, 0.5, 0.5));

let contact = query::contact(&ground, &crate_, 0.0).expect("the boxes overlap");
assert!(contact.dist < 0.0);

let mut manifold = ContactManifold::new(1, 2);
let _ = manifold.add(TrackedContact::from_contact(&ground, &crate_, &contact));
assert_eq!(manifold.contacts().len(), 1);
```
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::too_many_arguments)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.
#![deny(unused_qualifications)]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;
#[macro_use]
extern crate approx;
extern crate num_traits as num;

pub extern crate nalgebra as na;

pub mod query;
pub mod shape;
pub mod utils;

mod real {
    /// The scalar type used throughout this crate.
    pub use f32 as Real;
}

/// Compilation flags dependent aliases for mathematical types.
pub mod math {
    pub use super::real::*;
    pub use na::{Isometry3, Matrix3, Point3, Translation3, UnitVector3, Vector3};
    use na::UnitQuaternion;

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// The dimension of the space.
    pub const DIM: usize = 3;

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;

    /// The unit vector type.
    pub use UnitVector3 as UnitVector;

    /// The matrix type.
    pub use Matrix3 as Matrix;

    /// The transformation matrix type.
    pub use Isometry3 as Isometry;

    /// The rotation matrix type.
    pub type Rotation<N> = UnitQuaternion<N>;

    /// The translation type.
    pub use Translation3 as Translation;
}
