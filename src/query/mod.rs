//! Geometric queries between convex shapes.
//!
//! # General cases
//! The most general methods provided by this module are:
//!
//! * [`query::distance()`](distance()) to compute the distance between two shapes.
//! * [`query::contact()`](contact()) to compute one pair of contact points between two shapes, including penetrating contact.
//! * [`query::intersection_test()`](intersection_test()) to determine if two shapes are intersecting or not.
//!
//! Contacts persisting across frames are tracked by a [`ContactManifold`].
//!
//! # Specific cases
//! The functions exported by the `details` submodule are more specific versions of the ones described above.
//! They take the algorithm parameters and workspaces explicitly, so that no allocation happens when a
//! workspace is reused. They have the form `[operation]_support_map_support_map[_with_params]()`.
//!
//! The [`gjk`] and [`epa`] modules expose the underlying algorithms.

pub use self::contact::{contact, Contact};
pub use self::contact_manifolds::{
    reduce_contacts, ContactManifold, ManifoldOptions, TrackedContact, MAX_MANIFOLD_POINTS,
};
pub use self::distance::distance;
pub use self::intersection_test::intersection_test;

mod contact;
mod contact_manifolds;
mod distance;
pub mod epa;
pub mod gjk;
mod intersection_test;

/// Queries dedicated to specific pairs of shapes.
pub mod details {
    pub use super::contact::{
        contact_support_map_support_map, contact_support_map_support_map_with_params,
    };
    pub use super::distance::{
        distance_support_map_support_map, distance_support_map_support_map_with_params,
    };
    pub use super::intersection_test::{
        intersection_test_support_map_support_map,
        intersection_test_support_map_support_map_with_params,
    };
}
