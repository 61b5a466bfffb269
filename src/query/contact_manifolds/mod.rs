//! Persistent contact manifolds.
//!
//! A contact manifold caches up to four contact points between two shapes across frames.
//! Each frame, the cached points are validated against the new body positions, then merged
//! with freshly computed contacts. Contacts matched with a cached point inherit its
//! accumulated impulses, which lets a constraint solver warm-start.
//!
//! # Example
//!
//! ```
//! use pact3d::math::{Isometry, Point, Vector};
//! use pact3d::query::{self, ContactManifold, ManifoldOptions, TrackedContact};
//! use pact3d::shape::Cuboid;
//!
//! let options = ManifoldOptions::default();
//! let ground = Cuboid::new(Point::origin(), Vector::new(5.0, 0.5, 5.0));
//! let block = Cuboid::new(Point::new(0.0, 0.95, 0.0), Vector::repeat(0.5));
//! let mut manifold = ContactManifold::new(0, 1);
//!
//! for _ in 0..3 {
//!     manifold.validate_contacts(&Isometry::identity(), &Isometry::identity(), &options);
//!
//!     if let Some(contact) = query::contact(&ground, &block, 0.0) {
//!         let tracked = TrackedContact::from_contact(&ground, &block, &contact);
//!         let _ = manifold.add_or_refresh(tracked, &options);
//!     }
//!
//!     // Solver impulses accumulate on the manifold points.
//!     for pt in &mut manifold.points {
//!         pt.normal_impulse += 1.0;
//!     }
//! }
//!
//! assert_eq!(manifold.len(), 1);
//! assert_eq!(manifold.points[0].normal_impulse, 3.0);
//! assert_eq!(manifold.points[0].lifespan, 2);
//! ```

pub use self::contact_manifold::ContactManifold;
pub use self::manifold_options::ManifoldOptions;
pub use self::reduction::reduce_contacts;
pub use self::tracked_contact::TrackedContact;

/// The maximum number of points of a contact manifold.
pub const MAX_MANIFOLD_POINTS: usize = 4;

mod contact_manifold;
mod manifold_options;
mod reduction;
mod tracked_contact;
