//! Shapes supported by pact.
//!
//! Every shape is convex and expressed in the frame shared by all the shapes of a query.
//! Use the `transform_by` methods to move a shape defined in its local frame into that
//! common frame.

pub use self::ball::Ball;
pub use self::capsule::Capsule;
pub use self::cone::Cone;
pub use self::convex_hull::{ConvexHull, ConvexHullError};
pub use self::convex_shape::{ConvexShape, ShapeType};
pub use self::cuboid::Cuboid;
pub use self::cylinder::Cylinder;
pub use self::feature_id::{FeatureId, PackedFeatureId};
pub use self::oriented_cuboid::OrientedCuboid;
#[doc(inline)]
pub use self::support_map::SupportMap;
pub use self::triangle::{Triangle, TrianglePointLocation};

mod ball;
mod capsule;
mod cone;
mod convex_hull;
mod convex_shape;
mod cuboid;
mod cylinder;
mod feature_id;
mod oriented_cuboid;
mod support_map;
mod triangle;
