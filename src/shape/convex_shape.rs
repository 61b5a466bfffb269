use crate::math::{Point, Real, UnitVector, Vector};
use crate::shape::{
    Ball, Capsule, Cone, ConvexHull, Cuboid, Cylinder, FeatureId, OrientedCuboid, SupportMap,
    Triangle,
};

/// Enum representing the type of a convex shape.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum ShapeType {
    /// A ball shape.
    Ball,
    /// An axis-aligned box shape.
    Cuboid,
    /// An oriented box shape.
    OrientedCuboid,
    /// A capsule shape.
    Capsule,
    /// A cylinder shape.
    Cylinder,
    /// A cone shape.
    Cone,
    /// A triangle shape.
    Triangle,
    /// A convex hull of a point cloud.
    ConvexHull,
}

/// Any of the convex shapes supported by the collision queries.
///
/// This is a closed sum type over every shape of this crate: queries accept either a
/// `ConvexShape` or any concrete shape since all of them implement [`SupportMap`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum ConvexShape {
    /// A ball shape.
    Ball(Ball),
    /// An axis-aligned box shape.
    Cuboid(Cuboid),
    /// An oriented box shape.
    OrientedCuboid(OrientedCuboid),
    /// A capsule shape.
    Capsule(Capsule),
    /// A cylinder shape.
    Cylinder(Cylinder),
    /// A cone shape.
    Cone(Cone),
    /// A triangle shape.
    Triangle(Triangle),
    /// A convex hull of a point cloud.
    ConvexHull(ConvexHull),
}

impl ConvexShape {
    /// The type of this shape.
    pub fn shape_type(&self) -> ShapeType {
        match self {
            ConvexShape::Ball(_) => ShapeType::Ball,
            ConvexShape::Cuboid(_) => ShapeType::Cuboid,
            ConvexShape::OrientedCuboid(_) => ShapeType::OrientedCuboid,
            ConvexShape::Capsule(_) => ShapeType::Capsule,
            ConvexShape::Cylinder(_) => ShapeType::Cylinder,
            ConvexShape::Cone(_) => ShapeType::Cone,
            ConvexShape::Triangle(_) => ShapeType::Triangle,
            ConvexShape::ConvexHull(_) => ShapeType::ConvexHull,
        }
    }

    /// Views this shape as a support map.
    pub fn as_support_map(&self) -> &dyn SupportMap {
        match self {
            ConvexShape::Ball(s) => s,
            ConvexShape::Cuboid(s) => s,
            ConvexShape::OrientedCuboid(s) => s,
            ConvexShape::Capsule(s) => s,
            ConvexShape::Cylinder(s) => s,
            ConvexShape::Cone(s) => s,
            ConvexShape::Triangle(s) => s,
            ConvexShape::ConvexHull(s) => s,
        }
    }
}

impl SupportMap for ConvexShape {
    #[inline]
    fn support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        self.as_support_map().support_point(dir)
    }

    #[inline]
    fn support_point_toward(&self, dir: &UnitVector<Real>) -> Point<Real> {
        self.as_support_map().support_point_toward(dir)
    }

    #[inline]
    fn center(&self) -> Point<Real> {
        self.as_support_map().center()
    }

    #[inline]
    fn support_feature(&self, dir: &Vector<Real>) -> FeatureId {
        self.as_support_map().support_feature(dir)
    }
}

macro_rules! impl_from_shape(
    ($($Shape: ident),*) => {$(
        impl From<$Shape> for ConvexShape {
            fn from(shape: $Shape) -> Self {
                ConvexShape::$Shape(shape)
            }
        }
    )*}
);

impl_from_shape!(
    Ball,
    Cuboid,
    OrientedCuboid,
    Capsule,
    Cylinder,
    Cone,
    Triangle,
    ConvexHull
);
