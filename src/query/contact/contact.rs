use crate::math::{Point, Real, UnitVector};
use core::mem;

/// Geometric description of a contact.
///
/// All the points and normals are expressed in the frame shared by both shapes.
#[derive(Debug, PartialEq, Copy, Clone)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Contact {
    /// Position of the contact on the first object.
    pub point1: Point<Real>,

    /// Position of the contact on the second object.
    pub point2: Point<Real>,

    /// Contact normal of the first object.
    ///
    /// This is an outward normal, i.e., it points towards the exterior of the first shape,
    /// toward the second shape.
    pub normal1: UnitVector<Real>,

    /// Contact normal of the second object.
    ///
    /// This is an outward normal, i.e., it points towards the exterior of the second shape.
    pub normal2: UnitVector<Real>,

    /// Distance between the two contact points.
    ///
    /// If this is negative, this contact represents a penetration.
    pub dist: Real,
}

impl Contact {
    /// Creates a new contact.
    #[inline]
    pub fn new(
        point1: Point<Real>,
        point2: Point<Real>,
        normal1: UnitVector<Real>,
        normal2: UnitVector<Real>,
        dist: Real,
    ) -> Self {
        Contact {
            point1,
            point2,
            normal1,
            normal2,
            dist,
        }
    }

    /// The penetration depth of this contact, i.e., `-self.dist`.
    #[inline]
    pub fn depth(&self) -> Real {
        -self.dist
    }
}

impl Contact {
    /// Swaps the points and normals of this contact.
    #[inline]
    pub fn flip(&mut self) {
        mem::swap(&mut self.point1, &mut self.point2);
        mem::swap(&mut self.normal1, &mut self.normal2);
    }

    /// Returns a new contact containing the swapped points and normals of `self`.
    #[inline]
    pub fn flipped(mut self) -> Self {
        self.flip();
        self
    }
}
