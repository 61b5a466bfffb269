use crate::math::{Isometry, Point, Real, Vector};
use crate::query::epa::EpaResult;
use crate::query::Contact;
use crate::shape::{PackedFeatureId, SupportMap};

/// A single contact point tracked across frames by a [`ContactManifold`](super::ContactManifold).
///
/// The world-space points are refreshed every time the manifold is validated, while the
/// local points stay fixed in each body frame: comparing both tells how much the contact
/// moved since it was recorded. The impulse accumulators belong to the constraint solver and
/// are carried over whenever the contact is matched with a newer measurement.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct TrackedContact {
    /// The contact point on the first shape, in world-space.
    pub point1: Point<Real>,
    /// The contact point on the second shape, in world-space.
    pub point2: Point<Real>,
    /// The contact point on the first shape, in the first body frame.
    pub local_p1: Point<Real>,
    /// The contact point on the second shape, in the second body frame.
    pub local_p2: Point<Real>,
    /// The unit contact normal, pointing from the first shape toward the second shape.
    pub normal: Vector<Real>,
    /// The penetration depth. Negative if the shapes are separated.
    pub depth: Real,
    /// Accumulated impulse along the normal.
    pub normal_impulse: Real,
    /// Accumulated impulse along the first tangent direction.
    pub tangent_impulse1: Real,
    /// Accumulated impulse along the second tangent direction.
    pub tangent_impulse2: Real,
    /// The feature of the first shape that produced this contact.
    pub fid1: PackedFeatureId,
    /// The feature of the second shape that produced this contact.
    pub fid2: PackedFeatureId,
    /// The number of updates this contact survived.
    pub lifespan: u32,
}

impl TrackedContact {
    /// Creates a new contact with unknown features and zero impulses.
    ///
    /// The local points are initialized with the world-space points, which is correct for
    /// bodies located at the identity. Use [`Self::with_local_points`] otherwise.
    pub fn new(point1: Point<Real>, point2: Point<Real>, normal: Vector<Real>, depth: Real) -> Self {
        Self {
            point1,
            point2,
            local_p1: point1,
            local_p2: point2,
            normal,
            depth,
            normal_impulse: 0.0,
            tangent_impulse1: 0.0,
            tangent_impulse2: 0.0,
            fid1: PackedFeatureId::UNKNOWN,
            fid2: PackedFeatureId::UNKNOWN,
            lifespan: 0,
        }
    }

    /// Labels this contact with the features that produced it.
    #[must_use]
    pub fn with_features(mut self, fid1: PackedFeatureId, fid2: PackedFeatureId) -> Self {
        self.fid1 = fid1;
        self.fid2 = fid2;
        self
    }

    /// Expresses the world-space points of this contact in the frames of the bodies located
    /// at `pos1` and `pos2`.
    #[must_use]
    pub fn with_local_points(mut self, pos1: &Isometry<Real>, pos2: &Isometry<Real>) -> Self {
        self.local_p1 = pos1.inverse_transform_point(&self.point1);
        self.local_p2 = pos2.inverse_transform_point(&self.point2);
        self
    }

    /// Builds a contact from the result of the EPA run on `g1` and `g2`.
    ///
    /// Feature ids are the support features of each shape along the contact normal.
    pub fn from_epa<G1, G2>(g1: &G1, g2: &G2, result: &EpaResult) -> Self
    where
        G1: ?Sized + SupportMap,
        G2: ?Sized + SupportMap,
    {
        let normal = result.normal.into_inner();
        Self::new(result.point1, result.point2, normal, result.depth).with_features(
            g1.support_feature(&normal).into(),
            g2.support_feature(&-normal).into(),
        )
    }

    /// Builds a contact from a [`Contact`] computed between `g1` and `g2`.
    pub fn from_contact<G1, G2>(g1: &G1, g2: &G2, contact: &Contact) -> Self
    where
        G1: ?Sized + SupportMap,
        G2: ?Sized + SupportMap,
    {
        let normal = contact.normal1.into_inner();
        Self::new(contact.point1, contact.point2, normal, contact.depth()).with_features(
            g1.support_feature(&normal).into(),
            g2.support_feature(&-normal).into(),
        )
    }

    /// Copies the geometric data of `other` into `self`, leaving the impulses and the
    /// lifespan untouched.
    pub fn copy_geometry_from(&mut self, other: &Self) {
        self.point1 = other.point1;
        self.point2 = other.point2;
        self.local_p1 = other.local_p1;
        self.local_p2 = other.local_p2;
        self.normal = other.normal;
        self.depth = other.depth;
        self.fid1 = other.fid1;
        self.fid2 = other.fid2;
    }

    /// Sets every impulse accumulator to zero.
    pub fn reset_impulses(&mut self) {
        self.normal_impulse = 0.0;
        self.tangent_impulse1 = 0.0;
        self.tangent_impulse2 = 0.0;
    }

    pub(crate) fn has_known_features(&self) -> bool {
        self.fid1.is_known() && self.fid2.is_known()
    }

    pub(crate) fn same_features(&self, other: &Self) -> bool {
        self.has_known_features()
            && other.has_known_features()
            && self.fid1 == other.fid1
            && self.fid2 == other.fid2
    }
}
