use crate::math::Real;

/// Thresholds controlling how a [`ContactManifold`](super::ContactManifold) matches, validates
/// and ages its contact points.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct ManifoldOptions {
    /// Maximum distance between a cached point and a new point for them to be considered the
    /// same contact when their feature ids are not usable.
    pub position_threshold: Real,
    /// A cached point is dropped once the shapes separate by more than this distance along
    /// its normal.
    pub breaking_threshold: Real,
    /// A cached point is dropped once both witness points slide apart by more than this
    /// distance orthogonally to its normal.
    pub drift_threshold: Real,
    /// A cached point is dropped once it survived more than this number of updates.
    pub max_age: u32,
}

impl Default for ManifoldOptions {
    fn default() -> Self {
        Self {
            position_threshold: 0.01,
            breaking_threshold: 0.02,
            drift_threshold: 0.05,
            max_age: 60,
        }
    }
}
