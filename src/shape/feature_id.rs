//! Identification of the geometric features (vertices, edges, faces) of a shape.

/// An identifier of a geometric feature (vertex, edge, or face) of a shape.
///
/// Contacts remember which feature of each shape produced them so that the same
/// contact can be recognized on the next frame even if its position drifted.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq)]
pub enum FeatureId {
    /// Shape-dependent identifier of a vertex.
    Vertex(u32),
    /// Shape-dependent identifier of an edge.
    Edge(u32),
    /// Shape-dependent identifier of a face.
    Face(u32),
    /// Unknown identifier.
    Unknown,
}

/// A feature id where the feature type is packed into the same value as the feature index.
///
/// The two most significant bits hold the feature type and the remaining 30 bits hold the
/// index, so hulls with far more than 255 features can still be labelled.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq)]
pub struct PackedFeatureId(pub u32);

static_assertions::assert_eq_size!(PackedFeatureId, u32);

impl Default for PackedFeatureId {
    fn default() -> Self {
        Self::UNKNOWN
    }
}

impl PackedFeatureId {
    /// Packed feature id identifying an unknown feature.
    pub const UNKNOWN: Self = Self(0);

    const CODE_MASK: u32 = 0x3fff_ffff;
    const HEADER_MASK: u32 = !Self::CODE_MASK;
    const HEADER_VERTEX: u32 = 0b01 << 30;
    const HEADER_EDGE: u32 = 0b10 << 30;
    const HEADER_FACE: u32 = 0b11 << 30;

    /// Packs a vertex identifier. Indices above `2^30 - 1` are truncated.
    pub fn vertex(code: u32) -> Self {
        Self(Self::HEADER_VERTEX | (code & Self::CODE_MASK))
    }

    /// Packs an edge identifier. Indices above `2^30 - 1` are truncated.
    pub fn edge(code: u32) -> Self {
        Self(Self::HEADER_EDGE | (code & Self::CODE_MASK))
    }

    /// Packs a face identifier. Indices above `2^30 - 1` are truncated.
    pub fn face(code: u32) -> Self {
        Self(Self::HEADER_FACE | (code & Self::CODE_MASK))
    }

    /// Unpacks this feature id into the explicit enum representation.
    pub fn unpack(self) -> FeatureId {
        let header = self.0 & Self::HEADER_MASK;
        let code = self.0 & Self::CODE_MASK;
        match header {
            Self::HEADER_VERTEX => FeatureId::Vertex(code),
            Self::HEADER_EDGE => FeatureId::Edge(code),
            Self::HEADER_FACE => FeatureId::Face(code),
            _ => FeatureId::Unknown,
        }
    }

    /// Is the identified feature known?
    pub fn is_known(self) -> bool {
        self.0 & Self::HEADER_MASK != 0
    }
}

impl From<FeatureId> for PackedFeatureId {
    fn from(value: FeatureId) -> Self {
        match value {
            FeatureId::Face(fid) => Self::face(fid),
            FeatureId::Edge(fid) => Self::edge(fid),
            FeatureId::Vertex(fid) => Self::vertex(fid),
            FeatureId::Unknown => Self::UNKNOWN,
        }
    }
}

#[cfg(test)]
mod test {
    use super::{FeatureId, PackedFeatureId};

    #[test]
    fn pack_unpack() {
        for fid in [
            FeatureId::Vertex(0),
            FeatureId::Vertex(300),
            FeatureId::Edge(7),
            FeatureId::Face(1 << 20),
            FeatureId::Unknown,
        ] {
            assert_eq!(PackedFeatureId::from(fid).unpack(), fid);
        }

        assert!(!PackedFeatureId::UNKNOWN.is_known());
        assert!(PackedFeatureId::vertex(0).is_known());
        assert_eq!(PackedFeatureId::face(3).unpack(), FeatureId::Face(3));
        assert_ne!(PackedFeatureId::vertex(3), PackedFeatureId::edge(3));
    }
}
