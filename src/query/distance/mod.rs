//! Implementation details of the `distance` function.

pub use self::distance::distance;
pub use self::distance_support_map_support_map::{
    distance_support_map_support_map, distance_support_map_support_map_with_params,
};

mod distance;
mod distance_support_map_support_map;
