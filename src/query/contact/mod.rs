//! Implementation details of the `contact` function.

pub use self::contact::Contact;
pub use self::contact_shape_shape::contact;
pub use self::contact_support_map_support_map::{
    contact_support_map_support_map, contact_support_map_support_map_with_params,
};

mod contact;
mod contact_shape_shape;
mod contact_support_map_support_map;
