//! Prelude module for convenient imports
//!
//! This module re-exports the volume types and predicates.
//! Users can import everything they need with:
//!
//! ```
//! use enclose::prelude::*;
//! ```

pub use crate::{
    BoundingVolume, OrientedBox, Region, Sphere, VolumeError, VolumeKind, box_inside_box,
    region_inside_region, sphere_inside_sphere,
};
