//! # enclose - Bounding Volume Containment
//!
//! Checks whether one 3D bounding volume lies completely inside another, for
//! the three volume kinds found in tiled spatial hierarchies: regions, spheres
//! and oriented boxes. Typical use is validating that every child node of a
//! spatial tree stays within its parent before the tree is used for culling
//! or streaming.
//!
//! ## Features
//!
//! - **Regions**: six exact bound comparisons
//! - **Spheres**: center distance against the radius difference
//! - **Oriented boxes**: inner corners mapped into the outer box's unit-cube frame
//! - **Flat arrays**: decode `[f64]` volumes with length checking
//! - **Serde** (default feature): tile set `boundingVolume` JSON shape
//!
//! ## Quick Start
//!
//! ```rust
//! use enclose::prelude::*;
//!
//! let parent = Region::new(0.0, 0.0, 1.0, 1.0, 0.0, 500.0);
//! let child = Region::new(0.25, 0.25, 0.5, 0.5, 0.0, 250.0);
//! assert!(region_inside_region(&child, &parent));
//!
//! // Volumes decoded from flat arrays, with the kind known only at runtime
//! let parent = BoundingVolume::from_kind_slice(VolumeKind::Sphere, &[0.0, 0.0, 0.0, 10.0])?;
//! let child = BoundingVolume::from_kind_slice(VolumeKind::Sphere, &[4.0, 0.0, 0.0, 6.0])?;
//! assert!(parent.contains(&child)?);
//! # Ok::<(), enclose::VolumeError>(())
//! ```
//!
//! ## Degenerate Boxes
//!
//! An oriented box whose half-axes matrix is singular has no local frame. Such
//! a box never contains anything, and [`box_inside_box`] returns `false`
//! rather than panicking.
//!
//! All predicates are pure and allocation-free, so they can be called from any
//! number of threads at once.

pub mod bounding_volume;
pub mod error;
pub mod oriented_box;
pub mod prelude;
pub mod region;
pub mod sphere;


pub use bounding_volume::{BoundingVolume, VolumeKind};
pub use error::VolumeError;
pub use oriented_box::{OrientedBox, box_inside_box};
pub use region::{Region, region_inside_region};
pub use sphere::{Sphere, sphere_inside_sphere};
