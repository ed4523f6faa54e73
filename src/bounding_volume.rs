//! Kind-tagged bounding volumes and containment dispatch.

use std::fmt;
use std::str::FromStr;

use crate::{OrientedBox, Region, Sphere, VolumeError, box_inside_box, region_inside_region, sphere_inside_sphere};

/// Declared kind of a bounding volume
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(rename_all = "lowercase"))]
#[non_exhaustive]
pub enum VolumeKind {
    /// Six-number region.
    Region,
    /// Four-number sphere.
    Sphere,
    /// Twelve-number oriented box.
    Box,
}

impl VolumeKind {
    /// Every kind, in declaration order
    pub const ALL: [Self; 3] = [Self::Region, Self::Sphere, Self::Box];

    /// Canonical lowercase name (`region`, `sphere`, `box`)
    pub const fn name(self) -> &'static str {
        match self {
            Self::Region => "region",
            Self::Sphere => "sphere",
            Self::Box => "box",
        }
    }

    /// Number of values in the flat encoding
    pub const fn flat_len(self) -> usize {
        match self {
            Self::Region => 6,
            Self::Sphere => 4,
            Self::Box => 12,
        }
    }
}

impl fmt::Display for VolumeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for VolumeKind {
    type Err = VolumeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| VolumeError::UnknownKind(s.to_owned()))
    }
}

/// A region, sphere or oriented box
///
/// With the `serde` feature this uses the tile set `boundingVolume` shape,
/// e.g. `{"sphere": [0.0, 0.0, 0.0, 10.0]}`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum BoundingVolume {
    /// Axis-aligned region.
    #[cfg_attr(feature = "serde", serde(rename = "region"))]
    Region(Region),
    /// Bounding sphere.
    #[cfg_attr(feature = "serde", serde(rename = "sphere"))]
    Sphere(Sphere),
    /// Oriented bounding box.
    #[cfg_attr(feature = "serde", serde(rename = "box"))]
    OrientedBox(OrientedBox),
}

impl BoundingVolume {
    /// Decodes a flat array of the given kind
    ///
    /// # Errors
    /// Returns [`VolumeError::InvalidLength`] when `values` does not have the
    /// length `kind` requires.
    ///
    /// # Examples
    /// ```
    /// use enclose::{BoundingVolume, VolumeKind};
    ///
    /// let sphere = BoundingVolume::from_kind_slice(VolumeKind::Sphere, &[0.0, 0.0, 0.0, 1.0]).unwrap();
    /// assert_eq!(sphere.kind(), VolumeKind::Sphere);
    /// ```
    pub fn from_kind_slice(kind: VolumeKind, values: &[f64]) -> Result<Self, VolumeError> {
        match kind {
            VolumeKind::Region => Region::from_slice(values).map(Self::Region),
            VolumeKind::Sphere => Sphere::from_slice(values).map(Self::Sphere),
            VolumeKind::Box => OrientedBox::from_slice(values).map(Self::OrientedBox),
        }
    }

    /// Kind of this volume
    pub const fn kind(&self) -> VolumeKind {
        match self {
            Self::Region(_) => VolumeKind::Region,
            Self::Sphere(_) => VolumeKind::Sphere,
            Self::OrientedBox(_) => VolumeKind::Box,
        }
    }

    /// Flat array form, of length [`VolumeKind::flat_len`]
    pub fn to_vec(&self) -> Vec<f64> {
        match self {
            Self::Region(region) => region.to_array().to_vec(),
            Self::Sphere(sphere) => sphere.to_array().to_vec(),
            Self::OrientedBox(obb) => obb.to_array().to_vec(),
        }
    }

    /// Tests whether `inner` lies completely inside this volume
    ///
    /// Uses the predicate matching the shared kind.
    ///
    /// # Errors
    /// Returns [`VolumeError::KindMismatch`] when the two volumes are of
    /// different kinds.
    ///
    /// # Examples
    /// ```
    /// use enclose::{BoundingVolume, Region, Sphere};
    /// use glam::DVec3;
    ///
    /// let parent = BoundingVolume::Sphere(Sphere::new(DVec3::ZERO, 10.0));
    /// let child = BoundingVolume::Sphere(Sphere::new(DVec3::X, 2.0));
    /// assert_eq!(parent.contains(&child), Ok(true));
    ///
    /// let region = BoundingVolume::Region(Region::new(0.0, 0.0, 1.0, 1.0, 0.0, 1.0));
    /// assert!(parent.contains(&region).is_err());
    /// ```
    pub fn contains(&self, inner: &Self) -> Result<bool, VolumeError> {
        match (inner, self) {
            (Self::Region(child), Self::Region(parent)) => Ok(region_inside_region(child, parent)),
            (Self::Sphere(child), Self::Sphere(parent)) => Ok(sphere_inside_sphere(child, parent)),
            (Self::OrientedBox(child), Self::OrientedBox(parent)) => Ok(box_inside_box(child, parent)),
            _ => Err(VolumeError::KindMismatch {
                inner: inner.kind(),
                outer: self.kind(),
            }),
        }
    }
}

impl From<Region> for BoundingVolume {
    fn from(region: Region) -> Self {
        Self::Region(region)
    }
}

impl From<Sphere> for BoundingVolume {
    fn from(sphere: Sphere) -> Self {
        Self::Sphere(sphere)
    }
}

impl From<OrientedBox> for BoundingVolume {
    fn from(obb: OrientedBox) -> Self {
        Self::OrientedBox(obb)
    }
}
