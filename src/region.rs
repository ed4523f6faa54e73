//! Axis-aligned regions given as west/south/east/north and a height range.

use crate::{VolumeError, VolumeKind};

/// Region bounds: minX, minY, maxX, maxY, minZ, maxZ
///
/// Flat order is `[west, south, east, north, min_height, max_height]`.
/// `west <= east`, `south <= north` and `min_height <= max_height` are
/// expected from callers but not checked.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<f64>", into = "[f64; 6]")
)]
pub struct Region {
    /// Lower bound of the first axis.
    pub west: f64,
    /// Lower bound of the second axis.
    pub south: f64,
    /// Upper bound of the first axis.
    pub east: f64,
    /// Upper bound of the second axis.
    pub north: f64,
    /// Lower bound of the height axis.
    pub min_height: f64,
    /// Upper bound of the height axis.
    pub max_height: f64,
}

impl Region {
    /// Creates a region from its six bounds
    pub const fn new(
        west: f64,
        south: f64,
        east: f64,
        north: f64,
        min_height: f64,
        max_height: f64,
    ) -> Self {
        Self { west, south, east, north, min_height, max_height }
    }

    /// Creates a region from `[west, south, east, north, min_height, max_height]`
    pub const fn from_array(values: [f64; 6]) -> Self {
        let [west, south, east, north, min_height, max_height] = values;
        Self::new(west, south, east, north, min_height, max_height)
    }

    /// Creates a region from a slice of exactly six numbers
    ///
    /// # Errors
    /// Returns [`VolumeError::InvalidLength`] if `values.len() != 6`.
    ///
    /// # Examples
    /// ```
    /// use enclose::Region;
    ///
    /// let region = Region::from_slice(&[0.0, 0.0, 1.0, 1.0, -10.0, 10.0]).unwrap();
    /// assert_eq!(region.max_height, 10.0);
    /// assert!(Region::from_slice(&[0.0, 0.0, 1.0]).is_err());
    /// ```
    pub fn from_slice(values: &[f64]) -> Result<Self, VolumeError> {
        VolumeError::check_len(VolumeKind::Region, values)?;
        Ok(Self::new(values[0], values[1], values[2], values[3], values[4], values[5]))
    }

    /// Returns the flat `[west, south, east, north, min_height, max_height]` form
    pub const fn to_array(&self) -> [f64; 6] {
        [self.west, self.south, self.east, self.north, self.min_height, self.max_height]
    }

    /// Tests whether `inner` lies completely inside this region
    ///
    /// Same as [`region_inside_region`] with `self` as the outer region.
    pub fn contains(&self, inner: &Self) -> bool {
        region_inside_region(inner, self)
    }
}

/// Tests whether `inner` lies completely inside `outer`
///
/// Every minimum-like bound of `inner` (west, south, min height) must be
/// `>=` the outer one and every maximum-like bound (east, north, max height)
/// must be `<=` the outer one. Comparisons are exact; shared boundaries count
/// as inside.
///
/// # Examples
/// ```
/// use enclose::{Region, region_inside_region};
///
/// let outer = Region::new(0.0, 0.0, 4.0, 4.0, 0.0, 100.0);
/// let inner = Region::new(1.0, 1.0, 2.0, 2.0, 10.0, 20.0);
/// assert!(region_inside_region(&inner, &outer));
/// assert!(!region_inside_region(&outer, &inner));
/// ```
pub fn region_inside_region(inner: &Region, outer: &Region) -> bool {
    let inside = inner.west >= outer.west
        && inner.south >= outer.south
        && inner.east <= outer.east
        && inner.north <= outer.north
        && inner.min_height >= outer.min_height
        && inner.max_height <= outer.max_height;

    if !inside {
        log::trace!("region {:?} not inside {:?}", inner.to_array(), outer.to_array());
    }
    inside
}

impl From<[f64; 6]> for Region {
    fn from(values: [f64; 6]) -> Self {
        Self::from_array(values)
    }
}

impl From<Region> for [f64; 6] {
    fn from(region: Region) -> Self {
        region.to_array()
    }
}

impl TryFrom<&[f64]> for Region {
    type Error = VolumeError;

    fn try_from(values: &[f64]) -> Result<Self, Self::Error> {
        Self::from_slice(values)
    }
}

impl TryFrom<Vec<f64>> for Region {
    type Error = VolumeError;

    fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
        Self::from_slice(&values)
    }
}
