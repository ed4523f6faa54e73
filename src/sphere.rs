//! Bounding spheres.

use glam::DVec3;

use crate::{VolumeError, VolumeKind};

/// Sphere given by center and radius
///
/// Flat order is `[center_x, center_y, center_z, radius]`. The radius is
/// expected to be non-negative.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<f64>", into = "[f64; 4]")
)]
pub struct Sphere {
    /// Sphere center.
    pub center: DVec3,
    /// Sphere radius.
    pub radius: f64,
}

impl Sphere {
    /// Creates a sphere from a center point and radius
    pub const fn new(center: DVec3, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Creates a sphere from `[center_x, center_y, center_z, radius]`
    pub const fn from_array(values: [f64; 4]) -> Self {
        let [x, y, z, radius] = values;
        Self::new(DVec3::new(x, y, z), radius)
    }

    /// Creates a sphere from a slice of exactly four numbers
    ///
    /// # Errors
    /// Returns [`VolumeError::InvalidLength`] if `values.len() != 4`.
    pub fn from_slice(values: &[f64]) -> Result<Self, VolumeError> {
        VolumeError::check_len(VolumeKind::Sphere, values)?;
        Ok(Self::new(DVec3::from_slice(&values[..3]), values[3]))
    }

    /// Returns the flat `[center_x, center_y, center_z, radius]` form
    pub const fn to_array(&self) -> [f64; 4] {
        [self.center.x, self.center.y, self.center.z, self.radius]
    }

    /// Tests whether `inner` lies completely inside this sphere
    pub fn contains(&self, inner: &Self) -> bool {
        sphere_inside_sphere(inner, self)
    }
}

/// Tests whether `inner` lies completely inside `outer`
///
/// Holds exactly when the distance between the centers is at most
/// `outer.radius - inner.radius`. An inner sphere larger than the outer one
/// makes the right-hand side negative and is never contained.
///
/// # Examples
/// ```
/// use enclose::{Sphere, sphere_inside_sphere};
/// use glam::DVec3;
///
/// let inner = Sphere::new(DVec3::ZERO, 1.0);
/// assert!(sphere_inside_sphere(&inner, &Sphere::new(DVec3::ZERO, 2.0)));
/// assert!(!sphere_inside_sphere(&inner, &Sphere::new(DVec3::new(3.0, 0.0, 0.0), 2.0)));
/// ```
pub fn sphere_inside_sphere(inner: &Sphere, outer: &Sphere) -> bool {
    let distance = inner.center.distance(outer.center);
    let slack = outer.radius - inner.radius;
    let inside = distance <= slack;

    if !inside {
        log::trace!("sphere center distance {distance} exceeds radius slack {slack}");
    }
    inside
}

impl From<[f64; 4]> for Sphere {
    fn from(values: [f64; 4]) -> Self {
        Self::from_array(values)
    }
}

impl From<Sphere> for [f64; 4] {
    fn from(sphere: Sphere) -> Self {
        sphere.to_array()
    }
}

impl TryFrom<&[f64]> for Sphere {
    type Error = VolumeError;

    fn try_from(values: &[f64]) -> Result<Self, Self::Error> {
        Self::from_slice(values)
    }
}

impl TryFrom<Vec<f64>> for Sphere {
    type Error = VolumeError;

    fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
        Self::from_slice(&values)
    }
}
