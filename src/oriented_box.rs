//! Oriented bounding boxes and box-in-box containment.
//!
//! A box is stored as a center and a 3x3 half-axes matrix whose columns are
//! the box axes (orientation and scale together, not necessarily
//! orthonormal). Its local frame is the closed unit cube `[0, 1]^3`, placed in
//! world space by `p -> half_axes * p + center`.
//!
//! Containment maps the eight corners of the inner box into the local frame of
//! the outer box and checks them against the unit cube. Both maps are affine,
//! so testing the corners is enough.

use glam::{DAffine3, DMat3, DVec3};

use crate::{VolumeError, VolumeKind};

/// Corners of the local unit cube
const UNIT_CUBE_CORNERS: [DVec3; 8] = [
    DVec3::new(0.0, 0.0, 0.0),
    DVec3::new(1.0, 0.0, 0.0),
    DVec3::new(0.0, 1.0, 0.0),
    DVec3::new(1.0, 1.0, 0.0),
    DVec3::new(0.0, 0.0, 1.0),
    DVec3::new(1.0, 0.0, 1.0),
    DVec3::new(0.0, 1.0, 1.0),
    DVec3::new(1.0, 1.0, 1.0),
];

/// Box with arbitrary position, orientation and scale
///
/// Flat order is `[cx, cy, cz, a0x, a0y, a0z, a1x, a1y, a1z, a2x, a2y, a2z]`:
/// the center followed by the three half-axis vectors (matrix columns).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<f64>", into = "[f64; 12]")
)]
pub struct OrientedBox {
    /// Box center.
    pub center: DVec3,
    /// Half-axes matrix, one axis per column.
    pub half_axes: DMat3,
}

impl OrientedBox {
    /// Creates a box from its center and half-axes matrix
    pub const fn new(center: DVec3, half_axes: DMat3) -> Self {
        Self { center, half_axes }
    }

    /// Creates a box from its center and three half-axis vectors
    pub const fn from_axes(center: DVec3, x_axis: DVec3, y_axis: DVec3, z_axis: DVec3) -> Self {
        Self::new(center, DMat3::from_cols(x_axis, y_axis, z_axis))
    }

    /// Creates an axis-aligned box with the given per-axis half extents
    ///
    /// Following the unit-cube frame, the box spans `center` to
    /// `center + half_extents`.
    pub fn from_center_half_extents(center: DVec3, half_extents: DVec3) -> Self {
        Self::new(center, DMat3::from_diagonal(half_extents))
    }

    /// Creates a box from its twelve-number flat form
    pub fn from_array(values: [f64; 12]) -> Self {
        Self::new(
            DVec3::new(values[0], values[1], values[2]),
            DMat3::from_cols_slice(&values[3..]),
        )
    }

    /// Creates a box from a slice of exactly twelve numbers
    ///
    /// # Errors
    /// Returns [`VolumeError::InvalidLength`] if `values.len() != 12`.
    ///
    /// # Examples
    /// ```
    /// use enclose::OrientedBox;
    /// use glam::DVec3;
    ///
    /// let obb = OrientedBox::from_slice(&[
    ///     1.0, 2.0, 3.0,
    ///     2.0, 0.0, 0.0,
    ///     0.0, 3.0, 0.0,
    ///     0.0, 0.0, 4.0,
    /// ]).unwrap();
    /// assert_eq!(obb.half_axes.y_axis, DVec3::new(0.0, 3.0, 0.0));
    /// ```
    pub fn from_slice(values: &[f64]) -> Result<Self, VolumeError> {
        VolumeError::check_len(VolumeKind::Box, values)?;
        Ok(Self::new(
            DVec3::from_slice(&values[..3]),
            DMat3::from_cols_slice(&values[3..]),
        ))
    }

    /// Returns the twelve-number flat form
    pub fn to_array(&self) -> [f64; 12] {
        let mut values = [0.0; 12];
        values[..3].copy_from_slice(&self.center.to_array());
        values[3..].copy_from_slice(&self.half_axes.to_cols_array());
        values
    }

    /// Affine transform from the local unit cube to world space
    pub fn local_to_world(&self) -> DAffine3 {
        DAffine3::from_mat3_translation(self.half_axes, self.center)
    }

    /// Affine transform from world space to the local unit cube
    ///
    /// Returns `None` for degenerate boxes, whose half-axes matrix has a zero
    /// or non-finite determinant.
    pub fn world_to_local(&self) -> Option<DAffine3> {
        let det = self.half_axes.determinant();
        if det == 0.0 || !det.is_finite() {
            return None;
        }

        let inverse = self.local_to_world().inverse();
        inverse.is_finite().then_some(inverse)
    }

    /// Returns the eight corners of the box in world space
    pub fn corners(&self) -> [DVec3; 8] {
        let transform = self.local_to_world();
        UNIT_CUBE_CORNERS.map(|corner| transform.transform_point3(corner))
    }

    /// Tests whether a world-space point lies in the box (boundary included)
    ///
    /// Always false for degenerate boxes.
    pub fn contains_point(&self, point: DVec3) -> bool {
        self.world_to_local()
            .is_some_and(|to_local| in_unit_cube(to_local.transform_point3(point)))
    }

    /// Tests whether `inner` lies completely inside this box
    pub fn contains(&self, inner: &Self) -> bool {
        box_inside_box(inner, self)
    }
}

/// Tests whether `inner` lies completely inside `outer`
///
/// Every corner of `inner`, expressed in the local frame of `outer`, must land
/// in `[0, 1]^3` with boundaries included. No tolerance is applied, except
/// that bit-identical boxes are always contained.
///
/// The outer box has to be non-degenerate. A singular outer half-axes matrix
/// has no local frame and the result is `false`; NaN coordinates also give
/// `false`.
///
/// # Examples
/// ```
/// use enclose::{OrientedBox, box_inside_box};
/// use glam::DVec3;
///
/// let inner = OrientedBox::from_center_half_extents(DVec3::ZERO, DVec3::splat(0.5));
/// let outer = OrientedBox::from_center_half_extents(DVec3::ZERO, DVec3::ONE);
/// assert!(box_inside_box(&inner, &outer));
///
/// let shifted = OrientedBox::from_center_half_extents(DVec3::new(0.75, 0.0, 0.0), DVec3::splat(0.5));
/// assert!(!box_inside_box(&shifted, &outer));
/// ```
pub fn box_inside_box(inner: &OrientedBox, outer: &OrientedBox) -> bool {
    let Some(world_to_outer) = outer.world_to_local() else {
        log::debug!("outer box has a singular half-axes matrix: {:?}", outer.half_axes);
        return false;
    };

    if inner == outer {
        return true;
    }

    let inner_to_world = inner.local_to_world();
    UNIT_CUBE_CORNERS.iter().all(|&corner| {
        let local = world_to_outer.transform_point3(inner_to_world.transform_point3(corner));
        let inside = in_unit_cube(local);
        if !inside {
            log::trace!("corner {corner} of inner box maps to {local} in outer frame");
        }
        inside
    })
}

fn in_unit_cube(point: DVec3) -> bool {
    point.cmpge(DVec3::ZERO).all() && point.cmple(DVec3::ONE).all()
}

impl From<[f64; 12]> for OrientedBox {
    fn from(values: [f64; 12]) -> Self {
        Self::from_array(values)
    }
}

impl From<OrientedBox> for [f64; 12] {
    fn from(obb: OrientedBox) -> Self {
        obb.to_array()
    }
}

impl TryFrom<&[f64]> for OrientedBox {
    type Error = VolumeError;

    fn try_from(values: &[f64]) -> Result<Self, Self::Error> {
        Self::from_slice(values)
    }
}

impl TryFrom<Vec<f64>> for OrientedBox {
    type Error = VolumeError;

    fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
        Self::from_slice(&values)
    }
}
