//! Check parent/child containment for a few hand-written tile bounding volumes.
use enclose::prelude::*;

fn main() -> Result<(), VolumeError> {
    let pairs: [(VolumeKind, &[f64], &[f64]); 4] = [
        (
            VolumeKind::Region,
            &[-1.3197, 0.6988, -1.3196, 0.6989, 0.0, 88.0],
            &[-1.31968, 0.69882, -1.31962, 0.69888, 0.0, 20.0],
        ),
        (VolumeKind::Sphere, &[0.0, 0.0, 0.0, 10.0], &[8.0, 0.0, 0.0, 3.0]),
        (
            VolumeKind::Box,
            &[0.0, 0.0, 0.0, 4.0, 0.0, 0.0, 0.0, 4.0, 0.0, 0.0, 0.0, 4.0],
            &[1.0, 1.0, 1.0, 2.0, 0.0, 0.0, 0.0, 2.0, 0.0, 0.0, 0.0, 2.0],
        ),
        (
            VolumeKind::Box,
            &[0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
            &[0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0],
        ),
    ];

    for (kind, parent, child) in pairs {
        let parent = BoundingVolume::from_kind_slice(kind, parent)?;
        let child = BoundingVolume::from_kind_slice(kind, child)?;
        println!("{kind:>6}: child inside parent = {}", parent.contains(&child)?);
    }

    // Mixed kinds are rejected rather than guessed at
    let sphere = BoundingVolume::from(Sphere::from_array([0.0, 0.0, 0.0, 1.0]));
    let region = BoundingVolume::from(Region::from_array([0.0, 0.0, 1.0, 1.0, 0.0, 1.0]));
    if let Err(err) = sphere.contains(&region) {
        println!("mixed: {err}");
    }

    Ok(())
}
