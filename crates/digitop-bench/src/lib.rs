//! Benchmark profiles for digitop.
//!
//! Provides pre-built [`ObjectConfig`] profiles and the shapes that fill
//! them:
//!
//! - [`reference_profile`]: 899×899 domain (~808K points), hashed storage
//! - [`dense_profile`]: same domain with one bit per point
//! - [`volume_profile`]: 101³ domain (~1M points) under (6, 18)
//! - [`disk_points`]: lattice points strictly inside a circle

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use digitop_core::{HyperRectDomain, Point};
use digitop_object::{AdjacencySpec, ConfigError, Object, ObjectConfig};
use digitop_set::{AnyPointSet, SetAccess, SetKind, SetSize};
use digitop_space::TopologyMode;

/// Radius of the reference disk.
pub const DISK_RADIUS: i32 = 450;

/// Reference profile: `[-449, 449]²` under the domain-restricted (4, 8)
/// topology, hashed storage.
pub fn reference_profile() -> ObjectConfig {
    let r = DISK_RADIUS - 1;
    ObjectConfig {
        lower: vec![-r, -r],
        upper: vec![r, r],
        foreground: AdjacencySpec::new(1),
        background: AdjacencySpec::new(2),
        mode: TopologyMode::Jordan,
        set_kind: SetKind::Hashed,
        bound_to_domain: true,
    }
}

/// The reference profile stored one bit per domain point.
pub fn dense_profile() -> ObjectConfig {
    ObjectConfig {
        set_kind: SetKind::Dense,
        ..reference_profile()
    }
}

/// Volume profile: `[-50, 50]³` under the unrestricted (6, 18) topology,
/// storage chosen for a big, membership-heavy set.
pub fn volume_profile() -> ObjectConfig {
    ObjectConfig {
        lower: vec![-50; 3],
        upper: vec![50; 3],
        foreground: AdjacencySpec::new(1),
        background: AdjacencySpec::new(2),
        mode: TopologyMode::Jordan,
        set_kind: SetKind::select(SetSize::Big, SetAccess::HighMembership),
        bound_to_domain: false,
    }
}

/// The points of `domain` with `‖p‖₂ < radius`, in domain order.
pub fn disk_points(domain: &HyperRectDomain, radius: i32) -> impl Iterator<Item = Point> + '_ {
    let r2 = i64::from(radius) * i64::from(radius);
    domain.iter().filter(move |p| {
        let d2: i64 = p.coords().iter().map(|&c| i64::from(c) * i64::from(c)).sum();
        d2 < r2
    })
}

/// The reference disk built from `config`.
pub fn disk_object(config: &ObjectConfig) -> Result<Object<AnyPointSet>, ConfigError> {
    let domain = config.domain()?;
    config.object_from_points(disk_points(&domain, DISK_RADIUS))
}

#[cfg(test)]
mod tests {
    use super::*;
    use digitop_set::PointSet;

    #[test]
    fn profiles_validate() {
        reference_profile().validate().unwrap();
        dense_profile().validate().unwrap();
        volume_profile().validate().unwrap();
        assert_eq!(volume_profile().set_kind, SetKind::Dense);
    }

    #[test]
    fn disk_points_stay_inside_the_circle() {
        let domain = HyperRectDomain::centered(2, 20).unwrap();
        let pts: Vec<Point> = disk_points(&domain, 12).collect();
        assert!(pts.iter().all(|p| p.norm2() < 12.0));
        assert!(pts.contains(&Point::from([11, 0])));
        assert!(!pts.contains(&Point::from([12, 0])));
        assert_eq!(pts.len(), 437);
    }

    #[test]
    fn reference_disk_size() {
        let disk = disk_object(&dense_profile()).unwrap();
        assert_eq!(disk.len(), 636101);
        assert_eq!(disk.point_set().kind(), SetKind::Dense);
    }
}
