//! Test fixtures for digitop development.
//!
//! Standard topologies and the reference shapes the integration tests and
//! benchmarks are written against:
//!
//! - [`euclidean_disk`]: lattice points strictly inside a circle
//! - [`l1_diamond`]: lattice points within an L1 ball in any dimension
//! - [`object_from`]: an object over arbitrary points

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use digitop_core::{HyperRectDomain, Point};
use digitop_object::Object;
use digitop_set::PointSet;
use digitop_space::{DigitalTopology, DomainAdjacency, MetricAdjacency, TopologyMode};
use rand::seq::index;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn jordan(fg: MetricAdjacency, bg: MetricAdjacency) -> DigitalTopology {
    DigitalTopology::new(fg, bg, TopologyMode::Jordan).unwrap()
}

fn jordan_in(
    domain: &HyperRectDomain,
    fg: MetricAdjacency,
    bg: MetricAdjacency,
) -> DigitalTopology {
    DigitalTopology::new(
        DomainAdjacency::new(domain.clone(), fg).unwrap(),
        DomainAdjacency::new(domain.clone(), bg).unwrap(),
        TopologyMode::Jordan,
    )
    .unwrap()
}

/// The (4, 8) topology over the whole plane.
pub fn dt4_8() -> DigitalTopology {
    jordan(MetricAdjacency::grid4(), MetricAdjacency::grid8())
}

/// The (8, 4) topology over the whole plane.
pub fn dt8_4() -> DigitalTopology {
    jordan(MetricAdjacency::grid8(), MetricAdjacency::grid4())
}

/// The (6, 18) topology over the whole space.
pub fn dt6_18() -> DigitalTopology {
    jordan(MetricAdjacency::grid6(), MetricAdjacency::grid18())
}

/// The (26, 6) topology over the whole space.
pub fn dt26_6() -> DigitalTopology {
    jordan(MetricAdjacency::grid26(), MetricAdjacency::grid6())
}

/// The (4, 8) topology restricted to `domain`.
pub fn dt4_8_in(domain: &HyperRectDomain) -> DigitalTopology {
    jordan_in(domain, MetricAdjacency::grid4(), MetricAdjacency::grid8())
}

/// The (6, 18) topology restricted to `domain`.
pub fn dt6_18_in(domain: &HyperRectDomain) -> DigitalTopology {
    jordan_in(domain, MetricAdjacency::grid6(), MetricAdjacency::grid18())
}

/// The planar points with `x² + y² < radius²`, bounded by the square
/// `[-(radius - 1), radius - 1]²` that just contains them, under the
/// domain-restricted (4, 8) topology.
///
/// `euclidean_disk(450)` holds 636101 points.
pub fn euclidean_disk<S: PointSet>(radius: u32) -> Object<S> {
    let domain = HyperRectDomain::centered(2, radius.saturating_sub(1)).unwrap();
    let r2 = u64::from(radius) * u64::from(radius);
    let mut set = S::with_domain(domain.clone());
    for p in domain.iter() {
        let d2: u64 = p.coords().iter().map(|&c| (c as i64 * c as i64) as u64).sum();
        if d2 < r2 {
            set.insert_new(p);
        }
    }
    Object::new(dt4_8_in(&domain), set)
}

/// The points with `‖p‖₁ <= radius` in `[-domain_radius, domain_radius]^dim`
/// under `topology`.
pub fn l1_diamond<S: PointSet>(
    topology: DigitalTopology,
    dim: usize,
    domain_radius: u32,
    radius: u64,
) -> Object<S> {
    let domain = HyperRectDomain::centered(dim, domain_radius).unwrap();
    let mut set = S::with_domain(domain.clone());
    for p in domain.iter() {
        if p.norm1() <= radius {
            set.insert_new(p);
        }
    }
    Object::new(topology, set)
}

/// An object holding `points` inside `domain`.
pub fn object_from<S: PointSet>(
    topology: DigitalTopology,
    domain: HyperRectDomain,
    points: impl IntoIterator<Item = Point>,
) -> Object<S> {
    let mut set = S::with_domain(domain);
    set.extend_points(points);
    Object::new(topology, set)
}

/// `count` distinct points of `domain`, drawn deterministically from `seed`.
///
/// Asking for more points than the domain holds yields every point once.
pub fn scattered_points(domain: &HyperRectDomain, count: usize, seed: u64) -> Vec<Point> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    index::sample(&mut rng, domain.size(), count.min(domain.size()))
        .into_iter()
        .map(|i| domain.point_at(i))
        .collect()
}
