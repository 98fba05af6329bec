//! Neighbourhood, component and expansion laws on random planar objects.

use digitop_core::{HyperRectDomain, Point};
use digitop_object::{Expander, Object};
use digitop_set::{HashPointSet, PointSet};
use digitop_space::DigitalTopology;
use digitop_test_utils::{dt26_6, dt4_8, dt4_8_in, dt6_18, dt6_18_in, dt8_4, object_from};
use proptest::prelude::*;

fn domain() -> HyperRectDomain {
    HyperRectDomain::centered(2, 6).unwrap()
}

fn arb_points() -> impl Strategy<Value = Vec<Point>> {
    proptest::collection::vec((-6i32..=6, -6i32..=6), 0..90)
        .prop_map(|v| v.into_iter().map(|(x, y)| Point::from([x, y])).collect())
}

fn volume() -> HyperRectDomain {
    HyperRectDomain::centered(3, 3).unwrap()
}

fn arb_points_3d() -> impl Strategy<Value = Vec<Point>> {
    proptest::collection::vec((-3i32..=3, -3i32..=3, -3i32..=3), 0..200)
        .prop_map(|v| v.into_iter().map(|(x, y, z)| Point::from([x, y, z])).collect())
}

fn arb_topology_3d() -> impl Strategy<Value = DigitalTopology> {
    prop_oneof![
        Just(dt6_18()),
        Just(dt6_18().reversed()),
        Just(dt26_6()),
        Just(dt6_18_in(&volume())),
    ]
}

fn arb_topology() -> impl Strategy<Value = DigitalTopology> {
    prop_oneof![Just(dt4_8()), Just(dt8_4()), Just(dt4_8_in(&domain()))]
}

proptest! {
    #[test]
    fn proper_neighbourhood_plus_self(pts in arb_points(), dt in arb_topology(), x in -6i32..=6, y in -6i32..=6) {
        let o: Object = object_from(dt, domain(), pts);
        let p = Point::from([x, y]);
        let closed = o.neighborhood(&p);
        let proper = o.proper_neighborhood(&p);
        prop_assert_eq!(proper.len() + usize::from(o.contains(&p)), closed.len());
        prop_assert_eq!(o.neighborhood_size(&p), closed.len());
        prop_assert_eq!(o.proper_neighborhood_size(&p), proper.len());
        prop_assert!(closed.point_set().is_subset_of(o.point_set()));
    }

    #[test]
    fn proper_neighbourhood_plus_self_in_3d(
        pts in arb_points_3d(),
        dt in arb_topology_3d(),
        (x, y, z) in (-3i32..=3, -3i32..=3, -3i32..=3),
    ) {
        let o: Object = object_from(dt, volume(), pts);
        let p = Point::from([x, y, z]);
        let closed = o.neighborhood(&p);
        let proper = o.proper_neighborhood(&p);
        prop_assert_eq!(proper.len() + usize::from(o.contains(&p)), closed.len());
        prop_assert_eq!(o.neighborhood_size(&p), closed.len());
        prop_assert_eq!(o.proper_neighborhood_size(&p), proper.len());
        prop_assert!(proper.len() <= o.adjacency().max_degree());
        prop_assert!(proper.iter().all(|q| o.adjacency().is_proper_adjacent_to(&p, &q)));
    }

    #[test]
    fn components_partition_the_object_in_3d(pts in arb_points_3d(), dt in arb_topology_3d()) {
        let o: Object = object_from(dt, volume(), pts);
        let comps = o.components();
        prop_assert_eq!(comps.len(), o.component_count());
        prop_assert_eq!(comps.iter().map(|c| c.len()).sum::<usize>(), o.len());

        let mut union = HashPointSet::with_domain(volume());
        for c in &comps {
            prop_assert!(c.is_connected());
            for p in c.iter() {
                prop_assert!(union.insert(p));
            }
        }
        prop_assert!(union.same_points(o.point_set()));

        let kappa = o.adjacency();
        for (i, a) in comps.iter().enumerate() {
            for b in &comps[i + 1..] {
                for p in a.iter() {
                    prop_assert!(b.iter().all(|q| !kappa.is_adjacent_to(&p, &q)));
                }
            }
        }
    }

    #[test]
    fn components_partition_the_object(pts in arb_points(), dt in arb_topology()) {
        let o: Object = object_from(dt, domain(), pts);
        let comps = o.components();
        prop_assert_eq!(comps.len(), o.component_count());
        prop_assert_eq!(comps.iter().map(|c| c.len()).sum::<usize>(), o.len());

        let mut union = HashPointSet::with_domain(domain());
        for c in &comps {
            prop_assert!(c.is_connected());
            for p in c.iter() {
                prop_assert!(union.insert(p));
            }
        }
        prop_assert!(union.same_points(o.point_set()));

        let kappa = o.adjacency();
        for (i, a) in comps.iter().enumerate() {
            for b in &comps[i + 1..] {
                for p in a.iter() {
                    prop_assert!(b.iter().all(|q| !kappa.is_adjacent_to(&p, &q)));
                }
            }
        }
        prop_assert_eq!(o.is_connected(), comps.len() <= 1);
    }

    #[test]
    fn expansion_covers_the_seed_component(pts in arb_points(), dt in arb_topology()) {
        let o: Object = object_from(dt, domain(), pts);
        prop_assume!(!o.is_empty());
        let seed = o.iter().next().unwrap();

        let mut seen = HashPointSet::with_domain(domain());
        let mut expected_distance = 0;
        let mut expander = Expander::new(&o, seed.clone());
        loop {
            prop_assert_eq!(expander.distance(), expected_distance);
            for p in expander.layer().iter() {
                prop_assert!(seen.insert(p));
            }
            if !expander.next_layer() {
                break;
            }
            expected_distance += 1;
        }
        prop_assert!(seen.same_points(expander.core()));

        let component = o
            .components()
            .into_iter()
            .find(|c| c.contains(&seed))
            .unwrap();
        prop_assert!(seen.same_points(component.point_set()));
    }

    #[test]
    fn clones_are_independent(pts in arb_points(), x in -6i32..=6, y in -6i32..=6) {
        let original: Object = object_from(dt4_8(), domain(), pts);
        let before = original.len();
        let p = Point::from([x, y]);
        let mut copy = original.clone();
        if copy.contains(&p) {
            copy.erase(&p);
        } else {
            copy.insert(p.clone());
        }
        prop_assert_eq!(original.len(), before);
        prop_assert_ne!(original.contains(&p), copy.contains(&p));
    }
}

#[test]
fn full_neighbourhood_sizes_in_3d() {
    let filled = |dt| -> Object { object_from(dt, volume(), volume().iter()) };
    let centre = Point::origin(3);
    assert_eq!(filled(dt6_18()).neighborhood_size(&centre), 7);
    assert_eq!(filled(dt6_18().reversed()).neighborhood_size(&centre), 19);
    assert_eq!(filled(dt26_6()).neighborhood_size(&centre), 27);
    assert_eq!(filled(dt26_6()).proper_neighborhood_size(&centre), 26);

    // A corner of the domain keeps 3, 6 and 7 neighbours once the
    // relation is bounded by the domain.
    let corner = Point::from([3, 3, 3]);
    let bounded = dt6_18_in(&volume());
    assert_eq!(filled(bounded.clone()).proper_neighborhood_size(&corner), 3);
    assert_eq!(filled(bounded.reversed()).proper_neighborhood_size(&corner), 6);
}

#[test]
fn filled_domain_has_no_border_under_bounded_background() {
    let o: Object = object_from(dt4_8_in(&domain()), domain(), domain().iter());
    assert!(o.border().is_empty());
}

#[test]
fn filled_domain_keeps_its_rim_under_unbounded_background() {
    let o: Object = object_from(dt4_8(), domain(), domain().iter());
    let border = o.border();
    assert_eq!(border.len(), 48);
    assert!(border.iter().all(|p| p.norm_inf() == 6));
}
