use digitop_core::{HyperRectDomain, Point};
use digitop_space::{
    Adjacency, DigitalTopology, DomainAdjacency, ExplicitAdjacency, MetricAdjacency, TopologyMode,
};
use std::sync::Arc;

#[test]
fn metric_degrees_match_closed_form_up_to_four_dimensions() {
    fn binomial(n: usize, k: usize) -> usize {
        (0..k).fold(1, |acc, i| acc * (n - i) / (i + 1))
    }
    for dim in 1..=4usize {
        for k in 1..=dim {
            let adj = MetricAdjacency::new(dim, k as u32).unwrap();
            let expected: usize = (1..=k).map(|i| binomial(dim, i) << i).sum();
            assert_eq!(adj.max_degree(), expected, "dim={dim} k={k}");
            assert_eq!(adj.neighbours(&Point::origin(dim)).len(), expected);
        }
    }
}

#[test]
fn domain_adjacency_max_degree_is_inner_degree() {
    let domain = HyperRectDomain::centered(3, 4).unwrap();
    let adj = DomainAdjacency::new(domain, MetricAdjacency::grid26()).unwrap();
    assert_eq!(adj.max_degree(), 26);
    assert_eq!(adj.neighbours(&Point::from([4, 4, 4])).len(), 7);
    assert_eq!(adj.neighbours(&Point::from([0, 0, 0])).len(), 26);
}

#[test]
fn explicit_max_degree_tracks_out_degree() {
    let mut adj = ExplicitAdjacency::new(1).unwrap();
    assert_eq!(adj.max_degree(), 0);
    for x in 1..=5 {
        adj.add_edge(Point::from([0]), Point::from([x])).unwrap();
    }
    assert_eq!(adj.max_degree(), 5);
}

#[test]
fn topology_relations_downcast_to_backends() {
    let domain = HyperRectDomain::centered(2, 10).unwrap();
    let dt = DigitalTopology::new(
        DomainAdjacency::new(domain, MetricAdjacency::grid8()).unwrap(),
        MetricAdjacency::grid4(),
        TopologyMode::Jordan,
    )
    .unwrap();
    let fg = dt.kappa().downcast_ref::<DomainAdjacency>().unwrap();
    assert_eq!(fg.inner().max_norm1(), 2);
    assert!(dt.lambda().downcast_ref::<MetricAdjacency>().is_some());
    assert!(dt.lambda().downcast_ref::<ExplicitAdjacency>().is_none());
}

#[test]
fn shared_relations_build_several_topologies() {
    let adj4: Arc<dyn Adjacency> = Arc::new(MetricAdjacency::grid4());
    let adj8: Arc<dyn Adjacency> = Arc::new(MetricAdjacency::grid8());
    let dt48 =
        DigitalTopology::from_shared(Arc::clone(&adj4), Arc::clone(&adj8), TopologyMode::Jordan)
            .unwrap();
    let dt84 = DigitalTopology::from_shared(adj8, adj4, TopologyMode::Jordan).unwrap();
    assert!(dt48.reversed().topology_eq(&dt84));
    assert!(Arc::ptr_eq(dt48.shared_foreground(), dt84.shared_background()));
}
