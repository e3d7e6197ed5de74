use hopnet_core::{Network, NodeId};
use proptest::prelude::*;

const MAX_SIZE: u32 = 24;

/// A network size plus an edge list whose endpoints are all in range.
fn network_strategy() -> impl Strategy<Value = (u32, Vec<(NodeId, NodeId)>)> {
    (1..=MAX_SIZE).prop_flat_map(|size| {
        let edge = (1..=size, 1..=size);
        (Just(size), prop::collection::vec(edge, 0..40))
    })
}

fn build(size: u32, edges: &[(NodeId, NodeId)]) -> Network {
    Network::from_edges(size, edges.iter().copied()).unwrap()
}

fn sorted_neighbors(network: &Network, id: NodeId) -> Vec<NodeId> {
    let mut n: Vec<_> = network.neighbors(id).unwrap().collect();
    n.sort_unstable();
    n
}

proptest! {
    #[test]
    fn prop_reflexive((size, edges) in network_strategy()) {
        let network = build(size, &edges);
        for a in 1..=size {
            prop_assert!(network.query(a, a).unwrap());
            prop_assert_eq!(network.level_connection(a, a).unwrap(), 0);
        }
    }

    #[test]
    fn prop_symmetric((size, edges) in network_strategy(), a in 1..=MAX_SIZE, b in 1..=MAX_SIZE) {
        let network = build(size, &edges);
        let (a, b) = (a.min(size), b.min(size));
        prop_assert_eq!(network.query(a, b).unwrap(), network.query(b, a).unwrap());
        prop_assert_eq!(
            network.level_connection(a, b).unwrap(),
            network.level_connection(b, a).unwrap()
        );
    }

    #[test]
    fn prop_connect_idempotent((size, edges) in network_strategy(), a in 1..=MAX_SIZE, b in 1..=MAX_SIZE) {
        let (a, b) = (a.min(size), b.min(size));
        let mut once = build(size, &edges);
        once.connect(a, b).unwrap();
        let mut twice = once.clone();
        twice.connect(a, b).unwrap();
        prop_assert_eq!(once.generation(), twice.generation());
        for id in 1..=size {
            prop_assert_eq!(sorted_neighbors(&once, id), sorted_neighbors(&twice, id));
        }
    }

    #[test]
    fn prop_missing_disconnect_is_noop((size, edges) in network_strategy(), a in 1..=MAX_SIZE, b in 1..=MAX_SIZE) {
        let (a, b) = (a.min(size), b.min(size));
        let mut network = build(size, &edges);
        network.disconnect(a, b).unwrap();
        let before = network.clone();
        network.disconnect(a, b).unwrap();
        prop_assert_eq!(network.generation(), before.generation());
        for id in 1..=size {
            prop_assert_eq!(sorted_neighbors(&network, id), sorted_neighbors(&before, id));
        }
    }

    #[test]
    fn prop_hop_distance_agrees_with_query((size, edges) in network_strategy(), a in 1..=MAX_SIZE, b in 1..=MAX_SIZE) {
        let network = build(size, &edges);
        let (a, b) = (a.min(size), b.min(size));
        let reachable = network.query(a, b).unwrap();
        let distance = network.hop_distance(a, b).unwrap();
        prop_assert_eq!(reachable, distance.is_some());
        prop_assert_eq!(distance.unwrap_or(0), network.level_connection(a, b).unwrap());
    }

    #[test]
    fn prop_shortest_path_matches_level((size, edges) in network_strategy(), a in 1..=MAX_SIZE, b in 1..=MAX_SIZE) {
        let network = build(size, &edges);
        let (a, b) = (a.min(size), b.min(size));
        match network.shortest_path(a, b).unwrap() {
            Some(path) => {
                prop_assert_eq!(path.len() as u32 - 1, network.level_connection(a, b).unwrap());
                for pair in path.windows(2) {
                    prop_assert!(network.is_connected_directly(pair[0], pair[1]).unwrap());
                }
            }
            None => prop_assert!(!network.query(a, b).unwrap()),
        }
    }

    #[test]
    fn prop_out_of_range_rejected((size, edges) in network_strategy()) {
        let mut network = build(size, &edges);
        for bad in [0, size + 1] {
            prop_assert!(network.connect(bad, 1).is_err());
            prop_assert!(network.disconnect(1, bad).is_err());
            prop_assert!(network.query(bad, 1).is_err());
            prop_assert!(network.level_connection(1, bad).is_err());
        }
    }
}

#[test]
fn test_disconnect_inverts_fresh_connect() {
    let mut network = Network::new(5).unwrap();
    network.connect(2, 4).unwrap();
    assert!(network.query(2, 4).unwrap());
    network.disconnect(2, 4).unwrap();
    assert!(!network.query(2, 4).unwrap());
}
