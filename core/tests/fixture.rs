use std::thread;

use hopnet_core::{InvalidArgument, Network, NetworkError, SharedNetwork};

fn fixture() -> Network {
    let mut network = Network::new(8).unwrap();
    network.connect(1, 2).unwrap();
    network.connect(6, 2).unwrap();
    network.connect(2, 4).unwrap();
    network.connect(5, 8).unwrap();
    network
}

#[test]
fn test_fixture_queries() {
    let network = fixture();
    assert!(network.query(1, 6).unwrap());
    assert!(network.query(6, 4).unwrap());
    assert!(!network.query(7, 4).unwrap());
    assert!(!network.query(5, 6).unwrap());
}

#[test]
fn test_fixture_levels() {
    let network = fixture();
    assert_eq!(network.level_connection(1, 6).unwrap(), 2);
    assert_eq!(network.level_connection(6, 4).unwrap(), 2);
    assert_eq!(network.level_connection(7, 4).unwrap(), 0);
    assert_eq!(network.level_connection(5, 8).unwrap(), 1);
}

#[test]
fn test_fixture_hop_distance_disambiguates_unreachable() {
    let network = fixture();
    assert_eq!(network.hop_distance(7, 4).unwrap(), None);
    assert_eq!(network.hop_distance(7, 7).unwrap(), Some(0));
    assert_eq!(network.hop_distance(1, 6).unwrap(), Some(2));
}

#[test]
fn test_fixture_shortest_path() {
    let network = fixture();
    assert_eq!(network.shortest_path(1, 6).unwrap(), Some(vec![1, 2, 6]));
    assert_eq!(network.shortest_path(8, 5).unwrap(), Some(vec![8, 5]));
    assert_eq!(network.shortest_path(3, 1).unwrap(), None);
}

#[test]
fn test_fixture_neighborhood() {
    let network = fixture();
    let around: Vec<_> = network
        .neighborhood(1, 2)
        .unwrap()
        .into_iter()
        .map(|n| (n.node_id, n.distance))
        .collect();
    assert_eq!(around, vec![(2, 1), (4, 2), (6, 2)]);
}

#[test]
fn test_disconnect_splits_component() {
    let mut network = fixture();
    network.disconnect(2, 6).unwrap();
    assert!(!network.query(1, 6).unwrap());
    assert_eq!(network.level_connection(1, 6).unwrap(), 0);
    assert!(network.query(1, 4).unwrap());
}

#[test]
fn test_rejects_zero_size() {
    assert_eq!(
        Network::new(0).unwrap_err(),
        NetworkError::InvalidArgument(InvalidArgument::NonPositiveSize { size: 0 })
    );
}

#[test]
fn test_shared_network_across_threads() {
    let shared = SharedNetwork::new(64).unwrap();

    let writers: Vec<_> = (0..4u32)
        .map(|t| {
            let net = shared.clone();
            thread::spawn(move || {
                // Each thread wires a disjoint stretch of the chain 1..=64.
                for i in (t * 16 + 1)..=(t * 16 + 16).min(63) {
                    net.connect(i, i + 1).unwrap();
                }
            })
        })
        .collect();
    for w in writers {
        w.join().unwrap();
    }

    assert!(shared.query(1, 64).unwrap());
    assert_eq!(shared.level_connection(1, 64).unwrap(), 63);
    assert_eq!(shared.stats().edge_count, 63);
    assert_eq!(shared.generation(), 63);
}
