mod support;

use bike_core::generator::generate_network;
use bike_core::station::{Need, StationRole};
use support::test_config;

#[test]
fn generated_network_matches_the_demo_layout() {
    let config = test_config();
    let stations = generate_network(&config.clone().with_station_count(8));
    assert_eq!(stations.len(), 8);

    let empty = &stations[0];
    assert_eq!(empty.role, StationRole::ForcedEmpty);
    assert_eq!(empty.available_bikes, 0);
    assert_eq!(empty.free_docks, empty.total_capacity);
    assert!((1..=config.max_waiting).contains(&empty.waiting_to_rent));

    let full = &stations[1];
    assert_eq!(full.role, StationRole::ForcedFull);
    assert_eq!(full.available_bikes, full.total_capacity);
    assert_eq!(full.free_docks, 0);
    assert!((1..=config.max_waiting).contains(&full.waiting_to_return));
}

#[test]
fn capacity_split_holds_for_every_normal_station() {
    for seed in 0..100 {
        let config = test_config().with_seed(seed);
        for station in generate_network(&config) {
            if station.role != StationRole::Normal {
                continue;
            }
            assert_eq!(
                station.available_bikes + station.free_docks,
                station.total_capacity
            );
            assert!(
                station.available_bikes <= station.free_docks,
                "seed {seed}: station {} is more than half full",
                station.id
            );
            if station.has(Need::Bikes) {
                assert_eq!(station.waiting_to_rent, 0);
            }
            if station.has(Need::Docks) {
                assert_eq!(station.waiting_to_return, 0);
            }
        }
    }
}

#[test]
fn exactly_one_forced_station_of_each_kind() {
    let stations = generate_network(&test_config());
    let empty = stations
        .iter()
        .filter(|s| s.role == StationRole::ForcedEmpty)
        .count();
    let full = stations
        .iter()
        .filter(|s| s.role == StationRole::ForcedFull)
        .count();
    assert_eq!(empty, 1);
    assert_eq!(full, 1);
}

#[test]
fn small_counts_degrade_gracefully() {
    assert!(generate_network(&test_config().with_station_count(0)).is_empty());

    let one = generate_network(&test_config().with_station_count(1));
    assert_eq!(one.len(), 1);
    assert_eq!(one[0].role, StationRole::ForcedEmpty);

    let two = generate_network(&test_config().with_station_count(2));
    assert_eq!(two[0].role, StationRole::ForcedEmpty);
    assert_eq!(two[1].role, StationRole::ForcedFull);
}

#[test]
fn refresh_replaces_the_list_wholesale() {
    let config = test_config();
    let first = generate_network(&config);
    let second = generate_network(&config.with_seed(43));
    assert_eq!(first.len(), second.len());
    // Different seed, different network: at least one field differs somewhere.
    let identical = first.iter().zip(&second).all(|(a, b)| {
        a.name == b.name
            && a.total_capacity == b.total_capacity
            && a.available_bikes == b.available_bikes
    });
    assert!(!identical);
}
