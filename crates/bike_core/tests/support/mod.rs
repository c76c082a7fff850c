//! Shared helpers for integration tests.

use bike_core::config::NetworkConfig;
use bike_core::station::{Station, StationRole};

/// A seeded default configuration so test runs are reproducible.
pub fn test_config() -> NetworkConfig {
    NetworkConfig::default().with_seed(42)
}

/// Build a station by hand for selector/notice tests.
pub fn make_station(id: usize, role: StationRole, bikes: u32, docks: u32) -> Station {
    Station {
        id,
        name: format!("station-{id}"),
        lat: 41.39,
        lng: 2.16,
        role,
        total_capacity: bikes + docks,
        available_bikes: bikes,
        free_docks: docks,
        waiting_to_rent: 0,
        waiting_to_return: 0,
    }
}
