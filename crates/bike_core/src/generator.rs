//! Network generation: builds the full station list for a session.
//!
//! The list is created wholesale, once per session or on an explicit refresh;
//! there is no partial regeneration. Given the same RNG the output is fully
//! deterministic.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::catalog::{CatalogEntry, STATION_CATALOG};
use crate::config::NetworkConfig;
use crate::station::{Station, StationRole};

/// Generate a station network, seeding a `StdRng` from `config.seed`
/// (entropy when unset).
///
/// The configuration must have passed [`NetworkConfig::validate`]; generation
/// itself is total and never fails.
pub fn generate_network(config: &NetworkConfig) -> Vec<Station> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    generate_with_rng(config, &mut rng)
}

/// Generate a station network from an explicit RNG.
pub fn generate_with_rng<R: Rng>(config: &NetworkConfig, rng: &mut R) -> Vec<Station> {
    let sites = pick_sites(config.station_count, rng);
    let mut stations: Vec<Station> = sites
        .iter()
        .enumerate()
        .map(|(id, site)| build_station(id, site, role_for_index(id), config, rng))
        .collect();
    settle(&mut stations, config, rng);
    stations
}

/// Station index 0 is always the forced-empty demo station, index 1 the
/// forced-full one. Fixed by position so every run shows both problem states.
fn role_for_index(index: usize) -> StationRole {
    match index {
        0 => StationRole::ForcedEmpty,
        1 => StationRole::ForcedFull,
        _ => StationRole::Normal,
    }
}

/// Pick catalog sites: without replacement while the catalog lasts, then with
/// replacement for the remainder.
fn pick_sites<R: Rng>(count: usize, rng: &mut R) -> Vec<CatalogEntry> {
    let mut sites: Vec<CatalogEntry> = STATION_CATALOG
        .choose_multiple(rng, count.min(STATION_CATALOG.len()))
        .copied()
        .collect();
    while sites.len() < count {
        sites.push(STATION_CATALOG[rng.gen_range(0..STATION_CATALOG.len())]);
    }
    sites
}

/// Uniformly random even capacity in the configured range. The validated
/// config guarantees at least one even value (min is even and min <= max).
fn random_even_capacity<R: Rng>(config: &NetworkConfig, rng: &mut R) -> u32 {
    let evens: Vec<u32> = (config.min_capacity..=config.max_capacity)
        .filter(|c| c % 2 == 0)
        .collect();
    evens[rng.gen_range(0..evens.len())]
}

fn build_station<R: Rng>(
    id: usize,
    site: &CatalogEntry,
    role: StationRole,
    config: &NetworkConfig,
    rng: &mut R,
) -> Station {
    let jitter = config.position_jitter_deg;
    let total_capacity = random_even_capacity(config, rng);

    let mut station = Station {
        id,
        name: site.name.to_string(),
        lat: site.lat + rng.gen_range(-jitter..=jitter),
        lng: site.lng + rng.gen_range(-jitter..=jitter),
        role,
        total_capacity,
        available_bikes: 0,
        free_docks: 0,
        waiting_to_rent: 0,
        waiting_to_return: 0,
    };

    match role {
        StationRole::ForcedEmpty => {
            station.available_bikes = 0;
            station.free_docks = total_capacity;
            station.waiting_to_rent = rng.gen_range(1..=config.max_waiting);
        }
        StationRole::ForcedFull => {
            station.available_bikes = total_capacity;
            station.free_docks = 0;
            station.waiting_to_return = rng.gen_range(1..=config.max_waiting);
        }
        StationRole::Normal => {
            // Bias the fleet to at most half-full; 20% of stations land in the
            // critically-empty band so the incentive always has candidates.
            let bikes = if rng.gen::<f64>() < config.very_low_probability {
                let very_low_max = (total_capacity as f64 * config.empty_bike_fraction) as u32;
                rng.gen_range(0..=very_low_max)
            } else {
                rng.gen_range(0..=total_capacity / 2)
            };
            station.available_bikes = bikes;
            station.free_docks = total_capacity - bikes;
        }
    }

    station
}

/// Post-pass enforcing the queue and split invariants.
///
/// Normal stations clear any waiting queue whose resource is available and
/// reset to a 50/50 split if bikes ever exceed docks. Forced stations only top
/// up the relevant waiting counter if it is still zero despite the exhausted
/// resource; their queues are part of the defined problem state.
fn settle<R: Rng>(stations: &mut [Station], config: &NetworkConfig, rng: &mut R) {
    for station in stations.iter_mut() {
        match station.role {
            StationRole::ForcedEmpty => {
                if station.available_bikes == 0 && station.waiting_to_rent == 0 {
                    station.waiting_to_rent = rng.gen_range(1..=config.max_waiting);
                }
            }
            StationRole::ForcedFull => {
                if station.free_docks == 0 && station.waiting_to_return == 0 {
                    station.waiting_to_return = rng.gen_range(1..=config.max_waiting);
                }
            }
            StationRole::Normal => {
                if station.available_bikes > 0 {
                    station.waiting_to_rent = 0;
                }
                if station.free_docks > 0 {
                    station.waiting_to_return = 0;
                }
                if station.available_bikes > station.free_docks {
                    station.available_bikes = station.total_capacity / 2;
                    station.free_docks = station.total_capacity - station.available_bikes;
                }
            }
        }
    }
}
