//! Rebalancing incentives: nudge users toward moves that even out the fleet.

use crate::config::NetworkConfig;
use crate::station::{Station, StationRole};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RebalanceIncentive {
    /// Bring a bike to a critically empty station and the next electric ride
    /// is free.
    FreeElectricRide,
    /// Return a bike here for a bonus (station is running low).
    ReturnBonus,
    /// Take a bike from here for a bonus (station is holding a surplus).
    TakeBonus,
}

/// Incentive for a station, if any, checked in priority order: free e-ride,
/// then return bonus, then take bonus.
///
/// The forced demo stations are excluded from the incentives that would
/// misread their pinned state: both from the e-ride, the forced-empty one from
/// the return bonus, the forced-full one from the take bonus.
pub fn rebalance_incentive(
    station: &Station,
    config: &NetworkConfig,
) -> Option<RebalanceIncentive> {
    let capacity = station.total_capacity as f64;
    let bikes = station.available_bikes as f64;

    if station.role == StationRole::Normal && bikes <= capacity * config.empty_bike_fraction {
        return Some(RebalanceIncentive::FreeElectricRide);
    }

    if station.role != StationRole::ForcedEmpty
        && bikes <= capacity * config.low_bike_fraction
        && station.free_docks > 0
    {
        return Some(RebalanceIncentive::ReturnBonus);
    }

    if station.role != StationRole::ForcedFull
        && bikes >= capacity * config.surplus_min_fraction
        && bikes <= capacity * config.surplus_max_fraction
    {
        return Some(RebalanceIncentive::TakeBonus);
    }

    None
}
