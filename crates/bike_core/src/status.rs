//! Presentation data derived from station state: map marker styling and the
//! problem/guidance notices shown on a station card.

use crate::alternative::AlternativeSelector;
use crate::config::NetworkConfig;
use crate::station::{Need, Station};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerColor {
    Green,
    Orange,
    Red,
    DarkRed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerIcon {
    Bicycle,
    UserClock,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerStyle {
    pub color: MarkerColor,
    pub icon: MarkerIcon,
}

/// Marker color/icon for a station.
///
/// Color tracks bike availability: dark red when empty with renters waiting,
/// red when empty, orange at or below the low-bike fraction, green otherwise.
/// A full station with returners waiting swaps the icon to the user clock.
pub fn marker_style(station: &Station, config: &NetworkConfig) -> MarkerStyle {
    let mut icon = MarkerIcon::Bicycle;

    let color = if station.available_bikes == 0 {
        if station.waiting_to_rent > 0 {
            icon = MarkerIcon::UserClock;
            MarkerColor::DarkRed
        } else {
            MarkerColor::Red
        }
    } else if station.available_bikes as f64
        <= station.total_capacity as f64 * config.low_bike_fraction
    {
        MarkerColor::Orange
    } else {
        MarkerColor::Green
    };

    if station.free_docks == 0 && station.waiting_to_return > 0 {
        icon = MarkerIcon::UserClock;
    }

    MarkerStyle { color, icon }
}

/// A problem or guidance message for a station card. The core derives these;
/// how they are worded and styled is up to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// No bikes available; `waiting` renters are queued.
    OutOfBikes { waiting: u32 },
    /// No free docks; `waiting` returners are queued.
    OutOfDocks { waiting: u32 },
    /// Recommended substitute station for the given need.
    TryAlternative {
        need: Need,
        station_id: usize,
        name: String,
        available: u32,
    },
    /// No other station satisfies the need.
    NoAlternative { need: Need },
    /// Returning at the recommended station earns a credit.
    ReturnCredit { station_id: usize, name: String },
}

/// Collect the notices for one station: an out-of-resource error per exhausted
/// side, followed by the recommended alternative (or the lack of one). A dock
/// alternative additionally carries the return credit.
pub fn station_notices(
    stations: &[Station],
    station_id: usize,
    selector: &AlternativeSelector,
) -> Vec<Notice> {
    let Some(station) = stations.iter().find(|s| s.id == station_id) else {
        return Vec::new();
    };

    let mut notices = Vec::new();

    if station.available_bikes == 0 {
        notices.push(Notice::OutOfBikes {
            waiting: station.waiting_to_rent,
        });
        match selector.find_alternative(stations, station_id, Need::Bikes) {
            Some(alt) => notices.push(Notice::TryAlternative {
                need: Need::Bikes,
                station_id: alt.id,
                name: alt.name.clone(),
                available: alt.available_bikes,
            }),
            None => notices.push(Notice::NoAlternative { need: Need::Bikes }),
        }
    }

    if station.free_docks == 0 {
        notices.push(Notice::OutOfDocks {
            waiting: station.waiting_to_return,
        });
        match selector.find_alternative(stations, station_id, Need::Docks) {
            Some(alt) => {
                notices.push(Notice::TryAlternative {
                    need: Need::Docks,
                    station_id: alt.id,
                    name: alt.name.clone(),
                    available: alt.free_docks,
                });
                notices.push(Notice::ReturnCredit {
                    station_id: alt.id,
                    name: alt.name.clone(),
                });
            }
            None => notices.push(Notice::NoAlternative { need: Need::Docks }),
        }
    }

    notices
}
