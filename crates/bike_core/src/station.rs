//! Station records and the resource vocabulary shared by the whole crate.

use serde::{Deserialize, Serialize};

/// Role assigned at generation time. The two forced roles pin a station into a
/// known problem state so both failure modes are always on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StationRole {
    Normal,
    /// Pinned to zero bikes with renters waiting.
    ForcedEmpty,
    /// Pinned to zero free docks with returners waiting.
    ForcedFull,
}

/// Which resource a user is blocked on at a station.
///
/// The rent queue corresponds to `Bikes`, the return queue to `Docks`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Need {
    Bikes,
    Docks,
}

/// A bike-share dock location with fixed capacity split between available
/// bikes and free docks.
///
/// Only the waiting counters mutate within a session; the bike/dock split is
/// fixed at generation (no rent/return transaction is modeled).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Station {
    pub id: usize,
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    pub role: StationRole,
    pub total_capacity: u32,
    pub available_bikes: u32,
    pub free_docks: u32,
    pub waiting_to_rent: u32,
    pub waiting_to_return: u32,
}

impl Station {
    /// Units of the given resource currently available.
    pub fn available(&self, need: Need) -> u32 {
        match need {
            Need::Bikes => self.available_bikes,
            Need::Docks => self.free_docks,
        }
    }

    /// Users queued for the given resource.
    pub fn waiting(&self, need: Need) -> u32 {
        match need {
            Need::Bikes => self.waiting_to_rent,
            Need::Docks => self.waiting_to_return,
        }
    }

    pub fn waiting_mut(&mut self, need: Need) -> &mut u32 {
        match need {
            Need::Bikes => &mut self.waiting_to_rent,
            Need::Docks => &mut self.waiting_to_return,
        }
    }

    pub fn has(&self, need: Need) -> bool {
        self.available(need) > 0
    }
}
