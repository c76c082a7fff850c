//! Interactive waiting-queue mutation.

use crate::station::{Need, Station};

/// Add one user to a station's waiting queue for `need`, clamped at
/// `ceiling`. Returns the queue length after the update, or `None` when no
/// station has the given id.
pub fn increment_waiting(
    stations: &mut [Station],
    station_id: usize,
    need: Need,
    ceiling: u32,
) -> Option<u32> {
    let station = stations.iter_mut().find(|s| s.id == station_id)?;
    let queue = station.waiting_mut(need);
    *queue = (*queue + 1).min(ceiling);
    Some(*queue)
}
