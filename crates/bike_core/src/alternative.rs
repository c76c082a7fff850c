//! Alternative-station selection: recommend a substitute station for a user
//! blocked on bikes or docks.

use crate::station::{Need, Station, StationRole};

/// Default weight applied to the waiting queue already competing for the
/// resource being sought.
const DEFAULT_QUEUE_WEIGHT: f64 = 0.5;

/// Penalty that pushes a broken forced station to the bottom of the ranking.
/// Large enough to lose against any real candidate, but the station still
/// surfaces as a last resort when nothing else qualifies.
const DEFAULT_SPECIAL_PENALTY: f64 = 100.0;

/// Scores candidate stations and keeps the best one.
///
/// Score = resource count minus `queue_weight` times the competing queue
/// length, minus `special_penalty` for the forced station that is broken in
/// the complementary way (never send a returner to a station with no docks
/// unless it is the only option).
#[derive(Debug)]
pub struct AlternativeSelector {
    pub queue_weight: f64,
    pub special_penalty: f64,
}

impl Default for AlternativeSelector {
    fn default() -> Self {
        Self {
            queue_weight: DEFAULT_QUEUE_WEIGHT,
            special_penalty: DEFAULT_SPECIAL_PENALTY,
        }
    }
}

impl AlternativeSelector {
    pub fn new(queue_weight: f64, special_penalty: f64) -> Self {
        Self {
            queue_weight,
            special_penalty,
        }
    }

    fn penalized(&self, station: &Station, need: Need) -> bool {
        match need {
            Need::Bikes => station.role == StationRole::ForcedFull && station.free_docks == 0,
            Need::Docks => station.role == StationRole::ForcedEmpty && station.available_bikes == 0,
        }
    }

    fn score(&self, station: &Station, need: Need) -> f64 {
        let mut score =
            station.available(need) as f64 - station.waiting(need) as f64 * self.queue_weight;
        if self.penalized(station, need) {
            score -= self.special_penalty;
        }
        score
    }

    /// Linear scan over all stations except `exclude_id`. Returns the
    /// maximum-score candidate with `available(need) > 0`, first-encountered
    /// on ties, or `None` when no station qualifies.
    pub fn find_alternative<'a>(
        &self,
        stations: &'a [Station],
        exclude_id: usize,
        need: Need,
    ) -> Option<&'a Station> {
        let mut best: Option<(&Station, f64)> = None;

        for station in stations {
            if station.id == exclude_id || !station.has(need) {
                continue;
            }
            let score = self.score(station, need);
            match best {
                None => best = Some((station, score)),
                Some((_, best_score)) if score > best_score => best = Some((station, score)),
                _ => {}
            }
        }

        best.map(|(station, _)| station)
    }
}
