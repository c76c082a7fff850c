//! Application state for the dashboard.

use bike_core::alternative::AlternativeSelector;
use bike_core::config::NetworkConfig;
use bike_core::generator::generate_network;
use bike_core::station::{Need, Station};
use bike_core::waiting::increment_waiting;

pub struct BikeUiApp {
    pub config: NetworkConfig,
    pub stations: Vec<Station>,
    pub selector: AlternativeSelector,
    pub seed_enabled: bool,
    pub seed_value: u64,
    pub config_error: Option<String>,
    pub show_labels: bool,
}

impl BikeUiApp {
    pub fn new() -> Self {
        let seed_value = 123;
        let config = NetworkConfig::default().with_seed(seed_value);
        let stations = generate_network(&config);
        Self {
            config,
            stations,
            selector: AlternativeSelector::default(),
            seed_enabled: true,
            seed_value,
            config_error: None,
            show_labels: true,
        }
    }

    /// Discard the current network and generate a fresh one ("simulate time
    /// passing"). Parameter edits are validated here; an invalid configuration
    /// keeps the previous network and reports the error instead.
    pub fn refresh(&mut self) {
        self.config.seed = self.seed_enabled.then_some(self.seed_value);
        match self.config.validate() {
            Ok(()) => {
                self.config_error = None;
                self.stations = generate_network(&self.config);
            }
            Err(err) => self.config_error = Some(err.to_string()),
        }
    }

    /// One click on a wait button.
    pub fn wait_at(&mut self, station_id: usize, need: Need) {
        increment_waiting(
            &mut self.stations,
            station_id,
            need,
            self.config.queue_ceiling(),
        );
    }
}
