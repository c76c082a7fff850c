//! Fixed catalog of station sites used when generating a network.
//!
//! Generation samples from this catalog: without replacement while sites last,
//! with replacement once the requested count exceeds it.

/// A named site with its real-world coordinate.
#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

/// Map center used to frame the network on screen.
pub const BARCELONA_CENTER: (f64, f64) = (41.3900, 2.1650);

pub const STATION_CATALOG: &[CatalogEntry] = &[
    CatalogEntry { name: "Plaza Catalunya", lat: 41.3870, lng: 2.1700 },
    CatalogEntry { name: "Passeig de Gracia", lat: 41.3925, lng: 2.1650 },
    CatalogEntry { name: "Sagrada Familia", lat: 41.4036, lng: 2.1744 },
    CatalogEntry { name: "Barceloneta Beach", lat: 41.3780, lng: 2.1890 },
    CatalogEntry { name: "Camp Nou", lat: 41.3809, lng: 2.1228 },
    CatalogEntry { name: "Gracia - Vila", lat: 41.3984, lng: 2.1570 },
    CatalogEntry { name: "El Born CCM", lat: 41.3849, lng: 2.1818 },
    CatalogEntry { name: "Sants Estacio", lat: 41.3790, lng: 2.1400 },
    CatalogEntry { name: "Parc Guell", lat: 41.4145, lng: 2.1520 },
    CatalogEntry { name: "Diagonal Mar Park", lat: 41.4060, lng: 2.2170 },
    CatalogEntry { name: "Poblenou Park", lat: 41.4000, lng: 2.2000 },
    CatalogEntry { name: "Les Corts", lat: 41.3830, lng: 2.1300 },
];
