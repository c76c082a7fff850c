pub mod alternative;
pub mod catalog;
pub mod config;
pub mod generator;
pub mod incentives;
pub mod station;
pub mod status;
pub mod waiting;
