//! UI modules for the dashboard.

pub mod app_shell;
pub mod constants;
pub mod controls;
pub mod dashboard;
pub mod rendering;
