//! Exclusion process simulator: engine, persistence and views wired into
//! one application.

pub mod app;
pub mod model;
pub mod ui;
