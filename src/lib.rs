pub mod config;
pub mod dashboard;
pub mod domain;
pub mod logging;
pub mod mvi;
pub mod store;
pub mod ui;
