pub mod app;
pub mod events;
pub mod filter;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod nav;
pub mod render;
pub mod runtime;
pub mod terminal_session;
pub mod theme;
pub mod views;

pub use runtime::run;
