//! Terminal dashboard
//!
//! View state, update logic and widgets, one component per panel.

pub mod components;
pub mod renderer;
pub mod state;
pub mod updaters;
pub mod utils;

pub use renderer::render_dashboard;
pub use state::DashboardView;
