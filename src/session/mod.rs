pub mod headless_mode;
pub mod messages;
pub mod once_mode;
pub mod setup;
pub mod tui_mode;

pub use headless_mode::run_headless_mode;
pub use once_mode::run_once;
pub use setup::{SessionData, setup_session};
pub use tui_mode::run_tui_mode;
