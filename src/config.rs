use log::Level;

pub const SCROLLED_THRESHOLD_PX: f64 = 50.0;
// Height of the fixed navbar; anchor targets land just below it.
pub const NAV_OFFSET_PX: f64 = 80.0;

pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -100px 0px";
pub const REVEAL_OFFSET_PX: u32 = 30;
pub const REVEAL_TRANSITION: &str = "opacity 0.6s ease, transform 0.6s ease";

pub const MODAL_SHOW_DELAY_MS: u32 = 10;
// Must match the .modal transition in assets/modal.css
pub const MODAL_REMOVE_DELAY_MS: u32 = 300;

pub const STATS_THRESHOLD: f64 = 0.5;
pub const COUNTER_DURATION_MS: u32 = 2000;
pub const COUNTER_TICK_MS: u32 = 16;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose logging when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
