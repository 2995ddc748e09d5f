//! List tab bar and status bar

pub mod render;

pub use render::{draw_status_bar, draw_tab_bar};
