//! View rendering modules

pub mod tab_bar;
pub mod tasks;
