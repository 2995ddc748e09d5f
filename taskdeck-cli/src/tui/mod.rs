//! TUI module

pub mod app;
pub mod deadline;
mod input;
mod layout;
pub mod state;
pub mod views;
pub mod widgets;
