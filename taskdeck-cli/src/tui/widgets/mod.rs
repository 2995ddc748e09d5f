//! Reusable TUI widgets and helpers

pub mod virtual_list;

pub use virtual_list::VirtualList;
