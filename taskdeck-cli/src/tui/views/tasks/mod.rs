//! Task view - filtered task rendering

pub mod render;

pub use render::draw_task_list;
