pub mod app;
pub mod gear_scroll;
pub mod gear_view;
