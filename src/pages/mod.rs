pub mod main_view;
pub mod project_detail;
