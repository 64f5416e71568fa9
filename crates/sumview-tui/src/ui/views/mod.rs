pub mod summary_panel;
pub mod thread_detail;
pub mod thread_list;
