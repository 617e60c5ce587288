pub mod api_utils;
pub mod components;
pub mod format;
pub mod icons;
pub mod list_utils;
pub mod op_status;
pub mod request_tracker;
