pub mod common_utils;
pub mod date_util;
pub mod log_util;
