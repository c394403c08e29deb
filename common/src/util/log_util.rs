use crate::config::SysConfig;
use log::LevelFilter;
use std::str::FromStr;

/// 按配置初始化 env_logger，级别非法时退回 info；重复初始化直接忽略
pub fn init_log(sys: &SysConfig) -> LevelFilter {
    let level = parse_level(&sys.log_level);
    let mut builder = env_logger::Builder::new();
    builder.filter(None, level);
    if builder.try_init().is_err() {
        log::debug!("logger already initialized");
    }
    level
}

fn parse_level(value: &str) -> LevelFilter {
    LevelFilter::from_str(value.trim()).unwrap_or(LevelFilter::Info)
}
