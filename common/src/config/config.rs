use crate::errors::AppError;
use config::{Config, Environment};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    pub database: Option<DatabaseConfig>,
    pub kafka: Option<KafkaConfig>,
    pub sys: Option<SysConfig>,
}

impl AppConfig {
    /// 读取配置文件，环境变量可覆盖文件中的值，如 `APP_DATABASE__DB_NAME`、`APP_SYS__LOG_LEVEL`
    pub fn new(file: &str) -> Result<Self, AppError> {
        Self::with_env(file, Self::env_source())
    }

    /// `APP_` 前缀，段与字段之间用双下划线分隔，字段名自身可含单下划线
    pub fn env_source() -> Environment {
        Environment::with_prefix("APP").prefix_separator("_").separator("__").try_parsing(true)
    }

    pub fn with_env(file: &str, env: Environment) -> Result<Self, AppError> {
        let config = Config::builder().add_source(config::File::with_name(file).required(true)).add_source(env).build()?;
        let cfg = config.try_deserialize::<AppConfig>()?;
        Ok(cfg)
    }

    pub fn get_database(&self) -> DatabaseConfig {
        self.database.clone().unwrap_or_default()
    }
    pub fn get_kafka(&self) -> KafkaConfig {
        self.kafka.clone().unwrap_or_default()
    }
    pub fn get_sys(&self) -> SysConfig {
        self.sys.clone().unwrap_or_default()
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub db_name: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self { url: "mongodb://localhost:27017".to_string(), db_name: "social".to_string() }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct SysConfig {
    //全局日志级别
    pub log_level: String,
}

impl Default for SysConfig {
    fn default() -> Self {
        Self { log_level: "info".to_string() }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct KafkaConfig {
    pub brokers: String,
    //通知事件 topic
    pub topic_notification: String,
    pub partitions: i32,
    pub replicas: i32,
}

impl Default for KafkaConfig {
    fn default() -> Self {
        Self { brokers: "localhost:9092".to_string(), topic_notification: "notification".to_string(), partitions: 3, replicas: 1 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn write_config() -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
[database]
url = "mongodb://db:27017"
db_name = "friends"

[kafka]
brokers = "kafka:9092"
topic_notification = "notify"
"#
        )
        .unwrap();
        file
    }

    #[test]
    fn test_load_from_file() {
        let file = write_config();
        let path = file.path().to_str().unwrap().to_string();
        let cfg = AppConfig::with_env(&path, AppConfig::env_source().source(Some(HashMap::new()))).unwrap();
        assert_eq!(cfg.get_database().db_name, "friends");
        assert_eq!(cfg.get_kafka().brokers, "kafka:9092");
        assert_eq!(cfg.get_kafka().topic_notification, "notify");
        // 未配置的字段走默认值
        assert_eq!(cfg.get_kafka().partitions, 3);
        assert_eq!(cfg.get_sys().log_level, "info");
    }

    #[test]
    fn test_env_overrides_underscored_keys() {
        let file = write_config();
        let path = file.path().to_str().unwrap().to_string();
        let vars: HashMap<String, String> = [
            ("APP_DATABASE__DB_NAME", "override"),
            ("APP_SYS__LOG_LEVEL", "debug"),
            ("APP_KAFKA__TOPIC_NOTIFICATION", "friend-events"),
            ("APP_KAFKA__PARTITIONS", "6"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let cfg = AppConfig::with_env(&path, AppConfig::env_source().source(Some(vars))).unwrap();
        assert_eq!(cfg.get_database().db_name, "override");
        assert_eq!(cfg.get_database().url, "mongodb://db:27017");
        assert_eq!(cfg.get_sys().log_level, "debug");
        assert_eq!(cfg.get_kafka().topic_notification, "friend-events");
        assert_eq!(cfg.get_kafka().partitions, 6);
        assert_eq!(cfg.get_kafka().brokers, "kafka:9092");
    }

    #[test]
    fn test_missing_file() {
        let result = AppConfig::new("/definitely/not/here/app-config");
        assert!(matches!(result, Err(AppError::Config(_))));
    }
}
