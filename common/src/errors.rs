use config::ConfigError;
use log::error;
use mongodb::error::Error as MongoError;
use thiserror::Error;

/// 应用错误类型
#[derive(Debug, Error)]
pub enum AppError {
    // ==== 常规业务错误 ====
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Target already exists: {0}")]
    TargetAlreadyExists(String),

    #[error("Target not exist: {0}")]
    TargetNotExist(String),

    // ==== 系统错误 ====
    #[error("MongoDB error: {0}")]
    Mongo(#[from] MongoError),
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<anyhow::Error> for AppError {
    fn from(e: anyhow::Error) -> Self {
        AppError::Internal(e.to_string())
    }
}

impl AppError {
    /// 上游 API 层应返回的 HTTP 状态码；系统错误只记录日志，不向外暴露细节
    pub fn status_code(&self) -> u16 {
        match self {
            AppError::BadRequest(_) => 400,
            AppError::TargetNotExist(_) => 404,
            AppError::TargetAlreadyExists(_) => 409,
            e => {
                error!("{:?}", e);
                500
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::AppError;

    #[test]
    fn test_status_code() {
        assert_eq!(AppError::BadRequest("self".into()).status_code(), 400);
        assert_eq!(AppError::TargetNotExist("gone".into()).status_code(), 404);
        assert_eq!(AppError::TargetAlreadyExists("dup".into()).status_code(), 409);
        assert_eq!(AppError::Internal("boom".into()).status_code(), 500);
    }

    #[test]
    fn test_anyhow_becomes_internal() {
        let err: AppError = anyhow::anyhow!("kafka down").into();
        assert!(matches!(err, AppError::Internal(ref m) if m == "kafka down"));
    }
}
