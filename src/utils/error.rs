use thiserror::Error;

#[derive(Error, Debug)]
pub enum DecoratorError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl DecoratorError {
    pub fn is_config_error(&self) -> bool {
        !matches!(self, DecoratorError::IoError(_))
    }

    /// 給終端使用者看的訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            DecoratorError::IoError(e) => format!("無法寫入輸出: {}", e),
            DecoratorError::ConfigError { message } => format!("配置錯誤: {}", message),
            DecoratorError::InvalidConfigValueError { field, reason, .. } => {
                format!("配置項 '{}' 無效: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            DecoratorError::IoError(_) => "Check that standard output is still open",
            DecoratorError::ConfigError { .. } => {
                "Make sure the config file exists and is valid TOML"
            }
            DecoratorError::InvalidConfigValueError { .. } => {
                "Fix the value listed above and run again"
            }
        }
    }

    /// 程式結束碼: 配置問題為 1，輸出問題為 2
    pub fn exit_code(&self) -> i32 {
        if self.is_config_error() {
            1
        } else {
            2
        }
    }
}

pub type Result<T> = std::result::Result<T, DecoratorError>;
