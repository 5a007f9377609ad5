use thiserror::Error;

#[derive(Error, Debug)]
pub enum KombuchaError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unknown field: {name}")]
    UnknownFieldError { name: String },

    #[error("Unknown command: {input}")]
    UnknownCommandError { input: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// 使用者輸入錯誤，可以直接重試
    Low,
    /// 配置錯誤，需要修改檔案或參數
    High,
    /// 系統層級錯誤 (IO、序列化)
    Critical,
}

impl KombuchaError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            KombuchaError::UnknownFieldError { .. } | KombuchaError::UnknownCommandError { .. } => {
                ErrorSeverity::Low
            }
            KombuchaError::TomlError(_)
            | KombuchaError::ConfigError { .. }
            | KombuchaError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            KombuchaError::IoError(_) | KombuchaError::SerializationError(_) => {
                ErrorSeverity::Critical
            }
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            KombuchaError::IoError(e) => format!("Could not read or write data: {}", e),
            KombuchaError::SerializationError(e) => format!("Could not produce JSON output: {}", e),
            KombuchaError::TomlError(e) => format!("The configuration file is not valid TOML: {}", e),
            KombuchaError::ConfigError { message } => format!("Configuration problem: {}", message),
            KombuchaError::InvalidConfigValueError { field, value, reason } => {
                format!("'{}' is not a valid value for {} ({})", value, field, reason)
            }
            KombuchaError::UnknownFieldError { name } => {
                format!("There is no field called '{}'", name)
            }
            KombuchaError::UnknownCommandError { input } => {
                format!("Did not understand '{}'", input)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            KombuchaError::IoError(_) => "Check that the file exists and is readable",
            KombuchaError::SerializationError(_) => "Try the text output format instead",
            KombuchaError::TomlError(_) => "Fix the TOML syntax in the configuration file",
            KombuchaError::ConfigError { .. } | KombuchaError::InvalidConfigValueError { .. } => {
                "Ratios must be positive numbers and water must be non-negative"
            }
            KombuchaError::UnknownFieldError { .. } => "Use 'water' (w) or 'starter' (s)",
            KombuchaError::UnknownCommandError { .. } => "Type 'help' to list the available commands",
        }
    }
}

pub type Result<T> = std::result::Result<T, KombuchaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_maps_to_exit_code() {
        let unknown = KombuchaError::UnknownCommandError {
            input: "brew".to_string(),
        };
        assert_eq!(unknown.severity(), ErrorSeverity::Low);
        assert_eq!(unknown.exit_code(), 0);

        let config = KombuchaError::ConfigError {
            message: "bad".to_string(),
        };
        assert_eq!(config.exit_code(), 1);

        let io = KombuchaError::IoError(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        ));
        assert_eq!(io.severity(), ErrorSeverity::Critical);
        assert_eq!(io.exit_code(), 3);
    }

    #[test]
    fn test_user_friendly_message_names_the_field() {
        let err = KombuchaError::InvalidConfigValueError {
            field: "ratios.tea_grams_per_liter".to_string(),
            value: "-7".to_string(),
            reason: "Value must be greater than 0".to_string(),
        };
        let message = err.user_friendly_message();
        assert!(message.contains("ratios.tea_grams_per_liter"));
        assert!(message.contains("-7"));
    }
}
