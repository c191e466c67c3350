use crate::utils::error::{DecoratorError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_INHERITANCE_NAME: &str = "triangle";
pub const DEFAULT_INHERITANCE_COLOR: &str = "blue";
pub const DEFAULT_COMPOSITION_NAME: &str = "circle";

/// 示範程式的參數；所有欄位皆可省略
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub inheritance: InheritanceConfig,
    pub composition: CompositionConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InheritanceConfig {
    pub name: String,
    pub color: String,
}

impl Default for InheritanceConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_INHERITANCE_NAME.to_string(),
            color: DEFAULT_INHERITANCE_COLOR.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompositionConfig {
    pub name: String,
}

impl Default for CompositionConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_COMPOSITION_NAME.to_string(),
        }
    }
}

impl DemoConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| DecoratorError::ConfigError {
                message: format!("cannot read '{}': {}", path.display(), e),
            })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| DecoratorError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${SHAPE_NAME})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| DecoratorError::ConfigError {
            message: format!("invalid placeholder pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = DemoConfig::from_toml_str("").unwrap();

        assert_eq!(config, DemoConfig::default());
        assert_eq!(config.inheritance.name, "triangle");
        assert_eq!(config.inheritance.color, "blue");
        assert_eq!(config.composition.name, "circle");
    }

    #[test]
    fn test_partial_config() {
        let toml_content = r#"
[inheritance]
color = "red"

[composition]
name = "ellipse"
"#;

        let config = DemoConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.inheritance.name, "triangle");
        assert_eq!(config.inheritance.color, "red");
        assert_eq!(config.composition.name, "ellipse");
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("SHAPE_DECORATOR_TEST_COLOR", "green");
        let toml_content = r#"
[inheritance]
color = "${SHAPE_DECORATOR_TEST_COLOR}"
name = "${SHAPE_DECORATOR_TEST_UNSET_NAME}"
"#;

        let config = DemoConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.inheritance.color, "green");
        assert_eq!(config.inheritance.name, "${SHAPE_DECORATOR_TEST_UNSET_NAME}");
    }

    #[test]
    fn test_invalid_toml() {
        let err = DemoConfig::from_toml_str("[inheritance\nname = 1").unwrap_err();
        assert!(matches!(err, DecoratorError::ConfigError { .. }));
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[composition]\nname = \"square\"").unwrap();

        let config = DemoConfig::from_file(file.path()).unwrap();

        assert_eq!(config.composition.name, "square");
        assert_eq!(config.inheritance, InheritanceConfig::default());
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = DemoConfig::from_file("/nonexistent/shapes.toml").unwrap_err();
        assert!(err.is_config_error());
        assert_eq!(err.exit_code(), 1);
    }
}
