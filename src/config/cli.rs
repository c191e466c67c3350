use crate::config::toml_config::DemoConfig;
use crate::core::demo::DemoKind;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "shape-decorator")]
#[command(about = "Decorate shapes by inheritance and by composition")]
pub struct CliConfig {
    /// Which demonstration to run
    #[arg(long, value_enum, default_value_t = DemoKind::All)]
    pub demo: DemoKind,

    /// Path to a TOML file overriding shape names and colors
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// 有指定檔案時載入，否則使用預設值
    pub fn load_demo_config(&self) -> Result<DemoConfig> {
        match &self.config {
            Some(path) => DemoConfig::from_file(path),
            None => Ok(DemoConfig::default()),
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validate_path("config", path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CliConfig::try_parse_from(["shape-decorator"]).unwrap();

        assert_eq!(config.demo, DemoKind::All);
        assert!(config.config.is_none());
        assert!(!config.verbose);
        assert!(config.validate().is_ok());
        assert_eq!(config.load_demo_config().unwrap(), DemoConfig::default());
    }

    #[test]
    fn test_parse_demo_kind() {
        let config =
            CliConfig::try_parse_from(["shape-decorator", "--demo", "composition", "-v"]).unwrap();

        assert_eq!(config.demo, DemoKind::Composition);
        assert!(config.verbose);
    }

    #[test]
    fn test_unknown_demo_rejected() {
        assert!(CliConfig::try_parse_from(["shape-decorator", "--demo", "mixin"]).is_err());
    }

    #[test]
    fn test_empty_config_path_fails_validation() {
        let config = CliConfig::try_parse_from(["shape-decorator", "--config", ""]).unwrap();
        assert!(config.validate().is_err());
    }
}
