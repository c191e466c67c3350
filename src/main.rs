use clap::Parser;
use shape_decorator::utils::{logger, validation::Validate};
use shape_decorator::{CliConfig, DemoRunner, StdoutConsole};

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting shape-decorator CLI");
    tracing::debug!("CLI config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    let demo_config = match config.load_demo_config() {
        Ok(demo_config) => demo_config,
        Err(e) => {
            tracing::error!("❌ Failed to load demo config: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    let runner = DemoRunner::with_config(StdoutConsole::new(), demo_config);

    if let Err(e) = runner.run(config.demo) {
        tracing::error!("❌ Demo failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }
}
