use shape_decorator::config::InheritanceConfig;
use shape_decorator::core::demo::run_inheritance;
use shape_decorator::utils::logger;
use shape_decorator::StdoutConsole;

fn main() {
    logger::init_cli_logger(false);

    if let Err(e) = run_inheritance(&StdoutConsole::new(), &InheritanceConfig::default()) {
        tracing::error!("❌ Inheritance demo failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }
}
