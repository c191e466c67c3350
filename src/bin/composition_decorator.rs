use shape_decorator::config::CompositionConfig;
use shape_decorator::core::demo::run_composition;
use shape_decorator::utils::logger;
use shape_decorator::StdoutConsole;

fn main() {
    logger::init_cli_logger(false);

    if let Err(e) = run_composition(&StdoutConsole::new(), &CompositionConfig::default()) {
        tracing::error!("❌ Composition demo failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }
}
