use btc_powerlaw::Cli;

fn main() {
    use clap::Parser;

    // A. Init Logging
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    // B. Parse Args
    let args = Cli::parse();
    #[cfg(debug_assertions)]
    log::debug!("Parsed arguments: {:?}", args);

    // C. Run the requested command
    if let Err(e) = btc_powerlaw::app::run(args) {
        log::error!("⚠️  {:#}", e);
        std::process::exit(1);
    }
}
