use clap::Parser;
use config_gateway::{config, logger, server};
use std::sync::Arc;

/// Serve YAML config files behind a shared access token
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Configuration file (extension optional); missing files fall back to defaults
    #[arg(short, long, default_value = "gateway")]
    config: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let cfg = config::Config::load_from(&cli.config)?;
    logger::init(&cfg.logging)?;

    // Size the runtime from the workers setting, CPU cores by default
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }
    let runtime = runtime_builder.build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: config::Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.get_socket_addr()?;
    let listener = server::create_reusable_listener(addr)?;
    let state = Arc::new(config::AppState::new(&cfg)?);

    logger::log_server_start(&listener.local_addr()?, &cfg, state.base_dir());

    server::serve(listener, state, server::shutdown_signal()).await;
    Ok(())
}
