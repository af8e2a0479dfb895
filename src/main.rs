mod app;
mod config;
mod display;
mod reconciler;
mod registry;
mod utils;

use app::FileboxApp;
use config::BackendConfig;
use eframe::CreationContext;
use reconciler::Dispatcher;
use registry::HttpRegistry;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("filebox=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let config = match BackendConfig::from_build_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid build configuration: {}", e);
            std::process::exit(1);
        }
    };

    let registry = match HttpRegistry::new(config.clone()) {
        Ok(registry) => registry,
        Err(e) => {
            error!("Failed to create HTTP client: {}", e);
            std::process::exit(1);
        }
    };

    let dispatcher = match Dispatcher::new(Arc::new(registry)) {
        Ok(dispatcher) => dispatcher,
        Err(e) => {
            error!("Failed to start I/O runtime: {}", e);
            std::process::exit(1);
        }
    };

    info!("Using backend at {}", config.base_url);

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([900.0, 700.0])
            .with_min_inner_size([480.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "File Upload System",
        options,
        Box::new(move |cc: &CreationContext| Box::new(FileboxApp::new(cc, config, dispatcher))),
    )
}
