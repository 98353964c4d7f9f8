use std::process::ExitCode;

use configs::AppConfig;
use dotenvy::dotenv;
use tokio::runtime::Runtime;
use tracing::{error, info};
use uuid::Uuid;

const SERVICE: &str = "edu-server";

/// Log panics with their source location and the instance that raised them.
fn install_panic_hook(instance: Uuid) {
    std::panic::set_hook(Box::new(move |panic| {
        let location = panic
            .location()
            .map(|l| format!("{}:{}", l.file(), l.line()))
            .unwrap_or_default();
        error!(service = SERVICE, event = "panic", %instance, %location, message = %panic, "unhandled panic");
    }));
}

/// Worker count from config, else `TOKIO_WORKER_THREADS`, else tokio's default.
fn build_runtime(cfg: &AppConfig) -> std::io::Result<Runtime> {
    let threads = cfg
        .server
        .worker_threads
        .or_else(|| std::env::var("TOKIO_WORKER_THREADS").ok().and_then(|v| v.parse().ok()));
    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all().thread_name("edu-worker");
    if let Some(n) = threads {
        builder.worker_threads(n);
    }
    builder.build()
}

fn main() -> ExitCode {
    dotenv().ok();
    common::utils::logging::init_logging_from_env();

    let cfg = match AppConfig::load_or_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!(service = SERVICE, event = "config_invalid", error = ?e, "configuration rejected");
            return ExitCode::FAILURE;
        }
    };

    let instance = Uuid::new_v4();
    install_panic_hook(instance);

    let rt = match build_runtime(&cfg) {
        Ok(rt) => rt,
        Err(e) => {
            error!(service = SERVICE, event = "runtime_build_failed", error = %e, "failed to build tokio runtime");
            return ExitCode::FAILURE;
        }
    };

    info!(
        service = SERVICE,
        event = "start",
        %instance,
        version = env!("CARGO_PKG_VERSION"),
        host = %cfg.server.host,
        port = cfg.server.port,
        max_page_size = cfg.pagination.max_page_size,
        "edu server starting"
    );

    match rt.block_on(server::serve(cfg, server::shutdown_signal())) {
        Ok(()) => {
            info!(service = SERVICE, event = "stop", %instance, "edu server stopped");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(service = SERVICE, event = "run_failed", %instance, error = ?e, "edu server exited with error");
            ExitCode::FAILURE
        }
    }
}
