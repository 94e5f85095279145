use locus_server::ServerBuilder;
use locus_server::config::loader::load_config;
use locus_server::observability;

/// Picks the config path out of the command line, if one was given.
/// Falls back to the `LOCUS_CONFIG` environment variable; with neither
/// set, the loader tries `locus.toml` in the working directory.
fn explicit_config_path(args: &[String]) -> Option<String> {
    args.iter()
        .position(|arg| arg == "--config")
        .and_then(|pos| args.get(pos + 1))
        .cloned()
}

#[tokio::main]
async fn main() {
    // A .env file is optional; only a malformed one is worth a complaint.
    match dotenvy::dotenv() {
        Ok(_) => {}
        Err(err) if err.not_found() => {}
        Err(err) => eprintln!("warning: could not read .env: {err}"),
    }

    let args: Vec<String> = std::env::args().skip(1).collect();
    let path = explicit_config_path(&args)
        .or_else(|| std::env::var("LOCUS_CONFIG").ok().filter(|p| !p.is_empty()));

    let cfg = match load_config(path.as_deref()) {
        Ok(cfg) => cfg,
        Err(err) => {
            eprintln!("configuration error: {err}");
            std::process::exit(2);
        }
    };

    observability::init_tracing(&cfg.logging.level);
    tracing::info!(
        path = path.as_deref().unwrap_or("locus.toml"),
        "configuration loaded"
    );

    if cfg.auth.api_key.is_empty() {
        tracing::warn!("auth.api_key is empty; every location request will be rejected with 401");
    }

    let server = ServerBuilder::new().with_config(cfg).build();
    if let Err(err) = server.run().await {
        tracing::error!(error = %err, "server exited with error");
        std::process::exit(1);
    }
}
