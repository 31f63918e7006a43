use std::env;

use dapp_probe::{ProbeConfig, Prober};
use tracing::error;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    let prober = match ProbeConfig::from_args(&args).and_then(|config| Prober::new(&config)) {
        Ok(prober) => prober,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = prober.run_all(&mut std::io::stdout()).await {
        error!(error=%e, "failed to write probe report");
        return Err(e);
    }

    Ok(())
}
