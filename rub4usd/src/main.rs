use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod api;
mod config;
mod error;
mod service;

const APP_NAME: &str = "rub4usd";

#[derive(Parser, Debug)]
#[command(name = APP_NAME, about = "Converts usd to rub with the current cbr rate")]
struct Args {
    /// Specify the IP address
    #[arg(short, long)]
    address: Option<String>,
    /// Specify the port
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let cfg = config::Config::from_env()
        .expect("unable to parse env variables")
        .with_overrides(args.address, args.port);

    info!("starting web server on address={}:{}...", cfg.address, cfg.port);

    api::server::run(cfg).await.expect("unable to serve requests");

    info!("web server has been closed...");
}
