use clap::Parser;
use rainfall_server::proxy::DEFAULT_RAIN_API_URL;
use rainfall_server::web::WebServer;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use url::Url;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// TCP port to bind (Cloud Run provides $PORT)
    #[arg(short, long, env = "PORT", default_value_t = 8080)]
    port: u16,

    /// Directory containing the pre-built frontend bundle
    #[arg(long, env = "STATIC_DIR", default_value = "dist")]
    static_dir: PathBuf,

    /// Upstream rainfall API endpoint
    #[arg(long, env = "RAIN_API_URL", default_value = DEFAULT_RAIN_API_URL)]
    rain_url: Url,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let server = WebServer::new(args.port, args.static_dir, args.rain_url);
    if let Err(e) = server.run().await {
        tracing::error!("{:#}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn port_resolves_from_env_and_defaults() {
        let args = Args::try_parse_from(["rainfall-server"]).unwrap();
        assert_eq!(args.port, 8080);
        assert_eq!(args.static_dir, PathBuf::from("dist"));
        assert_eq!(args.rain_url.as_str(), DEFAULT_RAIN_API_URL);

        std::env::set_var("PORT", "9090");
        let args = Args::try_parse_from(["rainfall-server"]).unwrap();
        assert_eq!(args.port, 9090);
        std::env::remove_var("PORT");

        let args = Args::try_parse_from(["rainfall-server", "--port", "3000"]).unwrap();
        assert_eq!(args.port, 3000);
    }
}
