use passforge::{cli::passforge::run, TARGET};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "passforge=info".into()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = run() {
        if !e.is_interrupted() {
            tracing::error!(target: TARGET, "{}", e);
        }
        std::process::exit(e.exit_code());
    }
}
