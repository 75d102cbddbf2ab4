use std::io;

use friendsplit::{session, App, Config};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> anyhow::Result<()> {
    let config = Config::from_env();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();

    let roster = config.initial_roster();
    tracing::info!(friends = roster.len(), "starting session");

    let mut app = App::new(roster, config.default_image.clone());
    session::run(&mut app, io::stdin().lock(), io::stdout().lock())?;

    tracing::info!("session ended");
    Ok(())
}
