use stockroom_cli::{Config, demo};
use stockroom_inventory::TracingObserver;

fn main() -> anyhow::Result<()> {
    stockroom_observability::init();

    let config = Config::from_env()?;
    tracing::debug!(?config, "starting inventory demo");

    let stdout = std::io::stdout();
    demo::run(&config, TracingObserver, &mut stdout.lock());

    tracing::info!("Main execution finished.");
    Ok(())
}
