use restprobe::{Engine, Fetcher, LogConsole};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut engine = Engine::new(None, Arc::new(LogConsole::new()));
    engine.add_component(Box::new(Fetcher::default()))?;

    // Fetch failures end up on the console; only engine level problems make it here
    engine.start()?;
    engine.wait().await?;

    Ok(())
}
