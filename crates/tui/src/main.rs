use sprout_tui::{app::App, config, error::Result, logging};

#[tokio::main]
async fn main() -> Result<()> {
    let config = config::load()?;
    logging::init(&config)?;
    tracing::info!(base_url = %config.base_url, "starting");

    let mut app = App::new(config)?;
    let result = app.run().await;
    if let Err(err) = &result {
        tracing::error!("terminal client failed: {err}");
    }
    result
}
