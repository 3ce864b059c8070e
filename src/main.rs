use wayfinder::api::LocationAPI;
use wayfinder::config::Config;
use wayfinder::engine::Engine;
use wayfinder::error::Error;
use wayfinder::external::{PositionOptions, Services};
use wayfinder::server::serve;

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;
    let services = Services::from_config(&config)?;

    let engine = Engine::new(
        services,
        &config.map,
        PositionOptions {
            high_accuracy: config.high_accuracy,
        },
    );

    // one-shot, before the first client connects
    engine.acquire_location().await?;

    serve(engine, config.addr).await
}
