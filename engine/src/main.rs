// Engine main entry point
use engine::config::settings::{EngineSettings, ExchangeCredentials};
use engine::services::prediction_service::MyPredictionEngine;
use engine::services::simulator::PredictionService;
use engine::services::PredictionEngineServer;
use tonic::transport::Server;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    info!("Starting Crypto Predictor Engine...");

    let settings = EngineSettings::load()?;
    // Read once so a misconfigured environment shows up in the start-up log.
    let credentials = ExchangeCredentials::from_env();
    info!(
        exchange_credentials = credentials.is_configured(),
        coin = %settings.coin_ticker,
        failure_rate = settings.failure_rate,
        "Engine settings loaded"
    );

    let addr = format!("{}:{}", settings.host, settings.port).parse()?;
    info!("Engine will listen on {}", addr);

    let prediction_service = PredictionService::new(settings);
    let engine_service = MyPredictionEngine::new(prediction_service);

    Server::builder()
        .add_service(PredictionEngineServer::new(engine_service))
        .serve(addr)
        .await?;

    Ok(())
}
