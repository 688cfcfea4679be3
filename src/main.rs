//! Wiring & DI. Entry point: bootstrap adapters, inject into services, run UI.
//! No business logic here.

use std::path::PathBuf;
use std::sync::Arc;

use article_crew::adapters::ai::{AzureOpenAiAdapter, MockChatAdapter};
use article_crew::adapters::persistence::PipelineStore;
use article_crew::adapters::ui::TuiInputPort;
use article_crew::ports::{ChatPort, InputPort};
use article_crew::shared::config::AppConfig;
use article_crew::usecases::GenerationService;
use dotenv::dotenv;
use inquire::Password;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!("no .env found"),
    }

    article_crew::adapters::ui::init_ui();

    let cfg = AppConfig::load().unwrap_or_default();

    // --- Pipeline definition: file-backed, defaults when absent ---
    let pipeline_store = Arc::new(PipelineStore::new(cfg.pipeline_config_or_default()));
    let pipeline = pipeline_store.load().await;
    info!(
        agents = pipeline.crew.agents.len(),
        tasks = pipeline.crew.tasks.len(),
        "pipeline definition ready"
    );

    // --- Credential: config/env, else one interactive prompt per session ---
    let api_key = match cfg.api_key() {
        Some(key) => {
            info!("API key configured (env/config)");
            Some(key)
        }
        None => {
            let entered = Password::new("Enter your Azure OpenAI API key (blank for offline mock):")
                .without_confirmation()
                .prompt()
                .unwrap_or_default();
            if entered.trim().is_empty() {
                None
            } else {
                Some(entered)
            }
        }
    };

    // --- Chat boundary: Azure adapter when a key is present, mock otherwise ---
    let chat: Arc<dyn ChatPort> = match api_key {
        Some(key) => {
            let adapter = AzureOpenAiAdapter::new(
                &cfg.api_base_or_default(),
                &cfg.api_version_or_default(),
                &cfg.deployment_or_default(),
                key,
            )
            .map_err(|e| anyhow::anyhow!("{}", e))?;
            info!(
                deployment = %cfg.deployment_or_default(),
                api_version = %cfg.api_version_or_default(),
                "chat boundary: Azure OpenAI"
            );
            Arc::new(adapter)
        }
        None => {
            warn!("no API key provided, using mock chat adapter (set ARTICLE_CREW_API_KEY for real runs)");
            Arc::new(MockChatAdapter::new())
        }
    };

    // --- Services ---
    let service = Arc::new(GenerationService::new(chat));

    let input_port: Arc<dyn InputPort> = Arc::new(TuiInputPort::new(
        service,
        pipeline_store,
        pipeline,
        PathBuf::from(cfg.transcripts_dir_or_default()),
        PathBuf::from(cfg.reports_dir_or_default()),
    ));

    // --- Run (main menu -> generate / save pipeline / quit) ---
    input_port.run().await.map_err(|e| anyhow::anyhow!("{}", e))?;

    Ok(())
}
