//! Application configuration. API credentials, endpoints, paths.

use serde::Deserialize;

use crate::adapters::persistence::PIPELINE_CONFIG_FILE;

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Azure OpenAI API key. Read from ARTICLE_CREW_API_KEY.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Azure OpenAI resource endpoint. Read from ARTICLE_CREW_API_BASE.
    #[serde(default)]
    pub api_base: Option<String>,

    /// Azure OpenAI API version. Read from ARTICLE_CREW_API_VERSION.
    #[serde(default)]
    pub api_version: Option<String>,

    /// Deployment (model) name. Read from ARTICLE_CREW_DEPLOYMENT.
    #[serde(default)]
    pub deployment: Option<String>,

    /// Directory scanned for transcript files. Read from ARTICLE_CREW_TRANSCRIPTS_DIR.
    #[serde(default)]
    pub transcripts_dir: Option<String>,

    /// Directory reports are exported into. Read from ARTICLE_CREW_REPORTS_DIR.
    #[serde(default)]
    pub reports_dir: Option<String>,

    /// Path of the pipeline configuration file. Read from ARTICLE_CREW_PIPELINE_CONFIG.
    #[serde(default)]
    pub pipeline_config: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::with_prefix("ARTICLE_CREW"));
        if let Ok(path) = std::env::var("ARTICLE_CREW_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        c.build()?.try_deserialize()
    }

    /// Session credential, if configured. Never logged, never persisted.
    pub fn api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| std::env::var("ARTICLE_CREW_API_KEY").ok())
            .filter(|k| !k.trim().is_empty())
    }

    /// Resource endpoint. Defaults to the hosted deployment this tool was
    /// built against.
    pub fn api_base_or_default(&self) -> String {
        self.api_base
            .clone()
            .unwrap_or_else(|| "https://rstapestryopenai2.openai.azure.com/".to_string())
    }

    /// API version string. Defaults to "2024-02-15-preview".
    pub fn api_version_or_default(&self) -> String {
        self.api_version
            .clone()
            .unwrap_or_else(|| "2024-02-15-preview".to_string())
    }

    /// Deployment name. Defaults to "gpt-4".
    pub fn deployment_or_default(&self) -> String {
        self.deployment.clone().unwrap_or_else(|| "gpt-4".to_string())
    }

    /// Returns the transcripts directory. Defaults to "./transcripts".
    pub fn transcripts_dir_or_default(&self) -> String {
        self.transcripts_dir
            .clone()
            .unwrap_or_else(|| "./transcripts".to_string())
    }

    /// Returns the reports directory. Defaults to "./reports".
    pub fn reports_dir_or_default(&self) -> String {
        self.reports_dir
            .clone()
            .unwrap_or_else(|| "./reports".to_string())
    }

    /// Returns the pipeline config path. Defaults to `agent_task_config.json`
    /// in the working directory.
    pub fn pipeline_config_or_default(&self) -> String {
        self.pipeline_config
            .clone()
            .unwrap_or_else(|| PIPELINE_CONFIG_FILE.to_string())
    }

    /// Returns true if the remote chat API is configured (key present).
    pub fn is_api_configured(&self) -> bool {
        self.api_key().is_some()
    }
}
