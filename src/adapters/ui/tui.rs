//! Implements InputPort. Inquire-based interactive prompts.
//!
//! Drives the session state machine: pick transcripts, run the pipeline,
//! export the report. Every failed run returns to the main menu with no
//! partial state.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use indicatif::{ProgressBar, ProgressStyle};
use inquire::{Confirm, CustomType, MultiSelect, Select, Text};
use tracing::{error, warn};

use crate::adapters::export::export_report;
use crate::adapters::extract;
use crate::adapters::persistence::{PipelineConfig, PipelineStore};
use crate::domain::{DomainError, Transcript};
use crate::ports::InputPort;
use crate::usecases::GenerationService;

const MENU_GENERATE: &str = "Generate research article";
const MENU_SAVE_PIPELINE: &str = "Save pipeline configuration";
const MENU_QUIT: &str = "Quit";

/// TUI adapter. Inquire prompts mapped onto application use cases.
pub struct TuiInputPort {
    service: Arc<GenerationService>,
    pipeline_store: Arc<PipelineStore>,
    pipeline: PipelineConfig,
    transcripts_dir: PathBuf,
    reports_dir: PathBuf,
}

impl TuiInputPort {
    pub fn new(
        service: Arc<GenerationService>,
        pipeline_store: Arc<PipelineStore>,
        pipeline: PipelineConfig,
        transcripts_dir: PathBuf,
        reports_dir: PathBuf,
    ) -> Self {
        Self {
            service,
            pipeline_store,
            pipeline,
            transcripts_dir,
            reports_dir,
        }
    }

    /// One generation attempt: select files, extract, run, offer export.
    async fn run_generation(&self) -> Result<(), DomainError> {
        let dir = Text::new("Transcripts directory:")
            .with_default(&self.transcripts_dir.to_string_lossy())
            .prompt()
            .map_err(|e| DomainError::Input(e.to_string()))?;
        let dir = PathBuf::from(dir);

        let files = list_supported_files(&dir)?;
        if files.is_empty() {
            println!("No .txt or .docx transcript files found in {}.", dir.display());
            return Ok(());
        }

        let options: Vec<String> = files
            .iter()
            .filter_map(|p| p.file_name().and_then(|n| n.to_str()).map(String::from))
            .collect();
        let selected = MultiSelect::new("Select transcript files", options)
            .prompt()
            .map_err(|e| DomainError::Input(e.to_string()))?;
        if selected.is_empty() {
            // Precondition: do not touch the pipeline without input files.
            println!("Please select at least one transcript file.");
            return Ok(());
        }

        let temperature = CustomType::<f32>::new(
            "Temperature for the output (0 = deterministic, 1 = creative):",
        )
        .with_default(self.pipeline.temperature)
        .prompt()
        .map_err(|e| DomainError::Input(e.to_string()))?;
        if !(0.0..=1.0).contains(&temperature) {
            println!("Temperature must be between 0.0 and 1.0.");
            return Ok(());
        }

        let mut transcripts: Vec<Transcript> = Vec::new();
        for name in &selected {
            let path = dir.join(name);
            match extract::extract_file(&path).await {
                Ok(t) => transcripts.push(t),
                Err(e) => {
                    // Unsupported or unreadable files are skipped, visibly.
                    warn!(file = %path.display(), error = %e, "skipping transcript");
                    println!("Skipping {}: {}", name, e);
                }
            }
        }
        if transcripts.is_empty() {
            println!("None of the selected files could be extracted.");
            return Ok(());
        }

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template("{spinner} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.set_message("Generating research article... this may take a few minutes");
        spinner.enable_steady_tick(Duration::from_millis(120));

        let outcome = self
            .service
            .generate(&transcripts, &self.pipeline.crew, temperature)
            .await;

        spinner.finish_and_clear();

        match outcome {
            Ok(result) => {
                println!("\nResearch article generated successfully!\n");
                println!("{}\n", result.article);

                let export = Confirm::new("Save the report as research_article.docx?")
                    .with_default(true)
                    .prompt()
                    .map_err(|e| DomainError::Input(e.to_string()))?;
                if export {
                    let path = export_report(&result, &self.reports_dir).await?;
                    println!("Report saved to {}", path.display());
                }
            }
            Err(e) => {
                // Run abandoned: no partial result, no export offer.
                error!(error = %e, "generation run failed");
                println!("Error: {}", e);
            }
        }

        Ok(())
    }
}

/// Files in `dir` the extractor understands, sorted by name.
fn list_supported_files(dir: &Path) -> Result<Vec<PathBuf>, DomainError> {
    let entries = std::fs::read_dir(dir)
        .map_err(|e| DomainError::Input(format!("read {}: {}", dir.display(), e)))?;

    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.is_file() && extract::is_supported(p))
        .collect();
    files.sort();
    Ok(files)
}

#[async_trait]
impl InputPort for TuiInputPort {
    async fn run(&self) -> Result<(), DomainError> {
        loop {
            let choice = Select::new(
                "What would you like to do?",
                vec![MENU_GENERATE, MENU_SAVE_PIPELINE, MENU_QUIT],
            )
            .prompt()
            .map_err(|e| DomainError::Input(e.to_string()))?;

            match choice {
                MENU_GENERATE => {
                    if let Err(e) = self.run_generation().await {
                        error!(error = %e, "generation flow failed");
                        println!("Error: {}", e);
                    }
                }
                MENU_SAVE_PIPELINE => {
                    if let Err(e) = self.pipeline_store.save(&self.pipeline).await {
                        error!(error = %e, "saving pipeline configuration failed");
                        println!("Error: {}", e);
                    } else {
                        println!("Pipeline configuration saved.");
                    }
                }
                _ => break,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_filters_to_supported_extensions() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("b.txt"), "b").unwrap();
        std::fs::write(dir.path().join("a.docx"), "a").unwrap();
        std::fs::write(dir.path().join("notes.pdf"), "x").unwrap();
        std::fs::create_dir(dir.path().join("sub.txt")).unwrap();

        let files = list_supported_files(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, vec!["a.docx", "b.txt"]);
    }

    #[test]
    fn listing_missing_directory_is_an_input_error() {
        let err = list_supported_files(Path::new("/definitely/not/here")).unwrap_err();
        assert!(matches!(err, DomainError::Input(_)));
    }
}
