//! Generation service. Runs the multi-stage article pipeline.
//!
//! Flow: precondition checks -> aggregate transcripts -> execute the crew's
//! tasks strictly in order, one chat completion per task, feeding each
//! task's reply into the next -> final reply becomes the article.
//!
//! No parallelism, no retry, no partial-result recovery: the first failing
//! stage aborts the run and the error propagates to the caller.

use std::sync::Arc;

use tracing::info;

use crate::domain::{
    AgentSpec, CombinedContent, CrewDefinition, DomainError, GenerationResult, TaskSpec, Transcript,
};
use crate::ports::ChatPort;

/// Service executing the agent pipeline over a chat port.
pub struct GenerationService {
    chat: Arc<dyn ChatPort>,
}

impl GenerationService {
    pub fn new(chat: Arc<dyn ChatPort>) -> Self {
        Self { chat }
    }

    /// Run one generation request to completion.
    ///
    /// Preconditions (checked before the chat boundary is touched):
    /// at least one transcript, non-empty combined content, and a valid
    /// crew definition.
    pub async fn generate(
        &self,
        transcripts: &[Transcript],
        crew: &CrewDefinition,
        temperature: f32,
    ) -> Result<GenerationResult, DomainError> {
        if transcripts.is_empty() {
            return Err(DomainError::NoTranscripts);
        }

        let combined = CombinedContent::combine(transcripts);
        if combined.is_empty() {
            return Err(DomainError::EmptyContent);
        }

        crew.validate()?;

        info!(
            files = transcripts.len(),
            combined_len = combined.as_str().len(),
            stages = crew.tasks.len(),
            "starting generation run"
        );

        let mut previous_output: Option<String> = None;

        for (i, task) in crew.tasks.iter().enumerate() {
            let agent = crew.agent_for(task).ok_or_else(|| {
                DomainError::Pipeline(format!("unknown agent role '{}'", task.agent_role))
            })?;

            let system = system_prompt(agent);
            let user = task_prompt(task, &combined, previous_output.as_deref());

            if agent.verbose {
                info!(stage = i + 1, role = %agent.role, "running task: {}", task.description);
            }

            let output = self.chat.complete(&system, &user, temperature).await?;

            info!(
                stage = i + 1,
                role = %agent.role,
                reply_len = output.len(),
                "stage complete"
            );

            previous_output = Some(output);
        }

        // validate() guarantees at least one task ran.
        let article = previous_output
            .ok_or_else(|| DomainError::Pipeline("pipeline produced no output".into()))?;

        info!(article_len = article.len(), "generation run complete");

        Ok(GenerationResult {
            article,
            generated_at: chrono::Utc::now().timestamp(),
        })
    }
}

/// System prompt from the agent's role descriptor.
fn system_prompt(agent: &AgentSpec) -> String {
    let mut prompt = format!(
        "You are {}. {}\nYour goal: {}",
        agent.role, agent.backstory, agent.goal
    );
    if !agent.allow_delegation {
        prompt.push_str("\nComplete the work yourself; do not delegate.");
    }
    prompt
}

/// User prompt: the task description, its expected output, and the data it
/// declared as inputs (transcript corpus and/or the previous stage's reply).
fn task_prompt(task: &TaskSpec, combined: &CombinedContent, previous: Option<&str>) -> String {
    let mut prompt = task.description.clone();

    if let Some(expected) = &task.expected_output {
        prompt.push_str("\n\nExpected output: ");
        prompt.push_str(expected);
    }

    if task.include_transcripts {
        prompt.push_str("\n\nTranscripts:\n");
        prompt.push_str(combined.as_str());
    }

    if let Some(prev) = previous {
        prompt.push_str("\n\nContext from the previous stage:\n");
        prompt.push_str(prev);
    }

    prompt
}
