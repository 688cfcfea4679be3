//! Agent pipeline definition: a fixed roster of role-bound agents and the
//! ordered task list they execute.
//!
//! The roster is configuration, not runtime state. Task order is significant
//! and is the only sequencing guarantee in the system.

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Role-scoped agent descriptor. Model binding and temperature are shared
/// across all agents, so they live with the chat adapter and the run
/// parameters rather than here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentSpec {
    pub role: String,
    pub goal: String,
    pub backstory: String,
    #[serde(default)]
    pub allow_delegation: bool,
    #[serde(default = "default_verbose")]
    pub verbose: bool,
}

fn default_verbose() -> bool {
    true
}

impl AgentSpec {
    pub fn new(
        role: impl Into<String>,
        goal: impl Into<String>,
        backstory: impl Into<String>,
    ) -> Self {
        Self {
            role: role.into(),
            goal: goal.into(),
            backstory: backstory.into(),
            allow_delegation: false,
            verbose: true,
        }
    }
}

/// One instruction bound to exactly one agent (by role).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskSpec {
    pub description: String,
    /// Role of the agent this task is bound to. Must match an entry in
    /// [`CrewDefinition::agents`].
    pub agent_role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_output: Option<String>,
    /// Declared input: feed the combined transcript corpus to this task.
    #[serde(default)]
    pub include_transcripts: bool,
}

impl TaskSpec {
    pub fn new(description: impl Into<String>, agent_role: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            agent_role: agent_role.into(),
            expected_output: None,
            include_transcripts: false,
        }
    }

    pub fn with_transcripts(mut self) -> Self {
        self.include_transcripts = true;
        self
    }

    pub fn expecting(mut self, expected_output: impl Into<String>) -> Self {
        self.expected_output = Some(expected_output.into());
        self
    }
}

/// The Content Planner. First stage: outline the article from the corpus.
fn planner_agent() -> AgentSpec {
    AgentSpec::new(
        "Content Planner",
        "Plan content based on transcripts.",
        "Plan a structured research article.",
    )
}

/// The Content Writer. Second stage: draft from the plan.
fn writer_agent() -> AgentSpec {
    AgentSpec::new(
        "Content Writer",
        "Write a cohesive article based on the plan.",
        "Write a polished research article.",
    )
}

/// The Editor. Final stage: refine the draft for publication.
fn editor_agent() -> AgentSpec {
    AgentSpec::new(
        "Editor",
        "Edit and refine the research article.",
        "Finalize the research article for publication.",
    )
}

/// The full pipeline: agent roster plus hand-ordered task list. Identical for
/// every run unless overridden from the pipeline config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrewDefinition {
    pub agents: Vec<AgentSpec>,
    pub tasks: Vec<TaskSpec>,
}

impl Default for CrewDefinition {
    /// Fixed three-stage roster: plan -> write -> edit.
    fn default() -> Self {
        Self {
            agents: vec![planner_agent(), writer_agent(), editor_agent()],
            tasks: vec![
                TaskSpec::new(
                    "Plan content for the given transcripts.",
                    "Content Planner",
                )
                .with_transcripts()
                .expecting("A structured content plan covering the key themes of the transcripts."),
                TaskSpec::new(
                    "Write a research article based on the content plan.",
                    "Content Writer",
                )
                .expecting("A cohesive research article draft."),
                TaskSpec::new("Edit and finalize the research article.", "Editor")
                    .expecting("The final publication-ready research article."),
            ],
        }
    }
}

impl CrewDefinition {
    /// Resolve the agent a task is bound to.
    pub fn agent_for(&self, task: &TaskSpec) -> Option<&AgentSpec> {
        self.agents.iter().find(|a| a.role == task.agent_role)
    }

    /// Reject empty task lists and tasks bound to unknown roles.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.tasks.is_empty() {
            return Err(DomainError::Pipeline("task list is empty".into()));
        }
        for task in &self.tasks {
            if self.agent_for(task).is_none() {
                return Err(DomainError::Pipeline(format!(
                    "task '{}' references unknown agent role '{}'",
                    task.description, task.agent_role
                )));
            }
        }
        Ok(())
    }
}
