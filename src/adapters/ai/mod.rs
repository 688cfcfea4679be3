//! AI adapter module. Implements ChatPort for LLM integration.
//!
//! Provides an Azure OpenAI adapter and a mock adapter for testing.

pub mod azure_openai;
pub mod mock_adapter;

pub use azure_openai::AzureOpenAiAdapter;
pub use mock_adapter::MockChatAdapter;
