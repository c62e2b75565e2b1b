use log::{info, warn};

use crate::error::{LedgerError, Result};
use crate::llm::client::GeminiClient;
use crate::llm::context::{snapshot_files, FileSnapshot};
use crate::llm::prompts::{
    chat_system_instruction, summary_prompt, EMPTY_PORTFOLIO_SUMMARY, SUMMARY_FALLBACK,
};
use crate::schema::{PropertyFile, User, UserRole};

/// Portfolio summaries and ledger chat backed by a text-generation model.
///
/// Summaries fail open: any service error is logged and replaced by a static message.
pub struct RegistryAssistant {
    client: GeminiClient,
}

impl RegistryAssistant {
    pub fn new(client: GeminiClient) -> Self {
        Self { client }
    }

    pub async fn summarize(&self, user: &User, files: &[PropertyFile]) -> String {
        if files.is_empty() {
            return EMPTY_PORTFOLIO_SUMMARY.to_string();
        }

        match self.try_summarize(user, files).await {
            Ok(summary) => summary,
            Err(e) => {
                warn!("AI summary failed for {}: {}", user.id, e);
                SUMMARY_FALLBACK.to_string()
            }
        }
    }

    async fn try_summarize(&self, user: &User, files: &[PropertyFile]) -> Result<String> {
        let context = serde_json::to_string(&snapshot_files(files))?;
        let prompt = summary_prompt(&user.name, user.role, &context);

        info!("Requesting portfolio summary over {} files", files.len());
        self.client.generate_text(None, &prompt).await
    }

    /// Answers a free-text question about `files` with role-specific instructions.
    pub async fn chat(&self, message: &str, role: UserRole, files: &[PropertyFile]) -> Result<String> {
        let message = message.trim();
        if message.is_empty() {
            return Err(LedgerError::EmptyPrompt);
        }

        let schema = FileSnapshot::json_schema()?;
        let context = serde_json::to_string(&snapshot_files(files))?;
        let system = chat_system_instruction(role, &schema, &context);

        self.client
            .generate_text(Some(&system), &format!("User message: {}", message))
            .await
    }

    pub async fn chat_or_fallback(&self, message: &str, role: UserRole, files: &[PropertyFile]) -> String {
        match self.chat(message, role, files).await {
            Ok(reply) => reply,
            Err(e) => {
                warn!("AI chat failed: {}", e);
                SUMMARY_FALLBACK.to_string()
            }
        }
    }
}
