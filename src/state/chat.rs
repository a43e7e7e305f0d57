//! Conversation state and the transitions driven by the home page.
//!
//! DESIGN
//! ======
//! Every user-visible rule of the request/response flow lives here as a
//! pure method: optimistic message append, loading/error flags, the
//! startup soft-fail policy, and the no-rollback rule on analyze failure.
//! The page controller only wires network results into these methods.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::net::types::{AnalysisResult, SampleQuery};

/// Fixed welcome message appended after the startup fetch completes.
pub const WELCOME_TEXT: &str = "Welcome to RealEstate Analyzer! You can ask me to analyze \
     real estate data. Try asking something like \"Show me price trends in Wakad\" or \
     \"Compare demand in different areas\".";

/// Banner shown when the startup fetch of sample queries/localities fails.
pub const STARTUP_ERROR_TEXT: &str = "Failed to load application data. Please try again later.";

/// Banner shown when an analyze call fails.
pub const ANALYZE_ERROR_TEXT: &str =
    "Sorry, there was an error processing your request. Please try again.";

/// Fallback bot reply appended when an analyze call fails.
pub const ANALYZE_APOLOGY_TEXT: &str = "I'm sorry, I couldn't process your request. \
     Please try rephrasing your question or try again later.";

/// Banner shown when an export call fails.
pub const EXPORT_ERROR_TEXT: &str = "Failed to export data. Please try again later.";

/// A single chat message. Immutable once appended; lives for the session.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ChatMessage {
    /// Monotonic per-session identifier.
    pub id: u64,
    pub text: String,
    pub is_user: bool,
    /// Epoch milliseconds.
    pub timestamp: f64,
}

/// State for the chat page: conversation, startup data, and the current
/// analysis result.
///
/// Owned exclusively by the home page controller; mutated only through the
/// methods below.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    pub loading: bool,
    pub error: Option<String>,
    pub localities: Vec<String>,
    pub sample_queries: Vec<SampleQuery>,
    pub result: Option<AnalysisResult>,
    next_id: u64,
}

impl ChatState {
    fn push_message(&mut self, text: impl Into<String>, is_user: bool, now_ms: f64) {
        let message = ChatMessage {
            id: self.next_id,
            text: text.into(),
            is_user,
            timestamp: now_ms,
        };
        self.next_id += 1;
        self.messages.push(message);
    }

    /// Apply the outcome of the concurrent startup fetch.
    ///
    /// If either call failed, the generic banner is set and both lists stay
    /// empty (the soft-fail policy: individual errors never surface beyond
    /// this). The welcome message is appended unconditionally — it shows
    /// even when the whole fetch failed.
    pub fn apply_startup(
        &mut self,
        sample_queries: Result<Vec<SampleQuery>, String>,
        localities: Result<Vec<String>, String>,
        now_ms: f64,
    ) {
        match (sample_queries, localities) {
            (Ok(queries), Ok(locs)) => {
                self.sample_queries = queries;
                self.localities = locs;
            }
            _ => {
                self.error = Some(STARTUP_ERROR_TEXT.to_owned());
            }
        }
        self.push_message(WELCOME_TEXT, false, now_ms);
    }

    /// Begin a message submission.
    ///
    /// Empty or whitespace-only input is a no-op and returns `false` — no
    /// message is appended and the caller must not issue a network call.
    /// Otherwise the user message is appended optimistically (before the
    /// analyze call resolves), the loading flag is set, and any prior error
    /// is cleared.
    pub fn begin_submission(&mut self, text: &str, now_ms: f64) -> bool {
        if text.trim().is_empty() {
            return false;
        }
        self.push_message(text, true, now_ms);
        self.loading = true;
        self.error = None;
        true
    }

    /// Record a successful analyze call: store the result wholesale and
    /// append its summary as the bot reply.
    pub fn finish_analysis(&mut self, result: AnalysisResult, now_ms: f64) {
        self.push_message(result.summary.clone(), false, now_ms);
        self.result = Some(result);
        self.loading = false;
    }

    /// Record a failed analyze call: visible banner plus the fixed apology
    /// reply. The optimistic user message is not rolled back.
    pub fn fail_analysis(&mut self, now_ms: f64) {
        self.error = Some(ANALYZE_ERROR_TEXT.to_owned());
        self.push_message(ANALYZE_APOLOGY_TEXT, false, now_ms);
        self.loading = false;
    }

    /// Record a failed export call: visible banner only, no chat message.
    pub fn fail_export(&mut self) {
        self.error = Some(EXPORT_ERROR_TEXT.to_owned());
    }
}
