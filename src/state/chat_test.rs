use super::*;
use crate::net::types::{ChartData, Dataset};

fn sample_queries() -> Vec<SampleQuery> {
    vec![
        SampleQuery {
            query: "Show me price trends in Wakad".to_owned(),
        },
        SampleQuery {
            query: "Compare demand in different areas".to_owned(),
        },
    ]
}

fn analysis_result(summary: &str) -> AnalysisResult {
    AnalysisResult {
        summary: summary.to_owned(),
        chart_data: ChartData {
            labels: vec!["Jan".to_owned(), "Feb".to_owned()],
            datasets: vec![Dataset {
                label: "Price per sqft".to_owned(),
                data: vec![5400.0, 5600.0],
            }],
        },
        ..AnalysisResult::default()
    }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_state_is_empty_and_idle() {
    let state = ChatState::default();
    assert!(state.messages.is_empty());
    assert!(!state.loading);
    assert!(state.error.is_none());
    assert!(state.localities.is_empty());
    assert!(state.sample_queries.is_empty());
    assert!(state.result.is_none());
}

// =============================================================
// Startup
// =============================================================

#[test]
fn startup_success_stores_lists_and_appends_welcome() {
    let mut state = ChatState::default();
    state.apply_startup(Ok(sample_queries()), Ok(vec!["Wakad".to_owned()]), 1_000.0);

    assert_eq!(state.sample_queries.len(), 2);
    assert_eq!(state.localities, vec!["Wakad"]);
    assert!(state.error.is_none());
    assert_eq!(state.messages.len(), 1);
    assert_eq!(state.messages[0].text, WELCOME_TEXT);
    assert!(!state.messages[0].is_user);
}

#[test]
fn startup_success_with_empty_payloads_shows_no_banner() {
    let mut state = ChatState::default();
    state.apply_startup(Ok(vec![]), Ok(vec![]), 1_000.0);

    assert!(state.error.is_none());
    assert!(state.sample_queries.is_empty());
    assert!(state.localities.is_empty());
    assert_eq!(state.messages.len(), 1);
}

#[test]
fn startup_failure_sets_banner_empties_lists_and_keeps_welcome() {
    let mut state = ChatState::default();
    state.apply_startup(
        Err("network down".to_owned()),
        Err("network down".to_owned()),
        1_000.0,
    );

    assert_eq!(state.error.as_deref(), Some(STARTUP_ERROR_TEXT));
    assert!(state.sample_queries.is_empty());
    assert!(state.localities.is_empty());
    // Welcome is appended unconditionally, even on total fetch failure.
    assert_eq!(state.messages.len(), 1);
    assert_eq!(state.messages[0].text, WELCOME_TEXT);
}

#[test]
fn startup_partial_failure_discards_both_lists() {
    let mut state = ChatState::default();
    state.apply_startup(Ok(sample_queries()), Err("timeout".to_owned()), 1_000.0);

    assert_eq!(state.error.as_deref(), Some(STARTUP_ERROR_TEXT));
    assert!(state.sample_queries.is_empty());
    assert!(state.localities.is_empty());
    assert_eq!(state.messages.len(), 1);
}

// =============================================================
// Submission
// =============================================================

#[test]
fn whitespace_submission_is_a_no_op() {
    let mut state = ChatState::default();
    assert!(!state.begin_submission("", 1_000.0));
    assert!(!state.begin_submission("   \n\t", 1_000.0));
    assert!(state.messages.is_empty());
    assert!(!state.loading);
}

#[test]
fn submission_appends_exactly_one_user_message_immediately() {
    let mut state = ChatState::default();
    assert!(state.begin_submission("Analyze Wakad real estate", 1_000.0));

    assert_eq!(state.messages.len(), 1);
    assert!(state.messages[0].is_user);
    assert_eq!(state.messages[0].text, "Analyze Wakad real estate");
    assert_eq!(state.messages[0].timestamp, 1_000.0);
    assert!(state.loading);
}

#[test]
fn submission_clears_prior_error() {
    let mut state = ChatState::default();
    state.fail_export();
    assert!(state.error.is_some());

    assert!(state.begin_submission("try again", 1_000.0));
    assert!(state.error.is_none());
}

#[test]
fn message_ids_are_monotonic() {
    let mut state = ChatState::default();
    state.apply_startup(Ok(vec![]), Ok(vec![]), 0.0);
    state.begin_submission("first", 1.0);
    state.fail_analysis(2.0);
    state.begin_submission("second", 3.0);

    let ids: Vec<u64> = state.messages.iter().map(|m| m.id).collect();
    let mut sorted = ids.clone();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(ids, sorted);
}

// =============================================================
// Analyze resolution
// =============================================================

#[test]
fn finish_analysis_stores_result_and_appends_summary() {
    let mut state = ChatState::default();
    state.begin_submission("price trends", 1_000.0);
    state.finish_analysis(analysis_result("Prices rose 4%."), 2_000.0);

    assert!(!state.loading);
    assert!(state.error.is_none());
    assert_eq!(state.messages.len(), 2);
    assert!(!state.messages[1].is_user);
    assert_eq!(state.messages[1].text, "Prices rose 4%.");
    assert_eq!(
        state.result.as_ref().map(|r| r.summary.as_str()),
        Some("Prices rose 4%.")
    );
}

#[test]
fn new_result_replaces_previous_result_wholesale() {
    let mut state = ChatState::default();
    state.begin_submission("first", 1_000.0);
    state.finish_analysis(analysis_result("First."), 2_000.0);
    state.begin_submission("second", 3_000.0);
    state.finish_analysis(analysis_result("Second."), 4_000.0);

    assert_eq!(
        state.result.as_ref().map(|r| r.summary.as_str()),
        Some("Second.")
    );
}

#[test]
fn fail_analysis_keeps_optimistic_message_and_appends_apology() {
    let mut state = ChatState::default();
    state.begin_submission("bad query", 1_000.0);
    state.fail_analysis(2_000.0);

    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some(ANALYZE_ERROR_TEXT));
    assert_eq!(state.messages.len(), 2);
    // No rollback of the optimistic user entry.
    assert!(state.messages[0].is_user);
    assert_eq!(state.messages[0].text, "bad query");
    assert!(!state.messages[1].is_user);
    assert_eq!(state.messages[1].text, ANALYZE_APOLOGY_TEXT);
    assert!(state.result.is_none());
}

// =============================================================
// Export failure
// =============================================================

#[test]
fn fail_export_sets_banner_without_appending_a_message() {
    let mut state = ChatState::default();
    state.begin_submission("query", 1_000.0);
    state.finish_analysis(analysis_result("Done."), 2_000.0);
    let message_count = state.messages.len();

    state.fail_export();

    assert_eq!(state.error.as_deref(), Some(EXPORT_ERROR_TEXT));
    assert_eq!(state.messages.len(), message_count);
}

// =============================================================
// Full conversation flow
// =============================================================

#[test]
fn conversation_flow_orders_welcome_user_and_bot_messages() {
    let mut state = ChatState::default();
    state.apply_startup(Ok(sample_queries()), Ok(vec![]), 0.0);
    state.begin_submission("Show me price trends in Wakad", 1.0);
    state.finish_analysis(analysis_result("Trends look stable."), 2.0);

    let texts: Vec<&str> = state.messages.iter().map(|m| m.text.as_str()).collect();
    assert_eq!(
        texts,
        vec![
            WELCOME_TEXT,
            "Show me price trends in Wakad",
            "Trends look stable.",
        ]
    );
    let users: Vec<bool> = state.messages.iter().map(|m| m.is_user).collect();
    assert_eq!(users, vec![false, true, false]);
}
