//! Tabular analysis data with derived columns and download triggers.

#[cfg(test)]
#[path = "data_table_test.rs"]
mod data_table_test;

use leptos::prelude::*;
use serde_json::Value;

use crate::net::types::Record;
use crate::util::format::{format_inr, format_number};

/// Bookkeeping keys never shown to the user.
const HIDDEN_COLUMNS: [&str; 4] = ["id", "_id", "created_at", "updated_at"];

/// Union of keys across all records, minus the hidden columns. A key is
/// included as soon as any record carries it.
fn display_columns(rows: &[Record]) -> Vec<String> {
    let mut columns = Vec::new();
    for row in rows {
        for key in row.keys() {
            if HIDDEN_COLUMNS.contains(&key.as_str()) {
                continue;
            }
            if !columns.contains(key) {
                columns.push(key.clone());
            }
        }
    }
    columns
}

/// Title-case a snake_case key: `avg_price` -> `Avg Price`.
fn column_title(key: &str) -> String {
    key.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().collect::<String>() + chars.as_str()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render one cell. Numbers under a price key become currency; other
/// numbers are grouped, with two decimals when fractional; null renders
/// as `-`; strings pass through.
fn format_cell(key: &str, value: &Value) -> String {
    match value {
        Value::Null => "-".to_owned(),
        Value::Number(n) => {
            let v = n.as_f64().unwrap_or_default();
            if key.to_lowercase().contains("price") {
                format_inr(v)
            } else {
                format_number(v)
            }
        }
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Data table with CSV/XLSX download buttons, or an informational
/// placeholder when there are no records.
#[component]
pub fn DataTable(data: Vec<Record>, title: String, on_download: Callback<String>) -> impl IntoView {
    if data.is_empty() {
        return view! {
            <div class="alert alert--info">"No data available for the selected filters."</div>
        }
        .into_any();
    }

    let columns = display_columns(&data);

    let header_cells = columns
        .iter()
        .map(|key| view! { <th>{column_title(key)}</th> })
        .collect::<Vec<_>>();

    let body_rows = data
        .iter()
        .map(|row| {
            let cells = columns
                .iter()
                .map(|key| {
                    let text = row
                        .get(key)
                        .map_or_else(|| "-".to_owned(), |value| format_cell(key, value));
                    view! { <td>{text}</td> }
                })
                .collect::<Vec<_>>();
            view! { <tr>{cells}</tr> }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="data-table">
            <div class="data-table__header">
                <h5>{title}</h5>
                <div class="data-table__downloads">
                    <button
                        class="btn btn--small btn--outline"
                        on:click=move |_| on_download.run("csv".to_owned())
                    >
                        "CSV"
                    </button>
                    <button
                        class="btn btn--small btn--outline"
                        on:click=move |_| on_download.run("excel".to_owned())
                    >
                        "XLSX"
                    </button>
                </div>
            </div>
            <table class="data-table__table">
                <thead>
                    <tr>{header_cells}</tr>
                </thead>
                <tbody>{body_rows}</tbody>
            </table>
        </div>
    }
    .into_any()
}
