//! Plain-text rendering for command output.

use crate::catalog::ResultTable;
use serde_json::Value;

/// Display form of a JSON cell: strings unquoted, nulls blank.
pub fn format_cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Number(n) => match (n.as_i64(), n.as_f64()) {
            (Some(i), _) => i.to_string(),
            (None, Some(f)) if f.fract() == 0.0 => format!("{:.1}", f),
            (None, Some(f)) => format!("{}", (f * 100.0).round() / 100.0),
            _ => n.to_string(),
        },
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}

/// Left-aligned columns separated by two spaces, with a dashed rule under the header.
pub fn render_table(columns: &[String], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = columns.iter().map(|c| c.chars().count()).collect();
    for row in rows {
        for (idx, cell) in row.iter().enumerate() {
            if let Some(w) = widths.get_mut(idx) {
                *w = (*w).max(cell.chars().count());
            }
        }
    }

    let mut out = String::new();
    push_line(&mut out, columns, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_line(&mut out, &rule, &widths);
    for row in rows {
        push_line(&mut out, row, &widths);
    }
    out
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize]) {
    let padded: Vec<String> = widths
        .iter()
        .enumerate()
        .map(|(idx, w)| {
            let cell = cells.get(idx).map(String::as_str).unwrap_or("");
            format!("{:<width$}", cell, width = *w)
        })
        .collect();
    out.push_str(padded.join("  ").trim_end());
    out.push('\n');
}

pub fn render_result(table: &ResultTable) -> String {
    let rows: Vec<Vec<String>> = table
        .rows
        .iter()
        .map(|row| row.iter().map(format_cell).collect())
        .collect();
    render_table(&table.columns, &rows)
}

/// Render an array of JSON objects, using the keys of the first object as columns.
pub fn render_objects(items: &[Value]) -> String {
    let columns: Vec<String> = match items.first().and_then(Value::as_object) {
        Some(obj) => obj.keys().cloned().collect(),
        None => return String::new(),
    };
    let rows: Vec<Vec<String>> = items
        .iter()
        .map(|item| {
            columns
                .iter()
                .map(|c| item.get(c).map(format_cell).unwrap_or_default())
                .collect()
        })
        .collect();
    render_table(&columns, &rows)
}
