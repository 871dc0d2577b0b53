//! Read-only analytics over the cricket store
//!
//! Each query is a parameterless statement with a stable id, a display label
//! and the column names it produces. Results come back as a [`ResultTable`]
//! of JSON cells so they can be rendered as text or serialized as-is.

mod definitions;

#[cfg(test)]
mod tests;

pub use definitions::QUERIES;

use crate::error::{CricError, Result};
use crate::storage::CricketDatabase;
use rusqlite::types::ValueRef;
use serde::Serialize;
use serde_json::{Number, Value};

/// One entry of the analytics catalog.
#[derive(Debug, Clone, Copy)]
pub struct QueryDef {
    pub id: u8,
    pub label: &'static str,
    pub sql: &'static str,
    pub columns: &'static [&'static str],
}

impl QueryDef {
    /// `Q5: Calculate how many matches each team has won`
    pub fn title(&self) -> String {
        format!("Q{}: {}", self.id, self.label)
    }
}

/// Tabular query output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

impl ResultTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of the named column, if present.
    fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Every value of one column, in row order.
    pub fn column(&self, name: &str) -> Vec<&Value> {
        match self.column_index(name) {
            Some(idx) => self.rows.iter().filter_map(|row| row.get(idx)).collect(),
            None => Vec::new(),
        }
    }
}

/// Look up a query by id: `5`, `Q5` and `q5` all name the same query.
pub fn find_query(query: &str) -> Result<&'static QueryDef> {
    let trimmed = query.trim();
    let digits = trimmed
        .strip_prefix('Q')
        .or_else(|| trimmed.strip_prefix('q'))
        .unwrap_or(trimmed);

    digits
        .parse::<u8>()
        .ok()
        .and_then(|id| QUERIES.iter().find(|q| q.id == id))
        .ok_or_else(|| CricError::UnknownQuery {
            query: query.to_string(),
        })
}

/// Execute a catalog query against the store.
pub fn run_query(db: &CricketDatabase, def: &QueryDef) -> Result<ResultTable> {
    let mut stmt = db.conn.prepare(def.sql)?;
    if !stmt.readonly() {
        return Err(CricError::WriteQuery { query: def.title() });
    }
    let columns: Vec<String> = stmt.column_names().iter().map(|c| c.to_string()).collect();
    let width = columns.len();

    let mut rows = Vec::new();
    let mut cursor = stmt.query([])?;
    while let Some(row) = cursor.next()? {
        let mut cells = Vec::with_capacity(width);
        for idx in 0..width {
            cells.push(cell_to_json(row.get_ref(idx)?));
        }
        rows.push(cells);
    }

    log::debug!("{} returned {} rows", def.title(), rows.len());
    Ok(ResultTable { columns, rows })
}

fn cell_to_json(value: ValueRef<'_>) -> Value {
    match value {
        ValueRef::Null => Value::Null,
        ValueRef::Integer(i) => Value::from(i),
        ValueRef::Real(f) => Number::from_f64(f).map(Value::Number).unwrap_or(Value::Null),
        ValueRef::Text(t) => Value::String(String::from_utf8_lossy(t).into_owned()),
        ValueRef::Blob(b) => Value::String(format!("<{} bytes>", b.len())),
    }
}
