// Verification queries against the loaded table.
//
// Query execution returns structured data; formatting for stdout lives
// in the Display impl so callers can assert on results without
// capturing output streams.

use std::fmt;

use rusqlite::types::Value;
use rusqlite::Connection;

use crate::error::EtlError;

/// One executed query: its statement, column names, and rows.
#[derive(Debug, Clone)]
pub struct QueryOutput {
    pub statement: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

/// Execute a single statement and collect the full result set.
pub fn run_query(conn: &Connection, statement: &str) -> Result<QueryOutput, EtlError> {
    let persist = |e: rusqlite::Error| EtlError::persist("database", e);

    let mut stmt = conn.prepare(statement).map_err(persist)?;
    let columns: Vec<String> = stmt.column_names().iter().map(|c| c.to_string()).collect();
    let column_count = columns.len();

    let rows = stmt
        .query_map([], |row| {
            (0..column_count)
                .map(|i| row.get::<_, Value>(i))
                .collect::<Result<Vec<Value>, _>>()
        })
        .map_err(persist)?
        .collect::<Result<Vec<_>, _>>()
        .map_err(persist)?;

    Ok(QueryOutput {
        statement: statement.to_string(),
        columns,
        rows,
    })
}

/// The three fixed checks run after every load, in this order:
/// full table scan, GBP column average, first-5 Rank/Bank_Name
/// projection.
pub fn verification_queries(
    conn: &Connection,
    table_name: &str,
) -> Result<Vec<QueryOutput>, EtlError> {
    let statements = [
        format!("SELECT * FROM {table_name}"),
        format!("SELECT AVG(MC_GBP_Billion) FROM {table_name}"),
        format!("SELECT Rank, Bank_Name FROM {table_name} LIMIT 5"),
    ];

    statements
        .iter()
        .map(|statement| run_query(conn, statement))
        .collect()
}

fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "NULL".to_string(),
        Value::Integer(i) => i.to_string(),
        Value::Real(r) => r.to_string(),
        Value::Text(t) => t.clone(),
        Value::Blob(b) => format!("<{} byte blob>", b.len()),
    }
}

impl fmt::Display for QueryOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.statement)?;
        writeln!(f, "{}", self.columns.join(" | "))?;
        for row in &self.rows {
            let cells: Vec<String> = row.iter().map(format_value).collect();
            writeln!(f, "{}", cells.join(" | "))?;
        }
        Ok(())
    }
}
