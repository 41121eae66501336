//! Dynamic tabular query execution.
//!
//! The analytics catalog and the ad-hoc console both run SQL whose shape
//! is not known at compile time. [`fetch_table`] executes a statement
//! verbatim and converts the result set into a [`QueryTable`] of JSON
//! values using SQLite's dynamic type information.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::sqlite::{SqlitePool, SqliteRow};
use sqlx::{Column, Row, TypeInfo, ValueRef};

use foodshare_core::error::{AppError, ErrorKind};
use foodshare_core::result::AppResult;

/// A result set rendered as-is: column names plus rows of JSON values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryTable {
    /// Column names in select order. Empty when the result has no rows.
    pub columns: Vec<String>,
    /// Row values, one `Vec` per row, in column order.
    pub rows: Vec<Vec<Value>>,
}

impl QueryTable {
    /// Number of rows in the result.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Whether the result holds no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Execute `sql` verbatim and collect the full result set.
///
/// Driver errors (malformed SQL, missing tables, constraint failures)
/// are surfaced in the error message unchanged.
pub async fn fetch_table(pool: &SqlitePool, sql: &str) -> AppResult<QueryTable> {
    let rows = sqlx::query(sql)
        .fetch_all(pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, format!("Query failed: {e}"), e))?;

    let columns = rows
        .first()
        .map(|row| {
            row.columns()
                .iter()
                .map(|c| c.name().to_string())
                .collect()
        })
        .unwrap_or_default();

    let rows = rows
        .iter()
        .map(|row| (0..row.columns().len()).map(|i| decode_value(row, i)).collect())
        .collect();

    Ok(QueryTable { columns, rows })
}

/// Convert a single column of a row into a JSON value based on the
/// value's SQLite storage class.
fn decode_value(row: &SqliteRow, index: usize) -> Value {
    let raw = match row.try_get_raw(index) {
        Ok(raw) => raw,
        Err(_) => return Value::Null,
    };
    if raw.is_null() {
        return Value::Null;
    }
    let storage_class = raw.type_info().name().to_string();

    match storage_class.as_str() {
        "INTEGER" | "BOOLEAN" => row
            .try_get::<i64, _>(index)
            .map(Value::from)
            .unwrap_or(Value::Null),
        "REAL" => row
            .try_get::<f64, _>(index)
            .map(Value::from)
            .unwrap_or(Value::Null),
        "BLOB" => row
            .try_get::<Vec<u8>, _>(index)
            .map(|bytes| {
                Value::String(bytes.iter().map(|b| format!("{b:02x}")).collect::<String>())
            })
            .unwrap_or(Value::Null),
        // TEXT, DATE, DATETIME, and anything else decodes as a string.
        _ => row
            .try_get::<String, _>(index)
            .map(Value::from)
            .unwrap_or(Value::Null),
    }
}
