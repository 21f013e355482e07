//! Row rendering for query probes

use super::types::{DatabaseError, QueryResult};

/// Render one `"<label>: <cell>."` line per row.
///
/// The column is looked up case-insensitively. SQL NULL renders as `null`.
pub fn render_rows(
    result: &QueryResult,
    column: &str,
    label: &str,
) -> Result<Vec<String>, DatabaseError> {
    if result.rows.is_empty() {
        return Ok(Vec::new());
    }

    let index = result
        .column_index(column)
        .ok_or_else(|| DatabaseError::ColumnNotFound(format!("Column '{}' not found", column)))?;

    result
        .rows
        .iter()
        .map(|row| {
            row.get(index)
                .map(|cell| format!("{}: {}.", label, cell))
                .ok_or_else(|| {
                    DatabaseError::ConversionError(format!(
                        "Row has {} cells, column '{}' is at {}",
                        row.len(),
                        column,
                        index
                    ))
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::database::types::{ColumnInfo, Value};

    fn result(rows: Vec<Vec<Value>>) -> QueryResult {
        QueryResult {
            columns: vec![ColumnInfo::new("name", "VARCHAR"), ColumnInfo::new("age", "INT")],
            rows,
            execution_time_ms: 0,
        }
    }

    #[test]
    fn test_render_names() {
        let r = result(vec![
            vec![Value::String("Alice".into()), Value::Int(20)],
            vec![Value::Null, Value::Int(30)],
        ]);
        let lines = render_rows(&r, "name", "User").unwrap();
        assert_eq!(lines, vec!["User: Alice.", "User: null."]);
    }

    #[test]
    fn test_render_other_column() {
        let r = result(vec![vec![Value::String("Alice".into()), Value::Int(20)]]);
        assert_eq!(render_rows(&r, "AGE", "Age").unwrap(), vec!["Age: 20."]);
    }

    #[test]
    fn test_unknown_column() {
        let r = result(vec![vec![Value::String("Alice".into()), Value::Int(20)]]);
        let err = render_rows(&r, "email", "User").unwrap_err();
        assert!(matches!(err, DatabaseError::ColumnNotFound(_)));
    }

    #[test]
    fn test_empty_result_has_no_lines() {
        // no rows means no column metadata either
        let r = QueryResult::default();
        assert!(render_rows(&r, "name", "User").unwrap().is_empty());
    }
}
