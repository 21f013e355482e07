//! MySQL Parameter Conversion Utilities
//!
//! Converts between probe `Value`s and mysql_async values. Bound values are
//! always sent as typed parameters of a prepared statement, never spliced
//! into the SQL text.

use crate::handlers::database::types::{DatabaseError, Value};

/// MySQL parameter conversion utility
pub struct MySqlParamConverter;

impl MySqlParamConverter {
    /// Convert a probe `Value` to `mysql_async::Value`
    pub fn convert_value(value: &Value) -> mysql_async::Value {
        match value {
            Value::Null => mysql_async::Value::NULL,
            Value::Bool(b) => mysql_async::Value::Int(*b as i64),
            Value::Int(i) => mysql_async::Value::Int(*i),
            Value::Float(f) => mysql_async::Value::Double(*f),
            Value::String(s) => mysql_async::Value::Bytes(s.as_bytes().to_vec()),
            Value::Binary(b) => mysql_async::Value::Bytes(b.clone()),
            Value::DateTime(dt) => {
                let formatted = dt.format("%Y-%m-%d %H:%M:%S%.3f").to_string();
                mysql_async::Value::Bytes(formatted.into_bytes())
            }
        }
    }

    /// Convert a batch of parameters
    pub fn convert_params(params: &[Value]) -> Vec<mysql_async::Value> {
        params.iter().map(Self::convert_value).collect()
    }

    /// Validate parameter count against query placeholders
    ///
    /// Placeholders inside quoted literals and comments are not counted.
    pub fn validate_param_count(sql: &str, param_count: usize) -> Result<(), DatabaseError> {
        let expected_count = Self::extract_parameter_positions(sql).len();
        if expected_count != param_count {
            return Err(DatabaseError::ValidationError(format!(
                "Parameter count mismatch: expected {}, provided {}",
                expected_count, param_count
            )));
        }
        Ok(())
    }

    /// Byte offsets of `?` placeholders outside of quoted literals and comments
    ///
    /// Comments follow MySQL: `# ...`, `-- ...` (dashes followed by whitespace
    /// or end of input) and `/* ... */`. Every delimiter is ASCII, so scanning
    /// bytes never splits a multi-byte character.
    pub fn extract_parameter_positions(sql: &str) -> Vec<usize> {
        let bytes = sql.as_bytes();
        let mut positions = Vec::new();
        let mut i = 0;

        while i < bytes.len() {
            match bytes[i] {
                quote @ (b'\'' | b'"' | b'`') => {
                    i += 1;
                    while i < bytes.len() {
                        match bytes[i] {
                            b'\\' if quote != b'`' => i += 1,
                            c if c == quote => break,
                            _ => {}
                        }
                        i += 1;
                    }
                }
                b'#' => i = Self::line_end(bytes, i),
                b'-' if bytes.get(i + 1) == Some(&b'-')
                    && bytes
                        .get(i + 2)
                        .map_or(true, |c| c.is_ascii_whitespace()) =>
                {
                    i = Self::line_end(bytes, i)
                }
                b'/' if bytes.get(i + 1) == Some(&b'*') => {
                    i += 2;
                    while i < bytes.len()
                        && !(bytes[i] == b'*' && bytes.get(i + 1) == Some(&b'/'))
                    {
                        i += 1;
                    }
                    // land on the closing '/'
                    i += 1;
                }
                b'?' => positions.push(i),
                _ => {}
            }
            i += 1;
        }

        positions
    }

    fn line_end(bytes: &[u8], from: usize) -> usize {
        bytes[from..]
            .iter()
            .position(|&b| b == b'\n')
            .map_or(bytes.len(), |offset| from + offset)
    }

    /// Convert `mysql_async::Value` back to a probe `Value`
    pub fn convert_from_mysql_value(
        mysql_value: mysql_async::Value,
    ) -> Result<Value, DatabaseError> {
        match mysql_value {
            mysql_async::Value::NULL => Ok(Value::Null),
            mysql_async::Value::Int(i) => Ok(Value::Int(i)),
            mysql_async::Value::UInt(u) => i64::try_from(u).map(Value::Int).map_err(|_| {
                DatabaseError::ValidationError(format!("Unsigned value {} exceeds i64", u))
            }),
            mysql_async::Value::Float(f) => Ok(Value::Float(f as f64)),
            mysql_async::Value::Double(d) => Ok(Value::Float(d)),
            mysql_async::Value::Bytes(b) => match String::from_utf8(b) {
                Ok(s) => Ok(Value::String(s)),
                Err(e) => Ok(Value::Binary(e.into_bytes())),
            },
            mysql_async::Value::Date(year, month, day, hour, minute, second, microsecond) => {
                let datetime_str = format!(
                    "{:04}-{:02}-{:02} {:02}:{:02}:{:02}.{:06}",
                    year, month, day, hour, minute, second, microsecond
                );
                match chrono::NaiveDateTime::parse_from_str(&datetime_str, "%Y-%m-%d %H:%M:%S%.f") {
                    Ok(naive_dt) => Ok(Value::DateTime(naive_dt.and_utc())),
                    // zero dates such as 0000-00-00 stay textual
                    Err(_) => Ok(Value::String(datetime_str)),
                }
            }
            mysql_async::Value::Time(is_negative, days, hours, minutes, seconds, microseconds) => {
                let time_str = format!(
                    "{}{:02}:{:02}:{:02}.{:06}",
                    if is_negative { "-" } else { "" },
                    days * 24 + hours as u32,
                    minutes,
                    seconds,
                    microseconds
                );
                Ok(Value::String(time_str))
            }
        }
    }

    /// Generate safe parameter summary for logging
    ///
    /// Only the parameter types are included so bound values stay out of logs
    pub fn create_param_summary(params: &[Value]) -> String {
        params
            .iter()
            .enumerate()
            .map(|(i, param)| {
                let type_name = match param {
                    Value::Null => "NULL",
                    Value::Bool(_) => "BOOL",
                    Value::Int(_) => "INT",
                    Value::Float(_) => "FLOAT",
                    Value::String(s) => {
                        if s.len() > 50 {
                            "STRING(large)"
                        } else {
                            "STRING"
                        }
                    }
                    Value::Binary(b) => {
                        if b.len() > 1024 {
                            "BINARY(large)"
                        } else {
                            "BINARY"
                        }
                    }
                    Value::DateTime(_) => "DATETIME",
                };
                format!("${}: {}", i + 1, type_name)
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}
