//! Conversion of SQLite result rows into `Record`s.

use rush_core::record::Record;
use serde_json::{Number, Value};
use sqlx::sqlite::SqliteRow;
use sqlx::{Column, Row, TypeInfo, ValueRef};

/// Converts every column of `row` into a JSON value keyed by column name.
///
/// Values keep their SQLite storage class: integers and reals become JSON
/// numbers, text becomes a string, blobs become an array of byte values.
/// Reals that JSON cannot represent (NaN, infinities) become `null`.
///
/// # Errors
///
/// Returns the underlying `sqlx::Error` if a column cannot be decoded.
pub fn row_to_record(row: &SqliteRow) -> Result<Record, sqlx::Error> {
    let mut record = Record::new();
    for column in row.columns() {
        let value = column_value(row, column.ordinal())?;
        record.insert(column.name(), value);
    }
    Ok(record)
}

fn column_value(row: &SqliteRow, index: usize) -> Result<Value, sqlx::Error> {
    let raw = row.try_get_raw(index)?;
    if raw.is_null() {
        return Ok(Value::Null);
    }
    let storage_class = raw.type_info().name().to_ascii_uppercase();

    let value = match storage_class.as_str() {
        "INTEGER" => Value::from(row.try_get_unchecked::<i64, _>(index)?),
        "REAL" => real(row.try_get_unchecked::<f64, _>(index)?),
        "TEXT" => Value::from(row.try_get_unchecked::<String, _>(index)?),
        "BLOB" => Value::from(row.try_get_unchecked::<Vec<u8>, _>(index)?),
        // Declared affinities such as NUMERIC or DATETIME.
        _ => {
            if let Ok(v) = row.try_get_unchecked::<i64, _>(index) {
                Value::from(v)
            } else if let Ok(v) = row.try_get_unchecked::<f64, _>(index) {
                real(v)
            } else {
                Value::from(row.try_get_unchecked::<String, _>(index)?)
            }
        }
    };
    Ok(value)
}

fn real(v: f64) -> Value {
    Number::from_f64(v).map_or(Value::Null, Value::Number)
}
