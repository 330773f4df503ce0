//! JSON payload to DataFrame conversion.

use polars::prelude::*;
use serde_json::{Map, Value};

use crate::error::{FrameError, Result};

/// Columns reported as numbers (often as numeric strings) by the storage
/// endpoints.
pub const FLOAT_COLUMNS: &[&str] = &[
    "gasInStorage",
    "consumption",
    "consumptionFull",
    "injection",
    "withdrawal",
    "netWithdrawal",
    "workingGasVolume",
    "injectionCapacity",
    "withdrawalCapacity",
    "trend",
    "full",
    "inventory",
    "sendOut",
    "dtmi",
    "dtrs",
    "volume",
];

/// Name of the report-date column taken from the payload envelope.
pub const GAS_DAY_COLUMN: &str = "gas_day";

/// Converts an API payload into a DataFrame.
///
/// Records are read from the `data` key when present, otherwise from the
/// payload itself. A top-level `gas_day` becomes the first column. Columns
/// listed in `float_cols` are cast to `Float64`; a column whose values do not
/// all parse is left as it was.
///
/// # Errors
///
/// Returns [`FrameError::UnexpectedPayload`] when the records are neither an
/// array of objects nor an object.
pub fn json_to_frame(payload: &Value, float_cols: &[&str]) -> Result<DataFrame> {
    let records = match payload {
        Value::Object(map) => map.get("data").unwrap_or(payload),
        _ => payload,
    };

    let mut df = match records {
        Value::Null => DataFrame::empty(),
        Value::Array(rows) => frame_from_rows(rows)?,
        Value::Object(map) => frame_from_object(map)?,
        other => {
            return Err(FrameError::UnexpectedPayload(format!(
                "expected records, got {}",
                kind(other)
            )));
        }
    };

    if let Some(gas_day) = payload.get(GAS_DAY_COLUMN)
        && !has_column(&df, GAS_DAY_COLUMN)
    {
        let value = Some(render(gas_day));
        let column = Series::new(GAS_DAY_COLUMN.into(), vec![value; df.height()]).into_column();
        df.insert_column(0, column)?;
    }

    coerce_floats(&mut df, float_cols);
    Ok(df)
}

/// Builds a frame from an array of row objects.
fn frame_from_rows(rows: &[Value]) -> Result<DataFrame> {
    let mut names: Vec<&str> = Vec::new();
    let mut objects = Vec::with_capacity(rows.len());
    for (index, row) in rows.iter().enumerate() {
        let Value::Object(object) = row else {
            return Err(FrameError::UnexpectedPayload(format!(
                "record {index} is {}, expected an object",
                kind(row)
            )));
        };
        for key in object.keys() {
            if !names.contains(&key.as_str()) {
                names.push(key);
            }
        }
        objects.push(object);
    }

    let columns = names
        .iter()
        .map(|name| {
            let cells: Vec<Option<&Value>> = objects.iter().map(|row| row.get(*name)).collect();
            build_column(name, &cells)
        })
        .collect();
    Ok(DataFrame::new(columns)?)
}

/// Builds a frame from a column-oriented or single-row object.
///
/// Array values are columns; scalar values are repeated down the frame, or
/// form a single row when there are no arrays. Shorter columns are padded
/// with nulls.
fn frame_from_object(map: &Map<String, Value>) -> Result<DataFrame> {
    let height = map
        .values()
        .filter_map(Value::as_array)
        .map(Vec::len)
        .max()
        .unwrap_or(1);

    let columns = map
        .iter()
        .map(|(name, value)| {
            let cells: Vec<Option<&Value>> = match value {
                Value::Array(items) => (0..height).map(|i| items.get(i)).collect(),
                scalar => vec![Some(scalar); height],
            };
            build_column(name, &cells)
        })
        .collect();
    Ok(DataFrame::new(columns)?)
}

/// Infers a column type from its non-null cells.
fn build_column(name: &str, cells: &[Option<&Value>]) -> Column {
    let present = || cells.iter().flatten().filter(|v| !v.is_null());

    if present().next().is_some() && present().all(|v| v.is_number()) {
        let values: Vec<Option<f64>> = cells.iter().map(|c| c.and_then(Value::as_f64)).collect();
        Series::new(name.into(), values).into_column()
    } else if present().next().is_some() && present().all(|v| v.is_boolean()) {
        let values: Vec<Option<bool>> = cells.iter().map(|c| c.and_then(Value::as_bool)).collect();
        Series::new(name.into(), values).into_column()
    } else {
        let values: Vec<Option<String>> = cells
            .iter()
            .map(|c| c.filter(|v| !v.is_null()).map(render))
            .collect();
        Series::new(name.into(), values).into_column()
    }
}

fn coerce_floats(df: &mut DataFrame, float_cols: &[&str]) {
    for name in float_cols {
        let Ok(column) = df.column(name) else {
            continue;
        };
        if column.dtype() == &DataType::Float64 {
            continue;
        }
        match column.strict_cast(&DataType::Float64) {
            Ok(cast) => {
                if let Err(e) = df.with_column(cast) {
                    tracing::debug!(column = %name, error = %e, "float coercion skipped");
                }
            }
            Err(e) => tracing::debug!(column = %name, error = %e, "column left unparsed"),
        }
    }
}

fn has_column(df: &DataFrame, name: &str) -> bool {
    df.get_column_names().iter().any(|c| c.as_str() == name)
}

/// Strings as-is, anything else as JSON text.
fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_records_from_data_key() {
        let payload = json!({
            "gas_day": "2024-01-01",
            "data": [
                {"code": "BE", "gasInStorage": "10.5", "full": "80.1"},
                {"code": "DE", "gasInStorage": "20.25", "full": "70"}
            ]
        });
        let df = json_to_frame(&payload, FLOAT_COLUMNS).unwrap();
        assert_eq!(df.height(), 2);
        assert_eq!(
            df.get_column_names()
                .iter()
                .map(|c| c.as_str())
                .collect::<Vec<_>>(),
            vec!["gas_day", "code", "gasInStorage", "full"]
        );
        assert_eq!(df.column("gasInStorage").unwrap().dtype(), &DataType::Float64);
        assert_eq!(df.column("code").unwrap().dtype(), &DataType::String);
    }

    #[test]
    fn test_unparsable_float_column_is_unchanged() {
        let payload = json!([
            {"gasInStorage": "1.0"},
            {"gasInStorage": "-"}
        ]);
        let df = json_to_frame(&payload, FLOAT_COLUMNS).unwrap();
        assert_eq!(df.column("gasInStorage").unwrap().dtype(), &DataType::String);
    }

    #[test]
    fn test_no_float_coercion_without_columns() {
        let payload = json!([{"full": "1.0"}]);
        let df = json_to_frame(&payload, &[]).unwrap();
        assert_eq!(df.column("full").unwrap().dtype(), &DataType::String);
    }

    #[test]
    fn test_type_inference() {
        let payload = json!([
            {"n": 1, "b": true, "s": "x", "o": {"k": 1}},
            {"n": 2.5, "b": null, "s": null}
        ]);
        let df = json_to_frame(&payload, &[]).unwrap();
        assert_eq!(df.column("n").unwrap().dtype(), &DataType::Float64);
        assert_eq!(df.column("b").unwrap().dtype(), &DataType::Boolean);
        assert_eq!(df.column("s").unwrap().dtype(), &DataType::String);
        assert_eq!(df.column("o").unwrap().null_count(), 1);
    }

    #[test]
    fn test_existing_gas_day_is_kept() {
        let payload = json!({
            "gas_day": "2024-01-01",
            "data": [{"gas_day": "2023-12-31", "code": "AT"}]
        });
        let df = json_to_frame(&payload, &[]).unwrap();
        assert_eq!(df.width(), 2);
        assert_eq!(df.get_column_names()[0].as_str(), "gas_day");
    }

    #[test]
    fn test_column_oriented_object() {
        let payload = json!({"id": [1, 2, 3], "title": ["a", "b"], "source": "GIE"});
        let df = json_to_frame(&payload, &[]).unwrap();
        assert_eq!(df.height(), 3);
        assert_eq!(df.column("title").unwrap().null_count(), 1);
        assert_eq!(df.column("source").unwrap().null_count(), 0);
    }

    #[test]
    fn test_single_row_object() {
        let df = json_to_frame(&json!({"id": 7, "title": "outage"}), &[]).unwrap();
        assert_eq!(df.shape(), (1, 2));
    }

    #[test]
    fn test_empty_data() {
        let df = json_to_frame(&json!({"data": []}), FLOAT_COLUMNS).unwrap();
        assert_eq!(df.height(), 0);
        let df = json_to_frame(&json!({"data": null}), &[]).unwrap();
        assert_eq!(df.height(), 0);
    }

    #[test]
    fn test_scalar_payload_is_rejected() {
        assert!(matches!(
            json_to_frame(&json!("Access Denied"), &[]),
            Err(FrameError::UnexpectedPayload(_))
        ));
        assert!(matches!(
            json_to_frame(&json!([1, 2]), &[]),
            Err(FrameError::UnexpectedPayload(_))
        ));
    }
}
