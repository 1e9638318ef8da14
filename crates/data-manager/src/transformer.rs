//! Row transformation
//!
//! Maps raw table rows to typed [`PointRecord`]s, order-preserving, with
//! numeric coercion and invalid-row filtering. Runs only after the payload
//! has passed [`crate::validator::validate`].

use creative_scatter_shared::{
    roles, DataPayload, PointRecord, ScatterError, ScatterResult,
};
use serde_json::Value;

/// Transform the default table into ordered point records.
///
/// Rows are excluded only when the image URL is empty or the coerced X/Y
/// values are non-finite; coercion itself never drops a row. The returned
/// records preserve input row order.
pub fn transform(payload: &DataPayload) -> ScatterResult<Vec<PointRecord>> {
    let rows = payload.rows().ok_or(ScatterError::MissingTable)?;

    let creative_col = required_column(payload, roles::CREATIVE_ID)?;
    let image_col = required_column(payload, roles::IMAGE_URL)?;
    let x_col = required_column(payload, roles::X_METRIC)?;
    let y_col = required_column(payload, roles::Y_METRIC)?;
    let size_col = payload.column_for_role(roles::SIZE_METRIC);

    let records: Vec<PointRecord> = rows
        .iter()
        .enumerate()
        .map(|(index, row)| PointRecord {
            id: PointRecord::key_for_index(index),
            creative_id: coerce_label(row.get(creative_col))
                .unwrap_or_else(|| format!("Creative {}", index + 1)),
            image_url: coerce_url(row.get(image_col)),
            x_value: coerce_metric(row.get(x_col), 0.0),
            y_value: coerce_metric(row.get(y_col), 0.0),
            size_value: match size_col {
                Some(col) => coerce_metric(row.get(col), 1.0),
                None => 1.0,
            },
            source: row.clone(),
        })
        .filter(|record| {
            !record.image_url.is_empty()
                && record.x_value.is_finite()
                && record.y_value.is_finite()
        })
        .collect();

    log::debug!(
        "transformed {} rows into {} point records",
        rows.len(),
        records.len()
    );
    Ok(records)
}

fn required_column<'a>(payload: &'a DataPayload, role: &str) -> ScatterResult<&'a str> {
    payload
        .column_for_role(role)
        .ok_or_else(|| ScatterError::MissingRole {
            role: role.to_string(),
        })
}

/// Numeric coercion matching the host's `parseFloat(v) || default`
/// semantics: parse failures, non-finite results and zero all collapse to
/// the default. For X/Y the default is 0 so the zero collapse is a no-op.
fn coerce_metric(value: Option<&Value>, default: f64) -> f64 {
    let parsed = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    match parsed {
        Some(n) if n.is_finite() && n != 0.0 => n,
        _ => default,
    }
}

/// Creative label: any non-empty string or number renders; everything else
/// falls back to the caller's positional name.
fn coerce_label(value: Option<&Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    }
}

fn coerce_url(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metric_coercion_handles_numbers_and_strings() {
        assert_eq!(coerce_metric(Some(&Value::from(0.12)), 0.0), 0.12);
        assert_eq!(coerce_metric(Some(&Value::from("0.12")), 0.0), 0.12);
        assert_eq!(coerce_metric(Some(&Value::from(" 3.5 ")), 0.0), 3.5);
    }

    #[test]
    fn metric_coercion_defaults_on_parse_failure() {
        assert_eq!(coerce_metric(Some(&Value::from("n/a")), 0.0), 0.0);
        assert_eq!(coerce_metric(Some(&Value::Null), 0.0), 0.0);
        assert_eq!(coerce_metric(None, 1.0), 1.0);
        assert_eq!(coerce_metric(Some(&Value::from(true)), 1.0), 1.0);
    }

    #[test]
    fn zero_size_collapses_to_default() {
        assert_eq!(coerce_metric(Some(&Value::from(0.0)), 1.0), 1.0);
        assert_eq!(coerce_metric(Some(&Value::from(0.0)), 0.0), 0.0);
    }

    #[test]
    fn non_finite_strings_default() {
        assert_eq!(coerce_metric(Some(&Value::from("inf")), 0.0), 0.0);
        assert_eq!(coerce_metric(Some(&Value::from("NaN")), 0.0), 0.0);
    }
}
