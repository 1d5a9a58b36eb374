//! Per-view table builders.
//!
//! Each builder turns the raw JSON payload of one metric endpoint into a
//! [`ChartTable`] with that view's column schema. Labels arrive already
//! localized and ordered by the backend (months chronological, weekdays in
//! calendar order) and are passed through verbatim.
//!
//! All builders share the `fn(Value) -> anyhow::Result<ChartTable>`
//! signature so a view controller can carry one as plain configuration.

use crate::table::{Cell, ChartTable, Column, ColumnType};
use crate::time::TimeOfDay;
use anyhow::{bail, Context};
use serde_json::Value;

/// Mean seconds arrive as floats; the chart axis only shows whole seconds,
/// so truncate toward zero before splitting into components.
fn time_cell(seconds: f64) -> Cell {
    Cell::Time(TimeOfDay::from_seconds(seconds as i64))
}

/// `/average_by_month/{id}`: `[month, hours]` rows, charted as-is.
pub fn average_by_month(payload: Value) -> anyhow::Result<ChartTable> {
    let rows: Vec<(String, f64)> =
        serde_json::from_value(payload).context("malformed average_by_month payload")?;

    let mut table = ChartTable::new(vec![
        Column::new("Month", ColumnType::Text),
        Column::new("Average hours per month", ColumnType::Number),
    ]);
    for (month, hours) in rows {
        table.push_row(vec![Cell::Text(month), Cell::Number(hours)]);
    }
    Ok(table)
}

/// `/mean_time_weekday/{id}`: `[weekday, seconds]` rows; the seconds
/// column becomes a time-of-day value for the time axis.
pub fn mean_time_weekday(payload: Value) -> anyhow::Result<ChartTable> {
    let rows: Vec<(String, f64)> =
        serde_json::from_value(payload).context("malformed mean_time_weekday payload")?;

    let mut table = ChartTable::new(vec![
        Column::new("Weekday", ColumnType::Text),
        Column::new("Mean time (h:m:s)", ColumnType::TimeOfDay),
    ]);
    for (weekday, seconds) in rows {
        table.push_row(vec![Cell::Text(weekday), time_cell(seconds)]);
    }
    Ok(table)
}

/// `/presence_start_end/{id}`: `[weekday, start_seconds, end_seconds]`
/// rows; both second columns become time-of-day values for the timeline.
pub fn presence_start_end(payload: Value) -> anyhow::Result<ChartTable> {
    let rows: Vec<(String, f64, f64)> =
        serde_json::from_value(payload).context("malformed presence_start_end payload")?;

    let mut table = ChartTable::new(vec![
        Column::new("Weekday", ColumnType::Text),
        Column::new("Start", ColumnType::TimeOfDay),
        Column::new("End", ColumnType::TimeOfDay),
    ]);
    for (weekday, start, end) in rows {
        table.push_row(vec![Cell::Text(weekday), time_cell(start), time_cell(end)]);
    }
    Ok(table)
}

/// `/presence_weekday/{id}`: already tabular — a header row of column
/// labels followed by `[weekday, value]` data rows.
///
/// An empty payload (no header at all) yields an empty table, which the
/// controller maps to the no-data state.
pub fn presence_weekday(payload: Value) -> anyhow::Result<ChartTable> {
    let raw: Vec<Vec<Value>> =
        serde_json::from_value(payload).context("malformed presence_weekday payload")?;

    let mut rows = raw.into_iter();
    let header = match rows.next() {
        Some(header) => header,
        None => return Ok(ChartTable::default()),
    };

    let mut columns = Vec::with_capacity(header.len());
    for (index, label) in header.iter().enumerate() {
        let Some(label) = label.as_str() else {
            bail!("presence_weekday header cell {index} is not a string");
        };
        let column_type = if index == 0 {
            ColumnType::Text
        } else {
            ColumnType::Number
        };
        columns.push(Column::new(label, column_type));
    }

    let mut table = ChartTable::new(columns);
    for row in rows {
        if row.len() != table.columns.len() {
            bail!(
                "presence_weekday row has {} cells, expected {}",
                row.len(),
                table.columns.len()
            );
        }
        let mut cells = Vec::with_capacity(row.len());
        for (index, value) in row.into_iter().enumerate() {
            let cell = if index == 0 {
                let Some(text) = value.as_str() else {
                    bail!("presence_weekday category cell is not a string");
                };
                Cell::Text(text.to_string())
            } else {
                let Some(number) = value.as_f64() else {
                    bail!("presence_weekday value cell is not a number");
                };
                Cell::Number(number)
            };
            cells.push(cell);
        }
        table.push_row(cells);
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_average_by_month_passthrough() {
        let table = average_by_month(json!([["Jan", 160.5], ["Feb", 150.0]])).unwrap();
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.rows[0][0], Cell::Text("Jan".to_string()));
        assert_eq!(table.rows[0][1], Cell::Number(160.5));
        assert_eq!(table.rows[1][0], Cell::Text("Feb".to_string()));
        assert_eq!(table.columns[0].label, "Month");
        assert_eq!(table.columns[1].column_type, ColumnType::Number);
    }

    #[test]
    fn test_mean_time_weekday_transforms_seconds() {
        let table = mean_time_weekday(json!([["Mon", 3600]])).unwrap();
        assert_eq!(table.row_count(), 1);
        assert_eq!(
            table.rows[0],
            vec![
                Cell::Text("Mon".to_string()),
                Cell::Time(TimeOfDay::from_seconds(3600)),
            ]
        );
        assert_eq!(table.columns[1].column_type, ColumnType::TimeOfDay);
    }

    #[test]
    fn test_mean_time_weekday_truncates_fractional_seconds() {
        let table = mean_time_weekday(json!([["Tue", 29934.75]])).unwrap();
        assert_eq!(
            table.rows[0][1],
            Cell::Time(TimeOfDay::from_seconds(29934))
        );
    }

    #[test]
    fn test_start_end_transforms_both_columns() {
        let table =
            presence_start_end(json!([["Mon", 33134.0, 57257.0], ["Tue", 33590.0, 50154.0]]))
                .unwrap();
        assert_eq!(table.row_count(), 2);
        assert_eq!(
            table.rows[0],
            vec![
                Cell::Text("Mon".to_string()),
                Cell::Time(TimeOfDay::from_seconds(33134)),
                Cell::Time(TimeOfDay::from_seconds(57257)),
            ]
        );
    }

    #[test]
    fn test_start_end_empty_payload() {
        let table = presence_start_end(json!([])).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_presence_weekday_consumes_header() {
        let table = presence_weekday(json!([
            ["Weekday", "Presence (s)"],
            ["Mon", 28800],
            ["Tue", 30600],
        ]))
        .unwrap();
        assert_eq!(table.columns[0].label, "Weekday");
        assert_eq!(table.columns[1].label, "Presence (s)");
        assert_eq!(table.columns[1].column_type, ColumnType::Number);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.rows[1][1], Cell::Number(30600.0));
    }

    #[test]
    fn test_presence_weekday_empty_payload() {
        let table = presence_weekday(json!([])).unwrap();
        assert!(table.is_empty());

        // Header only, no data rows: also nothing to chart.
        let table = presence_weekday(json!([["Weekday", "Presence (s)"]])).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_malformed_payloads_are_errors() {
        assert!(average_by_month(json!({"not": "rows"})).is_err());
        assert!(mean_time_weekday(json!([["Mon"]])).is_err());
        assert!(presence_weekday(json!([["Weekday", "Presence (s)"], ["Mon"]])).is_err());
        assert!(presence_weekday(json!([["Weekday", "Presence (s)"], ["Mon", "x"]])).is_err());
    }

    #[test]
    fn test_row_order_preserved() {
        let labels = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
        let payload: Vec<_> = labels.iter().map(|d| json!([d, 0])).collect();
        let table = mean_time_weekday(Value::Array(payload)).unwrap();
        let charted: Vec<_> = table
            .rows
            .iter()
            .map(|row| match &row[0] {
                Cell::Text(label) => label.as_str().to_string(),
                _ => unreachable!(),
            })
            .collect();
        assert_eq!(charted, labels);
    }
}
