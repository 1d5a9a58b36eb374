//! Normalized chart table model.
//!
//! A [`ChartTable`] is the tabular payload handed to the chart layer: an
//! ordered list of typed columns plus rows of cells, one row per category.
//! It serializes to the Google Charts DataTable JSON wire format
//! (`{"cols": [...], "rows": [{"c": [{"v": ...}, ...]}]}`), which the
//! embedded chart JS feeds straight into
//! `new google.visualization.DataTable(...)`.

use crate::time::TimeOfDay;
use serde::ser::{SerializeMap, SerializeSeq, SerializeStruct};
use serde::{Serialize, Serializer};

/// Column value type, mirroring the DataTable type tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Text,
    Number,
    TimeOfDay,
}

impl ColumnType {
    fn wire_name(self) -> &'static str {
        match self {
            ColumnType::Text => "string",
            ColumnType::Number => "number",
            ColumnType::TimeOfDay => "datetime",
        }
    }
}

/// A labelled, typed chart column.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub label: String,
    pub column_type: ColumnType,
}

impl Column {
    pub fn new(label: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            label: label.into(),
            column_type,
        }
    }
}

/// A single cell value.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
    Time(TimeOfDay),
}

/// Ordered columns and rows ready for chart rendering.
///
/// Row order is the render order; nothing is sorted or deduplicated here.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartTable {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<Cell>>,
}

impl ChartTable {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<Cell>) {
        self.rows.push(row);
    }

    /// True when there is nothing to chart.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

impl Serialize for Column {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("label", &self.label)?;
        map.serialize_entry("type", self.column_type.wire_name())?;
        map.end()
    }
}

// Cells are wrapped as {"v": value} per the DataTable row format.
struct WireCell<'a>(&'a Cell);

impl Serialize for WireCell<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        match self.0 {
            Cell::Text(s) => map.serialize_entry("v", s)?,
            Cell::Number(n) => map.serialize_entry("v", n)?,
            Cell::Time(t) => map.serialize_entry("v", &t.to_chart_value())?,
        }
        map.end()
    }
}

struct WireRow<'a>(&'a [Cell]);

impl Serialize for WireRow<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        struct Cells<'a>(&'a [Cell]);
        impl Serialize for Cells<'_> {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                let mut seq = serializer.serialize_seq(Some(self.0.len()))?;
                for cell in self.0 {
                    seq.serialize_element(&WireCell(cell))?;
                }
                seq.end()
            }
        }
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry("c", &Cells(self.0))?;
        map.end()
    }
}

impl Serialize for ChartTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        struct Rows<'a>(&'a [Vec<Cell>]);
        impl Serialize for Rows<'_> {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                let mut seq = serializer.serialize_seq(Some(self.0.len()))?;
                for row in self.0 {
                    seq.serialize_element(&WireRow(row))?;
                }
                seq.end()
            }
        }
        let mut table = serializer.serialize_struct("ChartTable", 2)?;
        table.serialize_field("cols", &self.columns)?;
        table.serialize_field("rows", &Rows(&self.rows))?;
        table.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_table() {
        let table = ChartTable::new(vec![Column::new("Month", ColumnType::Text)]);
        assert!(table.is_empty());
        assert_eq!(table.row_count(), 0);
    }

    #[test]
    fn test_wire_format() {
        let mut table = ChartTable::new(vec![
            Column::new("Weekday", ColumnType::Text),
            Column::new("Mean time (h:m:s)", ColumnType::TimeOfDay),
        ]);
        table.push_row(vec![
            Cell::Text("Mon".to_string()),
            Cell::Time(TimeOfDay::from_seconds(3600)),
        ]);

        let value = serde_json::to_value(&table).unwrap();
        assert_eq!(
            value,
            json!({
                "cols": [
                    {"label": "Weekday", "type": "string"},
                    {"label": "Mean time (h:m:s)", "type": "datetime"},
                ],
                "rows": [
                    {"c": [{"v": "Mon"}, {"v": "Date(1,1,1,1,0,0)"}]},
                ],
            })
        );
    }

    #[test]
    fn test_number_cells_stay_untouched() {
        let mut table = ChartTable::new(vec![
            Column::new("Month", ColumnType::Text),
            Column::new("Average hours per month", ColumnType::Number),
        ]);
        table.push_row(vec![Cell::Text("Jan".to_string()), Cell::Number(152.5)]);

        let value = serde_json::to_value(&table).unwrap();
        assert_eq!(value["rows"][0]["c"][1]["v"], json!(152.5));
    }
}
