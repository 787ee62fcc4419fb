//! Presentation blocks: the visual units a document template is built from.

use oxidize_pdf::TextAlign;

use crate::error::{FixtureError, Result};
use crate::style::{TableStyle, TextStyle};

/// One visual unit in a document layout.
///
/// Blocks carry their own display text and style; sequence order inside a
/// template determines vertical position, nothing else relates them.
#[derive(Debug, Clone)]
pub enum Block {
    /// A heading line (or lines, when the text wraps)
    Heading { text: String, style: TextStyle },
    /// Flowing body text, wrapped to the content width
    Paragraph { text: String, style: TextStyle },
    /// A bordered grid of cells
    Table(Table),
    /// Vertical whitespace, in points
    Spacer(f64),
}

/// A single table cell.
#[derive(Debug, Clone)]
pub struct Cell {
    pub text: String,
    pub align: TextAlign,
    pub bold: bool,
}

impl Cell {
    /// Plain left-aligned cell.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            align: TextAlign::Left,
            bold: false,
        }
    }

    /// Bold cell, for field labels.
    pub fn label(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            align: TextAlign::Left,
            bold: true,
        }
    }

    pub fn with_align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }
}

/// A simple bordered table with fixed column widths.
///
/// Rows shorter than the column count are padded with empty cells; rows
/// longer than it are rejected. Cells hold a single line of text.
#[derive(Debug, Clone)]
pub struct Table {
    column_widths: Vec<f64>,
    rows: Vec<Vec<Cell>>,
    style: TableStyle,
}

impl Table {
    /// Create a table with the given column widths in points.
    pub fn new(column_widths: Vec<f64>) -> Self {
        Self {
            column_widths,
            rows: Vec::new(),
            style: TableStyle::default(),
        }
    }

    pub fn with_style(mut self, style: TableStyle) -> Self {
        self.style = style;
        self
    }

    /// Append a row. Short rows are padded with empty cells.
    pub fn add_row(&mut self, mut cells: Vec<Cell>) -> Result<&mut Self> {
        if cells.len() > self.column_widths.len() {
            return Err(FixtureError::Layout(format!(
                "row has {} cells but the table has {} columns",
                cells.len(),
                self.column_widths.len()
            )));
        }
        cells.resize_with(self.column_widths.len(), || Cell::new(""));
        self.rows.push(cells);
        Ok(self)
    }

    pub fn column_widths(&self) -> &[f64] {
        &self.column_widths
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn style(&self) -> &TableStyle {
        &self.style
    }

    /// Total table width in points.
    pub fn width(&self) -> f64 {
        self.column_widths.iter().sum()
    }

    /// Total table height in points.
    pub fn height(&self) -> f64 {
        self.rows.len() as f64 * self.style.resolved_row_height()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_short_rows_are_padded() {
        let mut table = Table::new(vec![100.0, 100.0, 100.0]);
        table
            .add_row(vec![Cell::label("NAME:"), Cell::new("John R. Smith")])
            .unwrap();
        assert_eq!(table.rows()[0].len(), 3);
        assert_eq!(table.rows()[0][2].text, "");
    }

    #[test]
    fn test_oversized_row_is_rejected() {
        let mut table = Table::new(vec![100.0, 100.0]);
        let result = table.add_row(vec![Cell::new("a"), Cell::new("b"), Cell::new("c")]);
        assert!(matches!(result, Err(FixtureError::Layout(_))));
        assert!(table.rows().is_empty());
    }

    #[test]
    fn test_table_dimensions() {
        let mut table = Table::new(vec![144.0, 216.0]).with_style(TableStyle {
            font_size: 11.0,
            cell_padding: 5.0,
            ..Default::default()
        });
        table.add_row(vec![Cell::new("a")]).unwrap();
        table.add_row(vec![Cell::new("b")]).unwrap();
        assert_eq!(table.width(), 360.0);
        assert_eq!(table.height(), 42.0);
    }

    #[test]
    fn test_cell_constructors() {
        let plain = Cell::new("C");
        assert!(!plain.bold);
        assert_eq!(plain.align, TextAlign::Left);

        let label = Cell::label("CLASS:").with_align(TextAlign::Center);
        assert!(label.bold);
        assert_eq!(label.align, TextAlign::Center);
    }
}
