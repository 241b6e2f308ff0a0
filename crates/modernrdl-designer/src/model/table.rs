use serde::{Deserialize, Serialize};

use modernrdl_core::constants::{TABLE_CELL_HEIGHT, TABLE_CELL_WIDTH, TABLE_MAX_DIMENSION};
use modernrdl_core::Point;

use super::{Section, TransformAttrs};
use crate::options::ItemDefaults;

/// Smallest row height / column width a repair will produce.
const MIN_EXTENT: f64 = 1.0;

/// A grid of text cells.
///
/// `width` and `height` always equal the sums of `column_widths` and
/// `row_heights` once a table has been committed. Resizing goes through
/// [`Table::resize_to`] / [`Table::scale_by`], which redistribute the
/// extents proportionally and re-sum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    pub id: String,
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub rotation: f64,
    #[serde(default)]
    pub section: Section,
    pub width: f64,
    pub height: f64,
    pub row_count: usize,
    pub column_count: usize,
    pub column_widths: Vec<f64>,
    pub row_heights: Vec<f64>,
    pub table_data: Vec<Vec<String>>,
}

impl Table {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: String,
        position: Point,
        section: Section,
        rows: usize,
        columns: usize,
        cell_width: f64,
        cell_height: f64,
        cell_text: &str,
    ) -> Self {
        let rows = rows.max(1);
        let columns = columns.max(1);
        let column_widths = vec![cell_width; columns];
        let row_heights = vec![cell_height; rows];
        Self {
            id,
            x: position.x,
            y: position.y,
            rotation: 0.0,
            section,
            width: column_widths.iter().sum(),
            height: row_heights.iter().sum(),
            row_count: rows,
            column_count: columns,
            column_widths,
            row_heights,
            table_data: vec![vec![cell_text.to_string(); columns]; rows],
        }
    }

    pub fn from_defaults(
        id: String,
        position: Point,
        section: Section,
        defaults: &ItemDefaults,
    ) -> Self {
        Self::new(
            id,
            position,
            section,
            defaults.table_rows,
            defaults.table_columns,
            defaults.table_cell_width,
            defaults.table_cell_height,
            &defaults.table_cell_text,
        )
    }

    /// True when counts, extents, sums and the cell grid all agree.
    pub fn is_consistent(&self) -> bool {
        self.column_widths.len() == self.column_count
            && self.row_heights.len() == self.row_count
            && self.column_widths.iter().all(|w| valid_extent(*w))
            && self.row_heights.iter().all(|h| valid_extent(*h))
            && self.width == self.column_widths.iter().sum::<f64>()
            && self.height == self.row_heights.iter().sum::<f64>()
            && self.table_data.len() == self.row_count
            && self.table_data.iter().all(|r| r.len() == self.column_count)
    }

    /// Describes how the stored counts disagree with the extent lists and
    /// the cell grid, if they do.
    pub fn shape_mismatch(&self) -> Option<String> {
        if self.row_count > TABLE_MAX_DIMENSION || self.column_count > TABLE_MAX_DIMENSION {
            return Some(format!(
                "{}x{} exceeds {} rows or columns",
                self.row_count, self.column_count, TABLE_MAX_DIMENSION
            ));
        }
        if self.column_widths.len() != self.column_count {
            return Some(format!(
                "columnCount {} but {} column widths",
                self.column_count,
                self.column_widths.len()
            ));
        }
        if self.row_heights.len() != self.row_count {
            return Some(format!(
                "rowCount {} but {} row heights",
                self.row_count,
                self.row_heights.len()
            ));
        }
        if self.table_data.len() != self.row_count {
            return Some(format!(
                "rowCount {} but {} data rows",
                self.row_count,
                self.table_data.len()
            ));
        }
        self.table_data
            .iter()
            .position(|row| row.len() != self.column_count)
            .map(|i| format!("data row {} does not have {} cells", i, self.column_count))
    }

    /// Repairs the table invariants. Returns true when anything changed.
    ///
    /// `row_count` / `column_count` are authoritative within
    /// `1..=TABLE_MAX_DIMENSION`: extent lists are padded (with their last
    /// value) or truncated to match, non-positive extents are replaced, the
    /// cell grid is resized with empty cells, and the aggregate size is
    /// re-summed.
    pub fn normalize(&mut self) -> bool {
        let before = self.clone();

        self.row_count = self.row_count.clamp(1, TABLE_MAX_DIMENSION);
        self.column_count = self.column_count.clamp(1, TABLE_MAX_DIMENSION);

        fit_extents(&mut self.column_widths, self.column_count, TABLE_CELL_WIDTH);
        fit_extents(&mut self.row_heights, self.row_count, TABLE_CELL_HEIGHT);

        self.table_data.resize_with(self.row_count, Vec::new);
        for row in &mut self.table_data {
            row.resize_with(self.column_count, String::new);
        }

        self.resum();
        *self != before
    }

    /// Resizes the table to an aggregate size, spreading the change over
    /// columns and rows in proportion to their current extents.
    pub fn resize_to(&mut self, width: Option<f64>, height: Option<f64>) {
        if let Some(w) = width.filter(|w| valid_extent(*w)) {
            let current: f64 = self.column_widths.iter().sum();
            if current > 0.0 {
                rescale(&mut self.column_widths, w / current);
            }
        }
        if let Some(h) = height.filter(|h| valid_extent(*h)) {
            let current: f64 = self.row_heights.iter().sum();
            if current > 0.0 {
                rescale(&mut self.row_heights, h / current);
            }
        }
        self.resum();
    }

    /// Folds a transform-handle scale into the column widths and row heights.
    pub fn scale_by(&mut self, scale_x: f64, scale_y: f64) {
        if valid_extent(scale_x) {
            rescale(&mut self.column_widths, scale_x);
        }
        if valid_extent(scale_y) {
            rescale(&mut self.row_heights, scale_y);
        }
        self.resum();
    }

    pub fn apply_transform(&mut self, attrs: &TransformAttrs) {
        if let Some(x) = attrs.x {
            self.x = x;
        }
        if let Some(y) = attrs.y {
            self.y = y;
        }
        if let Some(rotation) = attrs.rotation {
            self.rotation = rotation;
        }
        if attrs.width.is_some() || attrs.height.is_some() {
            self.resize_to(attrs.width, attrs.height);
        }
        if attrs.scale_x.is_some() || attrs.scale_y.is_some() {
            self.scale_by(attrs.scale_x.unwrap_or(1.0), attrs.scale_y.unwrap_or(1.0));
        }
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.table_data
            .get(row)
            .and_then(|r| r.get(column))
            .map(String::as_str)
    }

    pub fn set_cell(&mut self, row: usize, column: usize, text: impl Into<String>) -> bool {
        match self.table_data.get_mut(row).and_then(|r| r.get_mut(column)) {
            Some(cell) => {
                *cell = text.into();
                true
            }
            None => false,
        }
    }

    fn resum(&mut self) {
        self.width = self.column_widths.iter().sum();
        self.height = self.row_heights.iter().sum();
    }
}

fn valid_extent(v: f64) -> bool {
    v.is_finite() && v > 0.0
}

fn rescale(extents: &mut [f64], factor: f64) {
    for e in extents.iter_mut() {
        *e = (*e * factor).max(MIN_EXTENT);
    }
}

fn fit_extents(extents: &mut Vec<f64>, count: usize, fallback: f64) {
    for e in extents.iter_mut() {
        if !valid_extent(*e) {
            *e = MIN_EXTENT;
        }
    }
    let pad = extents.last().copied().unwrap_or(fallback);
    extents.resize(count, pad);
}
