//! Two-dimensional labeled result table.

use std::collections::{BTreeSet, HashMap};
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::Value;

/// Row label: a security or an observation date.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Label {
    /// Textual label, typically a security identifier.
    Text(String),
    /// Calendar date of a historical observation.
    Date(NaiveDate),
}

impl Label {
    /// Textual label.
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
        }
    }
}

impl From<&str> for Label {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<NaiveDate> for Label {
    fn from(d: NaiveDate) -> Self {
        Self::Date(d)
    }
}

/// Column key, optionally grouped under an outer label.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ColumnKey {
    /// Outer label (the security, for historical tables).
    pub group: Option<String>,
    /// Column name (the field).
    pub name: String,
}

impl ColumnKey {
    /// Ungrouped column.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            group: None,
            name: name.into(),
        }
    }

    /// Column `name` under `group`.
    pub fn grouped(group: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            group: Some(group.into()),
            name: name.into(),
        }
    }
}

impl fmt::Display for ColumnKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.group {
            Some(g) => write!(f, "{g}.{}", self.name),
            None => f.write_str(&self.name),
        }
    }
}

impl From<&str> for ColumnKey {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Row-major labeled table. Unfilled cells hold [`Value::Missing`].
///
/// Row labels are not required to be unique: stacked bulk records share their
/// security label. Label lookups resolve to the first matching row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    index: Vec<Label>,
    columns: Vec<ColumnKey>,
    cells: Vec<Vec<Value>>,
}

impl Table {
    /// Empty table.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            index: Vec::new(),
            columns: Vec::new(),
            cells: Vec::new(),
        }
    }

    /// True when the table has no rows or no columns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty() || self.columns.is_empty()
    }

    /// Number of rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.index.len()
    }

    /// Number of columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Row labels in order.
    #[must_use]
    pub fn index(&self) -> &[Label] {
        &self.index
    }

    /// Column keys in order.
    #[must_use]
    pub fn columns(&self) -> &[ColumnKey] {
        &self.columns
    }

    fn row_position(&self, row: &Label) -> Option<usize> {
        self.index.iter().position(|l| l == row)
    }

    fn column_position(&self, col: &ColumnKey) -> Option<usize> {
        self.columns.iter().position(|c| c == col)
    }

    fn ensure_column(&mut self, col: ColumnKey) -> usize {
        if let Some(pos) = self.column_position(&col) {
            return pos;
        }
        self.columns.push(col);
        for row in &mut self.cells {
            row.push(Value::Missing);
        }
        self.columns.len() - 1
    }

    fn append_row(&mut self, label: Label) -> usize {
        self.index.push(label);
        self.cells.push(vec![Value::Missing; self.columns.len()]);
        self.index.len() - 1
    }

    /// Cell at `(row, col)`; `None` if either coordinate is unknown.
    #[must_use]
    pub fn get(&self, row: &Label, col: &ColumnKey) -> Option<&Value> {
        let r = self.row_position(row)?;
        let c = self.column_position(col)?;
        self.cells.get(r).and_then(|cells| cells.get(c))
    }

    /// Cells of the first row labeled `row`, in column order.
    #[must_use]
    pub fn row(&self, row: &Label) -> Option<&[Value]> {
        let r = self.row_position(row)?;
        self.cells.get(r).map(Vec::as_slice)
    }

    /// Cells of column `col`, in row order.
    #[must_use]
    pub fn column(&self, col: &ColumnKey) -> Option<Vec<&Value>> {
        let c = self.column_position(col)?;
        Some(self.cells.iter().filter_map(|row| row.get(c)).collect())
    }

    /// Iterate `(label, cells)` pairs in row order.
    pub fn rows(&self) -> impl Iterator<Item = (&Label, &[Value])> {
        self.index
            .iter()
            .zip(self.cells.iter().map(Vec::as_slice))
    }

    /// Write one cell, adding the row and/or column if they do not exist yet.
    pub fn set(&mut self, row: Label, col: ColumnKey, value: Value) {
        let c = self.ensure_column(col);
        let r = match self.row_position(&row) {
            Some(r) => r,
            None => self.append_row(row),
        };
        self.cells[r][c] = value;
    }

    /// Append a row, adding unseen columns in order of first appearance.
    pub fn push_row<I>(&mut self, label: Label, cells: I)
    where
        I: IntoIterator<Item = (ColumnKey, Value)>,
    {
        let r = self.append_row(label);
        for (col, value) in cells {
            let c = self.ensure_column(col);
            self.cells[r][c] = value;
        }
    }

    /// Replace every cell equal to `needle` with `replacement`.
    pub fn replace(&mut self, needle: &Value, replacement: &Value) {
        for cell in self.cells.iter_mut().flatten() {
            if cell == needle {
                cell.clone_from(replacement);
            }
        }
    }

    /// Stable sort of rows by label.
    pub fn sort_index(&mut self) {
        let mut rows: Vec<(Label, Vec<Value>)> = self
            .index
            .drain(..)
            .zip(self.cells.drain(..))
            .collect();
        rows.sort_by(|a, b| a.0.cmp(&b.0));
        for (label, cells) in rows {
            self.index.push(label);
            self.cells.push(cells);
        }
    }

    /// Concatenate tables side by side.
    ///
    /// Each part's columns are grouped under its key. The row index is the
    /// sorted, de-duplicated union of all parts' labels; cells absent from a
    /// part are missing. A grouped column that already exists (the same key
    /// given twice) keeps the first part's values.
    #[must_use]
    pub fn concat_columns(parts: Vec<(String, Self)>) -> Self {
        let labels: BTreeSet<&Label> = parts.iter().flat_map(|(_, t)| t.index.iter()).collect();
        let mut out = Self::new();
        out.index = labels.into_iter().cloned().collect();
        out.cells = vec![Vec::new(); out.index.len()];

        for (key, part) in &parts {
            let positions: HashMap<&Label, usize> = part
                .index
                .iter()
                .enumerate()
                .rev()
                .map(|(i, l)| (l, i))
                .collect();
            for (c, col) in part.columns.iter().enumerate() {
                let grouped = ColumnKey::grouped(key.clone(), col.name.clone());
                if out.columns.contains(&grouped) {
                    continue;
                }
                out.columns.push(grouped);
                for (label, row) in out.index.iter().zip(out.cells.iter_mut()) {
                    let value = positions
                        .get(label)
                        .and_then(|&r| part.cells[r].get(c))
                        .cloned()
                        .unwrap_or_default();
                    row.push(value);
                }
            }
        }
        out
    }

    /// Stack tables vertically.
    ///
    /// Every row of the part keyed `k` is labeled `k`; columns are the union
    /// of all parts' columns in order of first appearance.
    #[must_use]
    pub fn concat_rows(parts: Vec<(String, Self)>) -> Self {
        let mut out = Self::new();
        for (key, part) in parts {
            let Self {
                columns, cells, ..
            } = part;
            for row in cells {
                out.push_row(Label::Text(key.clone()), columns.iter().cloned().zip(row));
            }
        }
        out
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "Empty table");
        }
        let header: Vec<String> = self.columns.iter().map(ToString::to_string).collect();
        let body: Vec<(String, Vec<String>)> = self
            .rows()
            .map(|(l, cells)| (l.to_string(), cells.iter().map(ToString::to_string).collect()))
            .collect();

        let label_w = body.iter().map(|(l, _)| l.len()).max().unwrap_or(0);
        let widths: Vec<usize> = header
            .iter()
            .enumerate()
            .map(|(c, h)| {
                body.iter()
                    .map(|(_, cells)| cells[c].len())
                    .chain(std::iter::once(h.len()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        write!(f, "{:label_w$}", "")?;
        for (h, w) in header.iter().zip(&widths) {
            write!(f, "  {h:>w$}")?;
        }
        writeln!(f)?;
        for (label, cells) in &body {
            write!(f, "{label:label_w$}")?;
            for (cell, w) in cells.iter().zip(&widths) {
                write!(f, "  {cell:>w$}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
