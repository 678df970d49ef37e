use crate::models::Cell;

/// In-memory copy of one worksheet: header names plus data rows.
///
/// Rows are padded to the header width when the table is built, so a
/// column lookup never indexes past the end of a row.
#[derive(Clone, Debug, Default)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

/// Borrowed view on a single data row, addressed by column name.
#[derive(Clone, Copy, Debug)]
pub struct Row<'a> {
    table: &'a Table,
    cells: &'a [Cell],
}

impl Table {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        let width = headers.len();
        let rows = rows
            .into_iter()
            .map(|mut r| {
                if r.len() < width {
                    r.resize(width, Cell::Empty);
                }
                r
            })
            .collect();
        Self { headers, rows }
    }

    /// Index of a column by exact (case-sensitive) name.
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> {
        self.rows.iter().map(move |cells| Row {
            table: self,
            cells,
        })
    }
}

impl<'a> Row<'a> {
    /// `None` when the column does not exist at all.
    pub fn get(&self, name: &str) -> Option<&'a Cell> {
        self.table.column(name).and_then(|i| self.cells.get(i))
    }
}
