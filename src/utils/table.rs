//! Plain-text table renderer for terminal output

/// Column alignment. Numeric columns read best right-aligned.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Align {
    Left,
    Right,
}

/// A column-aligned text table.
pub struct Table {
    headers: Vec<String>,
    aligns: Vec<Align>,
    rows: Vec<Vec<String>>,
    col_widths: Vec<usize>,
}

impl Table {
    /// Create a table from `(header, alignment)` column definitions.
    pub fn new(columns: Vec<(&str, Align)>) -> Self {
        let headers: Vec<String> = columns.iter().map(|(h, _)| h.to_string()).collect();
        let aligns = columns.iter().map(|(_, a)| *a).collect();
        let col_widths = headers.iter().map(|h| h.len()).collect();
        Table {
            headers,
            aligns,
            rows: Vec::new(),
            col_widths,
        }
    }

    /// Add a row. Cells beyond the column count are dropped; missing cells
    /// render empty.
    pub fn add_row(&mut self, row: Vec<String>) {
        for (i, cell) in row.iter().enumerate() {
            if i < self.col_widths.len() {
                self.col_widths[i] = self.col_widths[i].max(cell.len());
            }
        }
        self.rows.push(row);
    }

    /// Render the table with a header separator line.
    pub fn render(&self) -> String {
        let mut output = String::new();

        output.push_str(&self.render_row(&self.headers));
        output.push('\n');
        output.push_str(&self.render_separator());
        output.push('\n');

        for row in &self.rows {
            output.push_str(&self.render_row(row));
            output.push('\n');
        }

        output
    }

    fn render_row(&self, row: &[String]) -> String {
        let empty = String::new();
        let mut line = String::new();
        for i in 0..self.headers.len() {
            let cell = row.get(i).unwrap_or(&empty);
            let width = self.col_widths[i];
            match self.aligns[i] {
                Align::Left => line.push_str(&format!("{:<width$}", cell, width = width)),
                Align::Right => line.push_str(&format!("{:>width$}", cell, width = width)),
            }
            if i < self.headers.len() - 1 {
                line.push_str("  ");
            }
        }
        // Trailing pad on the last left-aligned column is noise
        line.trim_end().to_string()
    }

    fn render_separator(&self) -> String {
        let mut line = String::new();
        for (i, &width) in self.col_widths.iter().enumerate() {
            line.push_str(&"-".repeat(width));
            if i < self.col_widths.len() - 1 {
                line.push_str("  ");
            }
        }
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alignment() {
        let mut table = Table::new(vec![("Month", Align::Left), ("Cost", Align::Right)]);
        table.add_row(vec!["Aug 2026".to_string(), "$1.00".to_string()]);
        table.add_row(vec!["Sep 2026".to_string(), "$1,250.00".to_string()]);

        let rendered = table.render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "Month          Cost");
        assert_eq!(lines[2], "Aug 2026      $1.00");
        assert_eq!(lines[3], "Sep 2026  $1,250.00");
    }

    #[test]
    fn test_short_row_renders_empty_cells() {
        let mut table = Table::new(vec![("A", Align::Left), ("B", Align::Left)]);
        table.add_row(vec!["x".to_string()]);

        let rendered = table.render();
        assert!(rendered.lines().count() == 3);
        assert!(rendered.contains('x'));
    }
}
