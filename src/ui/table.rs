//! Table rendering for formatted output.

/// A simple table for formatted output.
#[derive(Debug)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    column_widths: Vec<usize>,
}

impl Table {
    /// Create a new table with the given headers.
    pub fn new(headers: Vec<&str>) -> Self {
        let headers: Vec<String> = headers.iter().map(|s| s.to_string()).collect();
        let column_widths = headers.iter().map(|h| h.chars().count()).collect();

        Self {
            headers,
            rows: Vec::new(),
            column_widths,
        }
    }

    /// Add a row to the table.
    pub fn add_row(&mut self, row: Vec<&str>) {
        let row: Vec<String> = row.iter().map(|s| s.to_string()).collect();

        for (i, cell) in row.iter().enumerate() {
            if i < self.column_widths.len() {
                self.column_widths[i] = self.column_widths[i].max(cell.chars().count());
            }
        }

        self.rows.push(row);
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render the table as a string.
    pub fn render(&self) -> String {
        let mut output = String::new();

        output.push_str(&self.render_border('┌', '┬', '┐'));
        output.push('\n');

        output.push_str(&self.render_row(&self.headers));
        output.push('\n');

        output.push_str(&self.render_border('├', '┼', '┤'));
        output.push('\n');

        for row in &self.rows {
            output.push_str(&self.render_row(row));
            output.push('\n');
        }

        output.push_str(&self.render_border('└', '┴', '┘'));
        output.push('\n');

        output
    }

    fn render_border(&self, left: char, mid: char, right: char) -> String {
        let mut line = String::new();
        line.push(left);
        for (i, width) in self.column_widths.iter().enumerate() {
            line.push_str(&"─".repeat(width + 2));
            if i < self.column_widths.len() - 1 {
                line.push(mid);
            }
        }
        line.push(right);
        line
    }

    fn render_row(&self, cells: &[String]) -> String {
        let mut line = String::new();
        line.push('│');
        for (i, width) in self.column_widths.iter().enumerate() {
            let cell = cells.get(i).map(String::as_str).unwrap_or("");
            let padding = width - cell.chars().count();
            line.push(' ');
            line.push_str(cell);
            line.push_str(&" ".repeat(padding + 1));
            line.push('│');
        }
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_renders_headers_and_rows() {
        let mut table = Table::new(vec!["Tool", "Status"]);
        table.add_row(vec!["python3", "found"]);
        table.add_row(vec!["pip3", "missing"]);

        let rendered = table.render();
        assert!(rendered.contains("Tool"));
        assert!(rendered.contains("python3"));
        assert!(rendered.contains("missing"));
    }

    #[test]
    fn table_column_widths_grow_with_content() {
        let mut table = Table::new(vec!["A"]);
        table.add_row(vec!["a-much-longer-cell"]);

        let rendered = table.render();
        // Every line spans the widest cell.
        let widths: Vec<usize> = rendered.lines().map(|l| l.chars().count()).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn empty_table_reports_empty() {
        let table = Table::new(vec!["X"]);
        assert!(table.is_empty());
        assert_eq!(table.row_count(), 0);
    }

    #[test]
    fn short_row_pads_missing_cells() {
        let mut table = Table::new(vec!["A", "B"]);
        table.add_row(vec!["only-one"]);
        let rendered = table.render();
        assert!(rendered.contains("only-one"));
    }
}
