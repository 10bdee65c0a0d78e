//! Table rendering for the records listing.

pub struct Column {
    pub header: String,
    pub width: usize,
}

impl Column {
    pub fn new(header: &str, width: usize) -> Self {
        Self {
            header: header.to_string(),
            width,
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Render header, a dashed rule, then rows. Cells longer than the
    /// column width are truncated with an ellipsis so a long comment or
    /// coordinate pair cannot break the layout.
    pub fn render(&self) -> String {
        let mut out = String::new();

        for col in &self.columns {
            out.push_str(&format!("{:<width$} ", col.header, width = col.width));
        }
        out.push('\n');

        let rule_len: usize = self.columns.iter().map(|c| c.width + 1).sum();
        out.push_str(&"-".repeat(rule_len));
        out.push('\n');

        for row in &self.rows {
            for (i, col) in self.columns.iter().enumerate() {
                let cell = fit(&row[i], col.width);
                out.push_str(&format!("{:<width$} ", cell, width = col.width));
            }
            out.push('\n');
        }

        out
    }
}

fn fit(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        return s.to_string();
    }
    let mut cut: String = s.chars().take(width.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_long_cells() {
        let mut t = Table::new(vec![Column::new("STATUS", 6)]);
        t.add_row(vec!["In Review And Then Some".to_string()]);
        let out = t.render();
        assert!(out.contains("In Re…"));
        assert!(!out.contains("Review And"));
    }

    #[test]
    fn renders_header_rule() {
        let t = Table::new(vec![Column::new("A", 3), Column::new("B", 3)]);
        assert!(t.render().contains("--------"));
    }
}
