//! Fixed-width table rendering for CLI outputs.

use crate::utils::formatting::pad_right;

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
    /// Character repeated to draw the horizontal rules.
    pub rule_char: char,
    pub rule_width: usize,
}

impl Table {
    pub fn new(columns: Vec<Column>, rule_char: char, rule_width: usize) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            rule_char,
            rule_width,
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn rule(&self) -> String {
        self.rule_char.to_string().repeat(self.rule_width)
    }

    /// Rule, header, rule, rows, rule. Every line ends with '\n'.
    pub fn render(&self) -> String {
        let mut out = String::new();

        out.push_str(&self.rule());
        out.push('\n');

        let headers: Vec<&str> = self.columns.iter().map(|c| c.header.as_str()).collect();
        out.push_str(&self.render_line(&headers));

        out.push_str(&self.rule());
        out.push('\n');

        for row in &self.rows {
            let cells: Vec<&str> = row.iter().map(String::as_str).collect();
            out.push_str(&self.render_line(&cells));
        }

        out.push_str(&self.rule());
        out.push('\n');

        out
    }

    fn render_line(&self, cells: &[&str]) -> String {
        let line = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, col)| pad_right(cells.get(i).copied().unwrap_or(""), col.width))
            .collect::<Vec<_>>()
            .join(" ");

        format!("{}\n", line.trim_end())
    }
}
