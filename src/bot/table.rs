//! # Table Rendering
//!
//! Plain-text, box-drawn tables for the listings the assistant prints. Everything here
//! is a pure function from already-computed values to a `String`; colors and terminal
//! handling are left to the CLI.
//!
//! Cells may span several lines (phones and emails are listed one per line) and long
//! text is wrapped at [`MAX_CELL_WIDTH`] display columns. Widths are measured with
//! `unicode-width` so non-ASCII names line up.

use crate::address_book::UpcomingBirthday;
use crate::fields::BIRTHDAY_FORMAT;
use crate::note::{Note, CREATED_AT_FORMAT};
use crate::record::Record;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const EMPTY_CELL: &str = "---";
pub const MAX_CELL_WIDTH: usize = 40;

#[derive(Debug, Clone, Default)]
pub struct Table {
    title: Option<String>,
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: None,
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Adds a row; missing cells render empty and extra cells are dropped.
    pub fn add_row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut row: Vec<String> = cells.into_iter().map(Into::into).collect();
        row.resize(self.headers.len(), String::new());
        self.rows.push(row);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn render(&self) -> String {
        let header_cells: Vec<Vec<String>> = self.headers.iter().map(|h| wrap_cell(h)).collect();
        let body: Vec<Vec<Vec<String>>> = self
            .rows
            .iter()
            .map(|row| row.iter().map(|cell| wrap_cell(cell)).collect())
            .collect();

        let mut widths: Vec<usize> = header_cells.iter().map(|c| block_width(c)).collect();
        for row in &body {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(block_width(cell));
            }
        }

        let mut out = String::new();
        let total_width: usize = widths.iter().map(|w| w + 3).sum::<usize>() + 1;
        if let Some(title) = &self.title {
            let pad = total_width.saturating_sub(title.width()) / 2;
            out.push_str(&" ".repeat(pad));
            out.push_str(title);
            out.push('\n');
        }

        out.push_str(&border(&widths, '┌', '┬', '┐'));
        push_row(&mut out, &widths, &header_cells);
        out.push_str(&border(&widths, '├', '┼', '┤'));
        for (i, row) in body.iter().enumerate() {
            if i > 0 {
                out.push_str(&border(&widths, '├', '┼', '┤'));
            }
            push_row(&mut out, &widths, row);
        }
        out.push_str(&border(&widths, '└', '┴', '┘'));
        out
    }
}

fn border(widths: &[usize], left: char, mid: char, right: char) -> String {
    let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
    format!("{}{}{}\n", left, segments.join(&mid.to_string()), right)
}

fn push_row(out: &mut String, widths: &[usize], cells: &[Vec<String>]) {
    let height = cells.iter().map(Vec::len).max().unwrap_or(1).max(1);
    for line in 0..height {
        out.push('│');
        for (width, cell) in widths.iter().zip(cells) {
            let text = cell.get(line).map(String::as_str).unwrap_or("");
            let padding = width.saturating_sub(text.width());
            out.push(' ');
            out.push_str(text);
            out.push_str(&" ".repeat(padding));
            out.push_str(" │");
        }
        out.push('\n');
    }
}

fn block_width(lines: &[String]) -> usize {
    lines.iter().map(|l| l.width()).max().unwrap_or(0)
}

/// Splits a cell into display lines, wrapping words longer lines at [`MAX_CELL_WIDTH`].
fn wrap_cell(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    for raw in text.split('\n') {
        if raw.width() <= MAX_CELL_WIDTH {
            lines.push(raw.to_string());
            continue;
        }
        let mut current = String::new();
        for word in raw.split(' ') {
            let sep = usize::from(!current.is_empty());
            if current.width() + sep + word.width() <= MAX_CELL_WIDTH {
                if sep == 1 {
                    current.push(' ');
                }
                current.push_str(word);
                continue;
            }
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            for c in word.chars() {
                if current.width() + c.width().unwrap_or(0) > MAX_CELL_WIDTH {
                    lines.push(std::mem::take(&mut current));
                }
                current.push(c);
            }
        }
        lines.push(current);
    }
    lines
}

fn joined_or_empty<T: ToString>(items: &[T]) -> String {
    if items.is_empty() {
        return EMPTY_CELL.to_string();
    }
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

fn optional_cell<T: ToString>(value: Option<T>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| EMPTY_CELL.to_string())
}

/// Name, Phones, Emails, Address, Birthday for each record.
pub fn contacts_table<'a>(title: &str, records: impl IntoIterator<Item = &'a Record>) -> Table {
    let mut table =
        Table::new(["Name", "Phones", "Emails", "Address", "Birthday"]).with_title(title);
    for record in records {
        table.add_row([
            record.name().to_string(),
            joined_or_empty(record.phones()),
            joined_or_empty(record.emails()),
            optional_cell(record.address()),
            optional_cell(record.birthday()),
        ]);
    }
    table
}

pub fn search_results_table<'a>(records: impl IntoIterator<Item = &'a Record>) -> Table {
    let mut table = Table::new(["Name", "Birthday", "Phones", "Emails", "Address"])
        .with_title("Search Results");
    for record in records {
        table.add_row([
            record.name().to_string(),
            optional_cell(record.birthday()),
            record
                .phones()
                .iter()
                .map(|p| p.as_str())
                .collect::<Vec<_>>()
                .join(", "),
            record
                .emails()
                .iter()
                .map(|e| e.as_str())
                .collect::<Vec<_>>()
                .join(", "),
            optional_cell(record.address()),
        ]);
    }
    // Empty lists in search results read better as the placeholder.
    for row in &mut table.rows {
        for cell in row.iter_mut().filter(|c| c.is_empty()) {
            *cell = EMPTY_CELL.to_string();
        }
    }
    table
}

pub fn birthdays_table(days: i64, rows: &[UpcomingBirthday]) -> Table {
    let mut table = Table::new(["Name", "Congratulation Date", "Phones", "Emails"])
        .with_title(format!("Upcoming Birthdays within {} Days", days));
    for row in rows {
        table.add_row([
            row.name.clone(),
            row.congratulation_date.format(BIRTHDAY_FORMAT).to_string(),
            joined_or_empty(&row.phones),
            joined_or_empty(&row.emails),
        ]);
    }
    table
}

pub fn notes_table<'a>(title: &str, notes: impl IntoIterator<Item = &'a Note>) -> Table {
    let mut table = Table::new(["Id", "Creation Date", "Text", "Tags"]).with_title(title);
    for note in notes {
        table.add_row([
            note.id.clone(),
            note.created_at.format(CREATED_AT_FORMAT).to_string(),
            note.text.clone(),
            note.tags.join(" "),
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn renders_borders_and_padding() {
        let mut table = Table::new(["A", "Bee"]);
        table.add_row(["xx", "y"]);
        let expected = "\
┌────┬─────┐
│ A  │ Bee │
├────┼─────┤
│ xx │ y   │
└────┴─────┘
";
        assert_eq!(table.render(), expected);
    }

    #[test]
    fn multi_line_cells_and_row_separators() {
        let mut table = Table::new(["N", "P"]);
        table.add_row(["a", "1\n2"]);
        table.add_row(["b", "3"]);
        let rendered = table.render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[3], "│ a │ 1 │");
        assert_eq!(lines[4], "│   │ 2 │");
        assert_eq!(lines[5], "├───┼───┤");
        assert_eq!(lines[6], "│ b │ 3 │");
    }

    #[test]
    fn title_is_centered() {
        let table = Table::new(["Name"]).with_title("T");
        let first = table.render().lines().next().unwrap().to_string();
        assert_eq!(first.trim(), "T");
        assert!(first.starts_with(' '));
    }

    #[test]
    fn wide_characters_are_measured_by_display_width() {
        let mut table = Table::new(["N"]);
        table.add_row(["日本"]);
        table.add_row(["abcd"]);
        let rendered = table.render();
        assert!(rendered.contains("│ 日本 │"));
        assert!(rendered.contains("│ abcd │"));
    }

    #[test]
    fn long_text_wraps() {
        let long = "word ".repeat(20);
        let lines = wrap_cell(long.trim());
        assert!(lines.len() > 1);
        assert!(lines.iter().all(|l| l.width() <= MAX_CELL_WIDTH));

        let unbroken = "x".repeat(MAX_CELL_WIDTH * 2 + 1);
        let lines = wrap_cell(&unbroken);
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn contacts_use_placeholder_for_empty_fields() {
        let mut record = Record::new("Ann").unwrap();
        record.add_phone("0501234567").unwrap();
        let rendered = contacts_table("All Contacts", [&record]).render();
        assert!(rendered.contains("All Contacts"));
        assert!(rendered.contains("0501234567"));
        assert!(rendered.contains(EMPTY_CELL));
    }

    #[test]
    fn birthdays_table_formats_dates() {
        let rows = vec![UpcomingBirthday {
            name: "Ann".into(),
            congratulation_date: NaiveDate::from_ymd_opt(2024, 6, 17).unwrap(),
            phones: vec![],
            emails: vec!["ann@example.com".into()],
        }];
        let rendered = birthdays_table(7, &rows).render();
        assert!(rendered.contains("Upcoming Birthdays within 7 Days"));
        assert!(rendered.contains("17.06.2024"));
        assert!(rendered.contains("ann@example.com"));
    }

    #[test]
    fn notes_table_lists_tags() {
        let mut note = Note::new("call mom");
        note.add_tag("#family");
        let rendered = notes_table("All Notes", [&note]).render();
        assert!(rendered.contains(&note.id));
        assert!(rendered.contains("#family"));
    }
}
