use super::formatter::format_long_date;
use super::history::HistoryEntry;
use prettytable::{format, row, Table};

pub struct View {}

impl View {
    /// Prints history entries as a table, in the order given.
    pub fn history<'a>(entries: impl IntoIterator<Item = &'a HistoryEntry>) {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_NO_BORDER_LINE_SEPARATOR);

        table.set_titles(row!["DATE", "DAY", "WORKED"]);
        for entry in entries {
            let day = entry.naive_date().map(format_long_date).unwrap_or_default();
            table.add_row(row![entry.date, day, r->entry.formatted]);
        }
        table.printstd();
    }
}
