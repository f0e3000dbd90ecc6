//! Plain-text table of connections.

use crate::domain::JourneyRow;

/// Column titles, in field order.
pub const HEADER: [&str; 6] = [
    "Start",
    "Ziel",
    "Abfahrtszeit",
    "Ankunftszeit",
    "Dauer",
    "Produkt",
];

/// Minimum space after the widest entry of a column.
pub const MIN_GAP: usize = 5;

/// Width of each column: its widest entry, header included, plus the gap.
pub fn column_widths(rows: &[JourneyRow]) -> [usize; 6] {
    let mut widths = HEADER.map(|title| title.chars().count() + MIN_GAP);
    for row in rows {
        for (width, field) in widths.iter_mut().zip(row.fields()) {
            *width = (*width).max(field.chars().count() + MIN_GAP);
        }
    }
    widths
}

/// One left-justified line per row, header first.
pub fn render(rows: &[JourneyRow]) -> Vec<String> {
    let widths = column_widths(rows);
    std::iter::once(HEADER)
        .chain(rows.iter().map(JourneyRow::fields))
        .map(|fields| {
            fields
                .iter()
                .zip(widths)
                .map(|(field, width)| format!("{field:<width$}"))
                .collect()
        })
        .collect()
}
