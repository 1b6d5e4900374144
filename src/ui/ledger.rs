//! Text rendering of the ledger view: table, total line, sort indicator.

use crate::core::calculator::totals;
use crate::core::codec::{format_minutes, to_fields};
use crate::models::{Entry, SortColumn, SortState, View};
use crate::utils::colors::{grey, paint_signed};
use crate::utils::formatting::bold;
use crate::utils::table::{Column, Table};

pub const EMPTY_LEDGER: &str = "Add your first person to start tracking minutes! ⏱️";

fn header(label: &str, column: SortColumn, sort: Option<SortState>) -> String {
    match sort {
        Some(s) if s.column == column => format!("{label} {}", s.direction.arrow()),
        _ => label.to_string(),
    }
}

pub fn render_view(view: &View, show_dates: bool) -> String {
    if view.entries.is_empty() {
        return format!("{EMPTY_LEDGER}\n");
    }

    let mut columns = vec![
        Column::right("ID"),
        Column::left(header("Name", SortColumn::Name, view.sort)),
    ];
    if show_dates {
        columns.push(Column::left("Added"));
    }
    columns.push(Column::right(header("Plus", SortColumn::Plus, view.sort)));
    columns.push(Column::right(header("Minus", SortColumn::Minus, view.sort)));
    columns.push(Column::right(header("Sum", SortColumn::Sum, view.sort)));

    let mut table = Table::new(columns);
    for e in &view.entries {
        let mut row = vec![e.id().to_string(), e.name().to_string()];
        if show_dates {
            row.push(e.date_added().map(grey).unwrap_or_default());
        }
        row.push(format_minutes(e.plus_minutes(), true));
        row.push(format_minutes(e.minus_minutes(), false));
        row.push(paint_signed(e.sum(), &format_minutes(e.sum(), true)));
        table.add_row(row);
    }

    let mut out = table.render();
    let t = totals(&view.entries);
    out.push('\n');
    out.push_str(&format!(
        "{} {}   (plus {}, minus {})\n",
        bold("TOTAL:"),
        paint_signed(view.total, &format_minutes(view.total, false)),
        format_minutes(t.plus, false),
        format_minutes(t.minus, false),
    ));

    if let Some(s) = view.sort {
        out.push_str(&format!(
            "Sorted by {} ({})\n",
            s.column.as_str(),
            s.direction.as_str()
        ));
    }
    out
}

/// Detail view of one entry, including the values its edit form would show.
pub fn render_entry(e: &Entry) -> String {
    let (ph, pm) = to_fields(e.plus_minutes());
    let (mh, mm) = to_fields(e.minus_minutes());
    let dash = |s: String| if s.is_empty() { "-".to_string() } else { s };

    let mut out = String::new();
    out.push_str(&format!("#{} {}\n", e.id(), bold(e.name())));
    if let Some(d) = e.date_added() {
        out.push_str(&format!("Added:  {d}\n"));
    }
    out.push_str(&format!(
        "Plus:   {}  (hours {}, minutes {})\n",
        format_minutes(e.plus_minutes(), true),
        dash(ph),
        dash(pm)
    ));
    out.push_str(&format!(
        "Minus:  {}  (hours {}, minutes {})\n",
        format_minutes(e.minus_minutes(), false),
        dash(mh),
        dash(mm)
    ));
    out.push_str(&format!("Sum:    {}\n", format_minutes(e.sum(), true)));
    out
}
