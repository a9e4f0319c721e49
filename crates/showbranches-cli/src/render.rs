use console::{Alignment, measure_text_width, pad_str, style};

use showbranches_core::{BranchRow, BranchTable, HEADER};

/// Render a boxed table with a header row. The header is always present,
/// even with no rows. `styled` allows a bold header when the terminal
/// supports it.
pub fn render_table(table: &BranchTable, styled: bool) -> String {
    let rows: Vec<[&str; 4]> = table.rows.iter().map(BranchRow::cells).collect();

    let mut widths = HEADER.map(measure_text_width);
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(measure_text_width(cell));
        }
    }

    let mut out = String::new();
    out.push_str(&border(&widths, '┌', '┬', '┐'));

    let header: Vec<String> = if styled {
        HEADER.iter().map(|h| style(h).bold().to_string()).collect()
    } else {
        HEADER.iter().map(|h| h.to_string()).collect()
    };
    out.push_str(&line(header.iter().map(String::as_str), &widths));
    out.push_str(&border(&widths, '├', '┼', '┤'));

    for row in &rows {
        out.push_str(&line(row.iter().copied(), &widths));
    }
    out.push_str(&border(&widths, '└', '┴', '┘'));
    out
}

fn border(widths: &[usize], left: char, mid: char, right: char) -> String {
    let mut s = String::new();
    s.push(left);
    for (i, w) in widths.iter().enumerate() {
        if i > 0 {
            s.push(mid);
        }
        s.push_str(&"─".repeat(w + 2));
    }
    s.push(right);
    s.push('\n');
    s
}

fn line<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    let mut s = String::from("│");
    for (cell, w) in cells.zip(widths) {
        s.push(' ');
        s.push_str(&pad_str(cell, *w, Alignment::Left, None));
        s.push_str(" │");
    }
    s.push('\n');
    s
}
