//! Text table rendering for CLI output

use console::Style;
use pagesizelib::{GroupRecord, SizeTable};

/// Gap between columns
const COLUMN_GAP: &str = "  ";

/// Print a size table with padded columns and styled headers.
pub fn print_table(table: &SizeTable) {
    let rows: Vec<[String; 4]> = table.rows.iter().map(row_cells).collect();

    let mut widths: Vec<usize> = table.headers.iter().map(|h| h.chars().count()).collect();
    for cells in &rows {
        for (width, cell) in widths.iter_mut().zip(cells.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let bold = Style::new().bold();
    println!("{}", bold.apply_to(format_line(&table.headers, &widths)));

    let total_width =
        widths.iter().sum::<usize>() + COLUMN_GAP.len() * (widths.len().saturating_sub(1));
    println!("{}", "-".repeat(total_width));

    for cells in &rows {
        println!("{}", format_line(cells.as_slice(), &widths));
    }

    println!("{}", "-".repeat(total_width));
    println!("{}", bold.apply_to(&table.footer));
}

/// The four display cells of a record. The page count is right-aligned by
/// [`format_line`] because it is the only numeric column.
fn row_cells(record: &GroupRecord) -> [String; 4] {
    [
        record.page_count.to_string(),
        record.dimension.clone(),
        record.paper_size.clone(),
        record.pages.clone(),
    ]
}

fn format_line<S: AsRef<str>>(cells: &[S], widths: &[usize]) -> String {
    let formatted: Vec<String> = cells
        .iter()
        .zip(widths.iter())
        .enumerate()
        .map(|(i, (cell, &width))| {
            if i == 0 {
                format!("{:>width$}", cell.as_ref(), width = width)
            } else {
                format!("{:<width$}", cell.as_ref(), width = width)
            }
        })
        .collect();
    formatted.join(COLUMN_GAP).trim_end().to_string()
}
