const MAX_CELL_WIDTH: usize = 80;

pub fn print_table(headers: Vec<&str>, rows: Vec<Vec<String>>) {
    if rows.is_empty() {
        println!("No items to display.");
        return;
    }

    let rows: Vec<Vec<String>> = rows
        .into_iter()
        .map(|row| row.into_iter().map(|cell| truncate(&cell)).collect())
        .collect();

    let mut column_widths = headers.iter().map(|h| h.len()).collect::<Vec<_>>();

    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            if cell.len() > column_widths[i] {
                column_widths[i] = cell.len();
            }
        }
    }

    // Print header
    for (i, header) in headers.iter().enumerate() {
        print!("{:<width$}  ", header, width = column_widths[i]);
    }
    println!();

    // Print separator
    for width in &column_widths {
        print!("{:-<width$}  ", "", width = width);
    }
    println!();

    // Print rows
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            print!("{:<width$}  ", cell, width = column_widths[i]);
        }
        println!();
    }
}

/// Collapse newlines and clamp long cells so agent output stays on one row.
fn truncate(cell: &str) -> String {
    let flat = cell.trim().replace('\n', " ");
    if flat.chars().count() <= MAX_CELL_WIDTH {
        return flat;
    }
    let clipped: String = flat.chars().take(MAX_CELL_WIDTH - 3).collect();
    format!("{clipped}...")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_clamps_long_cells() {
        let long = "x".repeat(200);
        let out = truncate(&long);
        assert_eq!(out.chars().count(), MAX_CELL_WIDTH);
        assert!(out.ends_with("..."));
    }

    #[test]
    fn truncate_flattens_newlines() {
        assert_eq!(truncate("a\nb"), "a b");
    }
}
