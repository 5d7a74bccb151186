use crate::snapshot::OperationRecord;
use crate::table::schema::{COLUMNS, NUM_COLUMNS};

const CELL_SEP: &str = " | ";

/// Left-justify `text` to at least `width`, padding with spaces on the
/// right. Values are never truncated: an overflowing cell misaligns the
/// columns after it on that line only, which is accepted.
fn pad(text: &str, width: usize) -> String {
    format!("{:<width$}", text, width = width)
}

/// Derive the display cells for one operation, one per column, unpadded.
pub fn extract_row(record: &OperationRecord) -> [String; NUM_COLUMNS] {
    [
        record.opid(),
        format!("{}s", record.secs_running()),
        record.op_type(),
        record.namespace(),
        record.command_target(),
        record.plan_summary(),
        record.client(),
    ]
}

fn join_line(cells: &[String; NUM_COLUMNS]) -> String {
    COLUMNS
        .iter()
        .zip(cells)
        .map(|(col, cell)| pad(cell, col.width))
        .collect::<Vec<_>>()
        .join(CELL_SEP)
}

fn header_line() -> String {
    COLUMNS
        .iter()
        .map(|col| pad(col.label, col.width))
        .collect::<Vec<_>>()
        .join(CELL_SEP)
}

/// Dashes spanning the full nominal table width: the padded widths plus the
/// separators between columns, i.e. the exact length of a non-overflowing
/// row line.
fn separator_line() -> String {
    let total: usize =
        COLUMNS.iter().map(|col| col.width + CELL_SEP.len()).sum::<usize>() - CELL_SEP.len();
    "-".repeat(total)
}

/// Render the whole table: 1 header line, 1 separator line, then one line
/// per record in the order received.
pub fn render_lines(records: &[OperationRecord]) -> Vec<String> {
    let mut lines = Vec::with_capacity(records.len() + 2);
    lines.push(header_line());
    lines.push(separator_line());
    for record in records {
        lines.push(join_line(&extract_row(record)));
    }
    lines
}
