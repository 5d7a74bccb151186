//! Column schema: the single source of truth for table layout.
//!
//! Header, separator, and every data row are generated by walking this same
//! ordered list, so column boundaries cannot drift between lines.

/// One table column: header label plus nominal width.
#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub label: &'static str,
    pub width: usize,
}

pub const NUM_COLUMNS: usize = 7;

pub const COLUMNS: [Column; NUM_COLUMNS] = [
    Column { label: "OPID", width: 8 },
    Column { label: "TIME", width: 6 },
    Column { label: "OP", width: 10 },
    Column { label: "NAMESPACE", width: 30 },
    Column { label: "COMMAND", width: 12 },
    Column { label: "PLAN", width: 10 },
    Column { label: "CLIENT", width: 20 },
];
