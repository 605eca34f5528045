/// Key binding reference shown in the help popup
///
/// Entries with an empty key render as category headers; fully empty entries
/// render as blank spacing lines.
pub const HELP_ENTRIES: &[(&str, &str)] = &[
    ("", "NAVIGATION"),
    ("Up/Down or k/j", "Select input row"),
    ("Left/Right or h/l", "Step the selected value"),
    ("1 / 2 / 3", "Set distribution tier directly"),
    ("e", "Type an exact value for the selected field"),
    ("", ""),
    ("", "RESULTS"),
    ("Enter", "Reveal the audit results panel"),
    ("y", "Copy the report to the clipboard"),
    ("o", "Open the booking page in your browser"),
    ("", ""),
    ("", "GENERAL"),
    ("F1 or ?", "Toggle this help"),
    ("q / Esc / Ctrl+C", "Quit (prints the report if revealed)"),
];

pub const HELP_FOOTER: &str = " j/k scroll · Esc close ";
