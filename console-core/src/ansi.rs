//! VT100/ANSI control sequences understood by the display's console driver

/// Hide the text cursor (DECTCEM reset)
pub const HIDE_CURSOR: &str = "\x1b[?25l";

/// Show the text cursor (DECTCEM set)
pub const SHOW_CURSOR: &str = "\x1b[?25h";

/// Erase the whole display, then home the cursor to (1,1)
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Erase from the cursor to the end of the line
pub const ERASE_TO_EOL: &str = "\x1b[K";

/// Cursor position (CUP). Parameters are 1-based and ordered row;column.
pub fn cursor_position(row: i32, column: i32) -> String {
    format!("\x1b[{};{}H", row, column)
}
