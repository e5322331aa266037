//! Stdin helpers shared by interactive commands.

use std::io::BufRead;

/// Reads one line from the given input, trimming the trailing newline.
/// Returns `None` on EOF or a read error, which drivers treat as the end
/// of the session.
pub fn read_stdin_line(stdin: &mut dyn BufRead) -> Option<String> {
    let mut line = String::new();
    match stdin.read_line(&mut line) {
        Ok(0) => None,
        Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
        Err(_) => None,
    }
}
