/// Strip a trailing `\n` or `\r\n` and nothing else.
pub fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// True when the line asks to leave the chat. Case-insensitive, no trimming.
pub fn is_exit_command(line: &str) -> bool {
    strip_line_ending(line).eq_ignore_ascii_case("exit")
}
