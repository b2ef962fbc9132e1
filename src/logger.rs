use std::io::{self, Write};

fn timestamp() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Diagnostics go to stderr; stdout carries only the `Created` lines.
pub fn log_line(line: &str) {
    let _ = writeln!(io::stderr().lock(), "[{}] {}", timestamp(), line);
}

pub fn log_command(program: &str, args: &[String]) {
    let joined = args.join(" ");
    log_line(&format!("RUN: {} {}", program, joined));
}
