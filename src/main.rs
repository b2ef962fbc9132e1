use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use pixicon::logger::{log_command, log_line};
use pixicon::produce_icon_set;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    log_command("pixicon", &args);

    let Some(source) = args.first().map(PathBuf::from) else {
        eprintln!("usage: pixicon <image-path>");
        return ExitCode::from(2);
    };

    let stdout = io::stdout();
    match produce_icon_set(&source, Path::new("."), &mut stdout.lock()) {
        Ok(written) => {
            log_line(&format!("Icon set complete: {} files", written.len()));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
