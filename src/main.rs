use std::process::ExitCode;

fn main() -> ExitCode {
    match hfgrab::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Error: {error}");
            ExitCode::FAILURE
        }
    }
}
