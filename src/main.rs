use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(err) = regbench::app::run() {
        eprintln!("regbench: {err}");
        return ExitCode::from(err.exit_code());
    }
    ExitCode::SUCCESS
}
