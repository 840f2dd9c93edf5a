//! Plancheck - workout plan rest/rpe checker

fn main() {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let code = match plancheck_tools::cli::run(std::env::args_os(), &mut out) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("Failed to write report: {e}");
            plancheck_tools::EXIT_FAILED
        }
    };

    std::process::exit(code);
}
