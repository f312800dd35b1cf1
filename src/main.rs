//! Ruler Ticks entry point
//!
//! Parses command-line parameters and prints the generated ticks as JSON.

fn main() {
    env_logger::init();
    log::debug!("ruler-ticks starting");

    if let Err(error) = ruler_ticks::cli::run_from_env() {
        eprintln!("{error}");
        std::process::exit(error.exit_code());
    }
}
