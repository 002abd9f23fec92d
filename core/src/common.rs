//! Console utilities for the navfuse binary: logger setup and the
//! interactive scenario prompt.

use std::error::Error;
use std::io;
use std::path::PathBuf;

/// Initialize the logger with the specified configuration.
///
/// # Arguments
/// * `log_level` - Log level string (off, error, warn, info, debug, trace)
/// * `log_file` - Optional path to log file (logs to stderr if None)
///
/// # Errors
/// Returns an error if the log file cannot be opened or logger
/// initialization fails.
pub fn init_logger(log_level: &str, log_file: Option<&PathBuf>) -> Result<(), Box<dyn Error>> {
    use std::io::Write;

    let level = log_level.parse::<log::LevelFilter>().unwrap_or_else(|_| {
        eprintln!("Invalid log level '{}', defaulting to 'info'", log_level);
        log::LevelFilter::Info
    });

    let mut builder = env_logger::Builder::new();
    builder.filter_level(level);
    builder.format(|buf, record| {
        writeln!(
            buf,
            "{} [{}] - {}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
            record.level(),
            record.args()
        )
    });

    if let Some(log_path) = log_file {
        if let Some(parent) = log_path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let target = Box::new(
            std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(log_path)?,
        );
        builder.target(env_logger::Target::Pipe(target));
    }

    builder.try_init()?;
    Ok(())
}

/// Read a line from stdin, trimming whitespace and checking for quit command.
///
/// # Returns
/// - `None` if user enters empty input or presses Enter
/// - `Some(String)` with the trimmed input otherwise
///
/// # Panics
/// Exits the process if user enters 'q' or 'Q'.
pub fn read_user_input() -> Option<String> {
    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .expect("Failed to read line");
    let input = input.trim();

    if input.eq_ignore_ascii_case("q") {
        std::process::exit(0);
    }

    if input.is_empty() {
        None
    } else {
        Some(input.to_string())
    }
}

/// Parse one scenario prompt entry; `None` means re-prompt.
fn parse_scenario_input(input: &str) -> Option<u8> {
    input.trim().parse::<u8>().ok()
}

/// Prompt for the wind scenario code.
///
/// Re-prompts on non-numeric input. Any parsed number is passed through
/// unvalidated: out-of-range codes are rejected downstream with an
/// invalid-scenario failure rather than another prompt.
pub fn prompt_scenario() -> u8 {
    loop {
        println!(
            "Select scenario (1 - calm conditions, 2 - moderate wind, 3 - strong wind, or 'q' to quit):"
        );
        match read_user_input() {
            Some(input) => match parse_scenario_input(&input) {
                Some(code) => return code,
                None => println!("Error: Please enter a number.\n"),
            },
            None => println!("Error: Scenario cannot be empty. Please try again.\n"),
        }
    }
}
