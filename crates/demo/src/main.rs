mod config;
mod session;

use config::DemoConfig;
use contactbook_core::Clock;

fn main() -> anyhow::Result<()> {
    match DemoConfig::log_format_from_env() {
        Some(format) => contactbook_observability::tracing::init(format),
        None => contactbook_observability::init(),
    }

    let config = DemoConfig::from_env();
    let today = config.clock().today();
    tracing::info!(
        %today,
        window_days = config.window_days,
        log_format = ?config.log_format,
        "starting contact book demo"
    );

    let (book, transcript) = session::run(today, config.window_days)?;
    for line in &transcript.lines {
        println!("{line}");
    }

    tracing::info!(contacts = book.len(), "demo finished");
    Ok(())
}
