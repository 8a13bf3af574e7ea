use anyhow::{Context, Result};

use crate::caption::time::{format_time, parse_time};
use crate::cli::args::TimeArgs;

/// `HH:MM:SS` in, seconds out; plain seconds in, `HH:MM:SS` out.
pub fn convert(value: &str) -> Result<String> {
    let value = value.trim();
    if value.contains(':') {
        let seconds = parse_time(value)?;
        Ok(seconds.to_string())
    } else {
        let seconds: u64 = value
            .parse()
            .with_context(|| format!("Invalid seconds value: {:?}", value))?;
        Ok(format_time(seconds))
    }
}

pub async fn execute(args: TimeArgs) -> Result<()> {
    let output = convert(&args.value)?;
    tracing::debug!("{} -> {}", args.value, output);
    println!("{}", output);
    Ok(())
}
