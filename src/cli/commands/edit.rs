use crate::app::App;
use crate::cli::args::EditArgs;
use crate::cli::launch_tui;
use crate::config::Config;
use anyhow::Result;

pub async fn execute(args: EditArgs, config: Config) -> Result<()> {
    let mut app = App::new(config);

    // Open the editor on the given video before touching the terminal,
    // so a bad URL or duration is reported on the plain console
    if let Some(url) = args.url.as_deref() {
        app.preload(url, args.duration.as_deref())?;
        tracing::info!("Opening {}", url);
    }

    launch_tui(app).await
}
