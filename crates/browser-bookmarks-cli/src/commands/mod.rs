use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use browser_bookmarks_core::{BrowserBookmarks, HostEvent, HostResponse, Preferences};
use tracing::{info, warn};

use crate::cli::{Cli, Commands};

mod support;

use self::support::{build_config, open_url, print_json};

pub(crate) fn run(cli: Cli) -> Result<()> {
    let config = build_config(cli.home, cli.extra_paths);

    match cli.command {
        Commands::Serve => {
            let mut app = BrowserBookmarks::with_preferences(config, Preferences::default());
            info!(sources = app.sources().len(), "serving launcher host events");
            let stdin = io::stdin().lock();
            let stdout = io::stdout().lock();
            serve(&mut app, stdin, stdout)?;
        }
        Commands::Query(args) => {
            let app = BrowserBookmarks::with_preferences(config, Preferences::default());
            let query = args.query();
            let items = app.get_items(Some(query.as_str()));
            print_json(&HostResponse::RenderResultList { items })?;
        }
        Commands::Sources => {
            let app = BrowserBookmarks::with_preferences(config, Preferences::default());
            print_json(&app.sources())?;
        }
        Commands::Open(args) => {
            open_url(&args.url)?;
        }
    }
    Ok(())
}

/// Reads one host event per line and writes one response per line.
///
/// Undecodable lines get an error response; the loop only stops at end of
/// input or when the host side of stdout goes away.
pub(crate) fn serve<R: BufRead, W: Write>(
    app: &mut BrowserBookmarks,
    input: R,
    mut output: W,
) -> Result<()> {
    for line in input.lines() {
        let line = line.context("failed to read host event")?;
        if line.trim().is_empty() {
            continue;
        }
        let response = match HostEvent::decode(&line) {
            Ok(event) => app.handle_event(event),
            Err(err) => {
                warn!(code = err.code(), error = %err, "rejecting host event");
                HostResponse::from_error(&err, "host.decode")
            }
        };
        writeln!(output, "{}", response.encode()?).context("failed to write host response")?;
        output.flush().context("failed to flush host response")?;
    }
    Ok(())
}
