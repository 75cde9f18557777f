use std::process::ExitCode;

use anyhow::Result;
use artipub_publish::{PublishError, Published, publish};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::cli::App;
use crate::config::Settings;
use crate::progress::UploadTracker;

mod cli;
mod config;
mod progress;

#[tokio::main]
async fn main() -> ExitCode {
    let app = App::parse();
    init_tracing(app.verbose);

    match run(&app).await {
        Ok(published) => {
            if published.dry_run {
                println!("Dry run: nothing was sent to {}", published.url);
            }
            println!("Upload successfully finished!");
            ExitCode::SUCCESS
        }
        Err(err) => {
            match err.downcast_ref::<PublishError>() {
                Some(e) => println!("Upload failed! {e}{}", hint(e)),
                None => println!("Upload failed! {err:#}"),
            }
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(app: &App) -> Result<Published> {
    let settings = Settings::resolve(app)?;

    let tracker = (!app.quiet).then(UploadTracker::new);
    let mut options = settings.options;
    if let Some(ref tracker) = tracker {
        options = options.on_progress(tracker.callback());
    }

    let result = publish(settings.file, &settings.target, &options).await;
    if let Some(tracker) = tracker {
        tracker.finish();
    }

    let published = result?;
    info!(
        url = %published.url,
        md5 = published.digests.md5().unwrap_or_default(),
        sha1 = published.digests.sha1().unwrap_or_default(),
        bytes = published.bytes_sent,
        "published"
    );
    Ok(published)
}

fn hint(err: &PublishError) -> &'static str {
    match err.status() {
        Some(401) | Some(403) => " (check the user name and password)",
        Some(409) => " (the artifact may already exist)",
        Some(404) => " (check the repository in the target url)",
        _ => "",
    }
}
