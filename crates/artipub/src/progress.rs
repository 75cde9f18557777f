use std::sync::Arc;

use artipub_publish::{Progress, ProgressCallback, PublishPhase};
use indicatif::{ProgressBar, ProgressStyle};
use once_cell::sync::Lazy;

const PB_STYLE: &str = "{spinner:.blue} {prefix:>12.cyan.bold} [{elapsed_precise}] {wide_bar:.cyan/blue} {bytes}/{total_bytes} ({bytes_per_sec}, {eta})";

const TICK: &str = "⠁⠂⠄⡀⢀⠠⠐⠈ ";

const PB_CHARS: &str = "█▓▒░  ";

static PB_TEMPLATE: Lazy<Option<ProgressStyle>> = Lazy::new(|| {
    let pb_style = match ProgressStyle::with_template(PB_STYLE) {
        Ok(pb_style) => pb_style.tick_chars(TICK).progress_chars(PB_CHARS),
        Err(_) => return None,
    };

    Some(pb_style)
});

/// Terminal progress bar fed by the publish progress callback.
///
/// Draws to stderr and stays invisible when stderr is not a terminal.
pub struct UploadTracker {
    pb: ProgressBar,
}

impl UploadTracker {
    pub fn new() -> Self {
        let pb = ProgressBar::new(0);
        let pb = match PB_TEMPLATE.as_ref() {
            Some(style) => pb.with_style(style.clone()),
            None => pb,
        };
        Self { pb }
    }

    pub fn callback(&self) -> ProgressCallback {
        let pb = self.pb.clone();
        Arc::new(move |progress: &Progress| update(&pb, progress))
    }

    pub fn finish(self) { self.pb.finish_and_clear(); }
}

fn update(pb: &ProgressBar, progress: &Progress) {
    match progress.phase {
        PublishPhase::Digesting | PublishPhase::Transmitting => {
            if let Some(total) = progress.total_bytes {
                pb.set_length(total);
            }
            pb.set_prefix(progress.phase.to_string());
            pb.set_position(progress.bytes);
        }
        PublishPhase::BuildingRequest | PublishPhase::InterpretingResponse => {
            pb.set_prefix(progress.phase.to_string());
        }
        PublishPhase::Completed => pb.finish_and_clear(),
    }
}
