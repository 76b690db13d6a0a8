use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use martini_cnt::engine::progress::{Progress, ProgressSink};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::warn;

const SPINNER_TICK_MS: u64 = 80;

/// Renders engine progress events on stderr with a single reusable bar.
///
/// Ring placement shows a counted bar; the short topology and writing
/// stages show a spinner that collapses into a check mark. Written files are
/// listed on stdout by the command, so the bar only names the latest one.
#[derive(Clone)]
pub struct CliProgressHandler {
    bar: Arc<Mutex<ProgressBar>>,
}

impl CliProgressHandler {
    pub fn new() -> Self {
        Self::with_draw_target(ProgressDrawTarget::stderr())
    }

    fn with_draw_target(target: ProgressDrawTarget) -> Self {
        let bar = ProgressBar::with_draw_target(Some(0), target).with_style(spinner_style());
        bar.finish_and_clear();
        Self {
            bar: Arc::new(Mutex::new(bar)),
        }
    }

    pub fn sink(&self) -> ProgressSink<'static> {
        let bar = self.bar.clone();

        Box::new(move |progress: Progress| {
            let Ok(bar) = bar.lock() else {
                warn!("Progress bar mutex was poisoned; dropping event.");
                return;
            };

            match progress {
                Progress::StageStarted(stage) => {
                    bar.reset();
                    bar.set_length(0);
                    bar.set_style(spinner_style());
                    bar.enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));
                    bar.set_message(stage.to_string());
                }
                Progress::RingPlaced { ring, num_rings } => {
                    if ring == 0 {
                        bar.disable_steady_tick();
                        bar.set_length(num_rings as u64);
                        bar.set_style(ring_bar_style());
                    }
                    bar.set_position(ring as u64 + 1);
                }
                Progress::TopologyEnumerated {
                    bonds,
                    angles,
                    dihedrals,
                } => {
                    bar.set_message(format!(
                        "{} bonds, {} angles, {} dihedrals",
                        bonds, angles, dihedrals
                    ));
                }
                Progress::FileWritten { path } => {
                    let name = path
                        .file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_else(|| path.display().to_string());
                    bar.set_message(name);
                }
                Progress::StageFinished(stage) => {
                    bar.disable_steady_tick();
                    bar.finish_with_message(format!("✓ {}", stage));
                }
            }
        })
    }
}

impl Default for CliProgressHandler {
    fn default() -> Self {
        Self::new()
    }
}

fn spinner_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.green} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
}

fn ring_bar_style() -> ProgressStyle {
    ProgressStyle::with_template("{msg:<22} [{bar:30.cyan/blue}] {pos}/{len} rings")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("##-")
}
