//! Progress display for batches of generated levels

use crate::io::configuration::{MIN_LEVELS_FOR_PROGRESS, PROGRESS_BAR_WIDTH};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Levels: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks how many levels of a batch have been generated
///
/// Single-level runs stay silent; the bar only appears for real batches.
pub struct ProgressManager {
    bar: Option<ProgressBar>,
    completed: usize,
    slowest: Duration,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create an idle progress manager
    pub const fn new() -> Self {
        Self {
            bar: None,
            completed: 0,
            slowest: Duration::ZERO,
        }
    }

    /// Prepare the display for a batch of `level_count` levels
    pub fn initialize(&mut self, level_count: usize) {
        self.completed = 0;
        self.slowest = Duration::ZERO;
        if level_count >= MIN_LEVELS_FOR_PROGRESS {
            let bar = ProgressBar::new(level_count as u64);
            bar.set_style(BATCH_STYLE.clone());
            self.bar = Some(bar);
        }
    }

    /// Show which seed is being generated
    pub fn start_level(&self, seed: u64) {
        if let Some(ref bar) = self.bar {
            bar.set_message(format!("seed {seed}"));
        }
    }

    /// Record a finished level and its generation time
    pub fn complete_level(&mut self, elapsed: Duration) {
        self.completed += 1;
        self.slowest = self.slowest.max(elapsed);
        if let Some(ref bar) = self.bar {
            bar.inc(1);
        }
    }

    /// Number of levels completed so far
    pub const fn completed(&self) -> usize {
        self.completed
    }

    /// Longest time any single level took
    pub const fn slowest(&self) -> Duration {
        self.slowest
    }

    /// Whether a progress bar is being drawn
    pub const fn is_visible(&self) -> bool {
        self.bar.is_some()
    }

    /// Clean up the progress display
    pub fn finish(&self) {
        if let Some(ref bar) = self.bar {
            bar.finish_and_clear();
        }
    }
}
