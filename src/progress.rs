//! Progress reporting on stderr

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

use console::{Term, style};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};

use crate::constants::progress::{SPINNER_FRAMES, TICK_INTERVAL};
use crate::utils::string::pluralize;

// Progress bar style templates as constants
const PROGRESS_BAR_TEMPLATE: &str =
    "{msg} [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {per_sec}";
const SPINNER_TEMPLATE: &str = "{spinner:.cyan} {msg}";

/// Status lines and progress bars on stderr
pub struct ProgressReporter {
    term: Term,
    spinner_position: AtomicUsize,
    multi_progress: MultiProgress,
    current_bar: Option<ProgressBar>,
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            term: Term::stderr(),
            spinner_position: AtomicUsize::new(0),
            multi_progress: MultiProgress::new(),
            current_bar: None,
        }
    }

    pub fn create_progress_bar(&mut self, len: u64, message: &str) -> ProgressBar {
        let pb = self.multi_progress.add(ProgressBar::new(len));
        pb.set_style(
            ProgressStyle::default_bar()
                .template(PROGRESS_BAR_TEMPLATE)
                .expect("Progress bar template should be valid")
                .progress_chars("█▉▊▋▌▍▎▏ "),
        );
        pb.set_message(message.to_string());
        pb.enable_steady_tick(TICK_INTERVAL);
        pb
    }

    pub fn create_spinner(&mut self, message: &str) -> ProgressBar {
        let pb = self.multi_progress.add(ProgressBar::new_spinner());
        pb.set_style(
            ProgressStyle::default_spinner()
                .template(SPINNER_TEMPLATE)
                .expect("Spinner template should be valid")
                .tick_strings(SPINNER_FRAMES),
        );
        pb.set_message(message.to_string());
        pb.enable_steady_tick(TICK_INTERVAL);
        pb
    }

    fn next_frame(&self) -> &'static str {
        let pos = self.spinner_position.fetch_add(1, Ordering::Relaxed) % SPINNER_FRAMES.len();
        SPINNER_FRAMES[pos]
    }

    pub fn start_discovery(&mut self) {
        let _ = self.term.clear_line();
        eprintln!("{} Discovering course plans...", style("🔍").cyan());
        let spinner = self.create_spinner("Scanning for .toml and .json files...");
        self.current_bar = Some(spinner);
    }

    pub fn found_plan(&self, path: &Path) {
        if let Some(ref pb) = self.current_bar {
            pb.set_message(format!("Found: {}", path.display()));
        } else {
            let _ = self.term.clear_line();
            eprint!(
                "\r{} Found: {}... ",
                style(self.next_frame()).cyan(),
                style(path.display()).dim()
            );
        }
    }

    pub fn finish_discovery(&mut self, count: usize) {
        if let Some(pb) = self.current_bar.take() {
            pb.finish_and_clear();
        }
        let _ = self.term.clear_line();
        if count == 0 {
            eprintln!("\r{} No course plans found", style("✗").red());
        } else {
            eprintln!(
                "\r{} Discovery complete: found {} {}",
                style("✓").green(),
                style(count).yellow().bold(),
                pluralize("plan", count)
            );
        }
    }

    /// Progress bar for deciding `total` plans; ticked by the caller
    pub fn start_checking(&mut self, total: usize) -> ProgressBar {
        eprintln!("\n{} Checking prerequisites...", style("🔄").yellow());
        let pb = self.create_progress_bar(total as u64, "Checking plans");
        self.current_bar = Some(pb.clone());
        pb
    }

    /// Progress bar for timing `total` plan/strategy runs
    pub fn start_benchmark(&mut self, total: usize, iterations: u32) -> ProgressBar {
        eprintln!(
            "\n{} Timing {} {} per run...",
            style("⏱").yellow(),
            style(iterations).yellow().bold(),
            pluralize("decision", iterations as usize)
        );
        let pb = self.create_progress_bar(total as u64, "Benchmarking");
        self.current_bar = Some(pb.clone());
        pb
    }

    pub fn update_plan_progress(&self, plan_name: &str) {
        if let Some(ref pb) = self.current_bar {
            pb.set_message(format!("Plan: {plan_name}"));
            pb.inc(1);
        }
    }

    pub fn finish_progress(&mut self) {
        if let Some(pb) = self.current_bar.take() {
            pb.finish_and_clear();
        }
    }

    pub fn finish_checking(&mut self, blocked_plans: usize) {
        self.finish_progress();
        if blocked_plans == 0 {
            eprintln!(
                "{} Every plan can be finished! {}",
                style("✓").green().bold(),
                style("🎓").dim()
            );
        } else {
            eprintln!(
                "{} {} {} cannot be finished",
                style("⚠").yellow().bold(),
                style(blocked_plans).red().bold(),
                pluralize("plan", blocked_plans)
            );
        }
    }
}
