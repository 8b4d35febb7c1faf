use console::{Term, style};
use indicatif::{ProgressBar, ProgressStyle};

use crate::constants::progress::{SPINNER_FRAMES, TICK_INTERVAL};
use crate::graph::BuildOutcome;
use crate::utils::string::pluralize;

const SPINNER_TEMPLATE: &str = "{spinner:.cyan} {msg} [{elapsed}]";

/// Spinner feedback while a dependency graph is being built
///
/// Meant for interactive terminals only; callers create one when stderr is a
/// terminal and pass `None` to the builder otherwise.
pub struct ProgressReporter {
    term: Term,
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
            current_bar: None,
        }
    }

    /// Create a reporter when stderr is an interactive terminal
    pub fn for_terminal() -> Option<Self> {
        Term::stderr().is_term().then(Self::new)
    }

    fn create_spinner(&self, message: &str) -> ProgressBar {
        let style = ProgressStyle::default_spinner()
            .template(SPINNER_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(SPINNER_FRAMES);

        let pb = ProgressBar::new_spinner();
        pb.set_style(style);
        pb.set_message(message.to_string());
        pb.enable_steady_tick(TICK_INTERVAL);
        pb
    }

    pub fn start_build(&mut self, root: &str) {
        let _ = self.term.clear_line();
        self.current_bar = Some(self.create_spinner(&format!("Resolving {root}...")));
    }

    /// Called once per newly discovered package
    pub fn resolving_package(&self, package: &str, discovered: usize) {
        if let Some(ref pb) = self.current_bar {
            pb.set_message(format!(
                "Resolving {} ({} {} discovered)",
                package,
                discovered,
                pluralize("package", discovered)
            ));
        }
    }

    pub fn finish_build(&mut self, outcome: &BuildOutcome) {
        if let Some(pb) = self.current_bar.take() {
            pb.finish_and_clear();
        }
        let _ = self.term.clear_line();

        let nodes = outcome.graph().node_count();
        eprintln!(
            "{} Resolved {} {}",
            style("✓").green(),
            style(nodes).yellow().bold(),
            pluralize("package", nodes)
        );
    }
}
