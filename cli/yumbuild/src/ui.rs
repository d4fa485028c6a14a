//! Terminal output rendering.
//!
//! All of this is cosmetic: the build contract is exit codes and files on
//! disk. Styling degrades gracefully on non-terminals via `console`.

use std::path::Path;

use console::{style, Term};
use yum_build::Reporter;
use yum_targets::Platform;

/// Section header, e.g. `==> BUILD: RELEASE`.
pub fn header(title: &str) {
    println!("\n{} {}", style("==>").cyan().bold(), style(title).cyan().bold());
}

/// Green completion line.
pub fn success(msg: &str) {
    println!("{}", style(msg).green());
}

/// Red failure line on stderr.
pub fn fail(msg: &str) {
    eprintln!("{}", style(msg).red());
}

/// Dim informational note.
pub fn note(msg: &str) {
    println!("{}", style(msg).dim());
}

/// Render a `[████░░░░]  50%` progress bar.
pub fn bar(current: usize, total: usize, width: usize) -> String {
    if total == 0 {
        return format!("[{}]   0%", "░".repeat(width));
    }
    let filled = (current * width / total).min(width);
    let percent = current * 100 / total;
    format!(
        "[{}{}] {percent:3}%",
        "█".repeat(filled),
        "░".repeat(width - filled)
    )
}

const BAR_WIDTH: usize = 24;

/// Renders build progress on the terminal.
pub struct ConsoleReporter {
    term: Term,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self {
            term: Term::stdout(),
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for ConsoleReporter {
    fn platform_started(&self, platform: &Platform, index: usize, total: usize) {
        header(&platform.description);
        note(&format!("{} target {index}/{total}", bar(index, total, BAR_WIDTH)));
    }

    fn compiling(&self, source: &Path, index: usize, total: usize) {
        let _ = self.term.clear_line();
        let line = format!(
            "{} {}  {}",
            style("Compiling").cyan().bold(),
            bar(index, total, BAR_WIDTH),
            style(source.display()).dim()
        );
        let _ = self.term.write_str(&format!("\r{line}"));
    }

    fn linking(&self, _platform: &Platform) {
        let _ = self.term.write_line("");
        println!("{}", style("Linking...").cyan().bold());
    }

    fn artifact_built(&self, path: &Path) {
        success(&format!("Built → {}", path.display()));
    }
}
