//! Status output for outcode
//!
//! Standard output is reserved for report entries, so every status message
//! goes to standard error.

use console::style;

/// Output handler for consistent CLI formatting
pub struct Output {
    verbose: bool,
    quiet: bool,
}

impl Output {
    /// Create a new output handler
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        if !self.quiet {
            eprintln!("{} {}", style("✔").green().for_stderr(), message);
        }
    }

    /// Print a warning message
    pub fn warning(&self, message: &str) {
        if !self.quiet {
            eprintln!("{} {}", style("⚠").yellow().for_stderr(), message);
        }
    }

    /// Print an info message
    pub fn info(&self, message: &str) {
        if !self.quiet {
            eprintln!("{} {}", style("ℹ").blue().for_stderr(), message);
        }
    }

    /// Print a verbose summary with styling
    pub fn verbose_summary(&self, icon: &str, message: &str, count: usize) {
        if self.verbose && !self.quiet {
            eprintln!(
                "{} {} {}",
                style(icon).cyan().for_stderr(),
                style(message).dim().for_stderr(),
                style(format!("({})", count)).yellow().bold().for_stderr()
            );
        }
    }

    /// Print a verbose breakdown item
    pub fn verbose_breakdown(&self, label: &str) {
        if self.verbose && !self.quiet {
            eprintln!("  {} {}", style("•").cyan().for_stderr(), style(label).dim().for_stderr());
        }
    }

    /// Print a key-value pair with consistent styling
    pub fn key_value(&self, key: &str, value: &str) {
        if !self.quiet {
            eprintln!("  {:<12} {}", style(key).dim().for_stderr(), value);
        }
    }
}
