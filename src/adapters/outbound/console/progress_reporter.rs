use crate::ports::outbound::ProgressReporter;

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// Progress goes to stderr so it never mixes with a report written to
/// stdout. In quiet mode only errors are printed.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrProgressReporter {
    quiet: bool,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self { quiet: false }
    }

    /// Reporter that only prints errors and warnings
    pub fn quiet() -> Self {
        Self { quiet: true }
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        if !self.quiet {
            eprintln!("{}", message);
        }
    }

    fn report_error(&self, message: &str) {
        eprintln!("{}", message);
    }

    fn report_completion(&self, message: &str) {
        if !self.quiet {
            eprintln!();
            eprintln!("{}", message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reporter_modes() {
        assert!(!StderrProgressReporter::new().is_quiet());
        assert!(!StderrProgressReporter::default().is_quiet());
        assert!(StderrProgressReporter::quiet().is_quiet());
    }

    #[test]
    fn test_reporter_does_not_panic() {
        for reporter in [StderrProgressReporter::new(), StderrProgressReporter::quiet()] {
            reporter.report("📖 Loading vendor dataset");
            reporter.report_error("⚠️  Warning: skipped");
            reporter.report_completion("📊 Compared 2 vendor(s)");
        }
    }
}
