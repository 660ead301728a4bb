//! Execution context shared by command-backed collaborators.

/// Execution context for delegated commands.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// If true, log commands without executing them
    pub dry_run: bool,
    /// If true, print commands as they execute
    pub verbose: bool,
}

impl Context {
    /// Set dry run mode.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Set verbose mode.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}
