use crate::{
    cli::Args,
    config::Config,
    constants::COMPLETION_MESSAGE,
    error::Result,
    report::Report,
    rewrite::{operation::FileOperation, processor::FileProcessor},
    walker::DirectoryWalker,
};

/// Main CLI runner that turns arguments into a configuration and drives one
/// migration pass
pub struct Runner {
    args: Args,
}

impl Runner {
    pub fn new(args: Args) -> Self {
        Self { args }
    }

    /// Executes the complete migration workflow
    pub fn run(self) -> Result<Report> {
        let config = self.build_config()?;
        let report = migrate(&config)?;

        if self.args.json {
            println!("{}", report.to_json()?);
        } else {
            println!("{COMPLETION_MESSAGE}");
        }
        Ok(report)
    }

    /// Builds the immutable run configuration
    fn build_config(&self) -> Result<Config> {
        let config = match &self.args.root {
            Some(root) => Config::new(root)?,
            None => Config::with_default_root()?,
        };
        Ok(config.with_dry_run(self.args.dry_run).with_atomic_writes(!self.args.no_atomic))
    }
}

/// Walks `config.root()` and rewrites every selected file, one at a time.
///
/// The first error aborts the walk. Files processed before it stay rewritten.
pub fn migrate(config: &Config) -> Result<Report> {
    let replacement = config.replacement();
    if replacement.reintroduces_search() {
        log::warn!(
            "Replacement '{}' contains the search literal '{}'; running twice will not be a no-op",
            replacement.replace(),
            replacement.search()
        );
    }
    log::debug!(
        "Replacing '{}' with '{}' under '{}'",
        replacement.search(),
        replacement.replace(),
        config.root().display()
    );

    let processor = FileProcessor::new(config);
    let mut report = Report::new(config.dry_run());

    for entries in DirectoryWalker::new(config.root())? {
        let entries = entries?;
        report.directories += 1;

        for path in entries.paths() {
            let operation = processor.process(&path)?;
            let message = operation.get_message(config.dry_run());
            match operation {
                FileOperation::Ignore { .. } => log::trace!("{message}"),
                FileOperation::Rewrite { .. } => log::info!("{message}"),
            }
            report.record(&operation);
        }
    }

    log::info!(
        "Matched {} of {} file(s) in {} director(ies), rewrote {}, {} replacement(s)",
        report.files_matched,
        report.files_seen,
        report.directories,
        report.files_rewritten,
        report.replacements
    );
    Ok(report)
}

/// Main entry point for CLI execution
pub fn run(args: Args) -> Result<Report> {
    let runner = Runner::new(args);
    runner.run()
}
