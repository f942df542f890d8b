//! `dtcq list` command - list the joined code table

use miette::{IntoDiagnostic, Result};

use crate::cli::{table, GlobalOpts};
use crate::core::{Catalog, CodeFilter, Config, Dataset};

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Restrict to a vehicle make (short key or display name)
    #[arg(long, short = 'm')]
    pub make: Option<String>,

    /// Limit number of rows
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,
}

pub fn run(args: ListArgs, global: &GlobalOpts) -> Result<()> {
    let config = Config::load();
    let catalog = Catalog::resolve(global.data.as_deref(), &config).into_diagnostic()?;
    let dataset = Dataset::load(&catalog).into_diagnostic()?;
    let format = global.effective_format(&config);

    let mut filter = CodeFilter::default();
    if let Some(input) = args.make.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        // Short key inputs resolve through the make table; unknown
        // inputs match nothing.
        let label = dataset
            .find_make(input)
            .map(|m| m.description.clone())
            .unwrap_or_else(|| input.to_string());
        filter = filter.with_make(&label);
    }

    let mut results = dataset.filter(&filter);
    if let Some(limit) = args.limit {
        results.truncate(limit);
    }

    if global.verbose {
        eprintln!(
            "{} of {} codes selected from {}",
            results.len(),
            dataset.codes().len(),
            catalog.root().display()
        );
    }

    table::print_results(&results, format, global.quiet)
}
