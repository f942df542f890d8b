//! `dtcq info` command - dataset build metadata
//!
//! Mirrors the original site banner. A missing or unreadable
//! `site.json` is a warning, never a failure.

use console::style;
use miette::{IntoDiagnostic, Result};

use crate::cli::helpers::print_warning;
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::loader;
use crate::core::{Catalog, Config};

#[derive(clap::Args, Debug)]
pub struct InfoArgs {}

pub fn run(_args: InfoArgs, global: &GlobalOpts) -> Result<()> {
    let config = Config::load();
    let catalog = Catalog::resolve(global.data.as_deref(), &config).into_diagnostic()?;

    let site = match loader::load_site(&catalog) {
        Ok(Some(site)) => site,
        Ok(None) => {
            print_warning(&format!(
                "no site.json in {}",
                catalog.root().display()
            ));
            return Ok(());
        }
        Err(err) => {
            print_warning(&format!("failed to load site.json: {}", err));
            return Ok(());
        }
    };

    match global.effective_format(&config) {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&site).into_diagnostic()?
            );
        }
        _ => {
            println!("{}", style(&site.title).bold());
            println!("{:<10} {}", style("Version").dim(), site.version);
            println!("{:<10} {}", style("Branch").dim(), site.branch);
            println!("{:<10} {}", style("Revision").dim(), site.revision);
            println!("{:<10} {}", style("Built on").dim(), site.built_on_display());
        }
    }

    Ok(())
}
