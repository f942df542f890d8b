//! Result rendering for the code list commands
//!
//! One dispatcher over all output formats. The text table uses
//! `tabled`; CSV goes through the `csv` writer so quoting follows
//! RFC 4180; HTML is delegated to `cli::html`.

use console::style;
use miette::{IntoDiagnostic, Result};
use std::io;
use tabled::{settings::Style, Table, Tabled};

use crate::cli::helpers::escape_md;
use crate::cli::html;
use crate::cli::OutputFormat;
use crate::model::ResolvedCode;

/// One row of the text table
#[derive(Tabled)]
pub struct CodeRow {
    #[tabled(rename = "CODE")]
    code: String,
    #[tabled(rename = "DESCRIPTION")]
    description: String,
    #[tabled(rename = "TYPE")]
    code_type: String,
    #[tabled(rename = "PART")]
    part_type: String,
    #[tabled(rename = "SYSTEM")]
    system_category: String,
    #[tabled(rename = "MAKE")]
    make: String,
}

impl From<&ResolvedCode> for CodeRow {
    fn from(row: &ResolvedCode) -> Self {
        Self {
            code: row.code.diagnostic_code.clone(),
            description: row.code.description.clone(),
            code_type: row.code_type.clone(),
            part_type: row.part_type.clone(),
            system_category: row.system_category.clone(),
            make: row.make.clone(),
        }
    }
}

/// Render a result set to stdout in the requested format.
///
/// `quiet` drops the trailing summary line of the text table.
pub fn print_results(results: &[&ResolvedCode], format: OutputFormat, quiet: bool) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(results).into_diagnostic()?
            );
        }
        OutputFormat::Csv => print_csv(results)?,
        OutputFormat::Md => print_md(results),
        OutputFormat::Html => print!("{}", html::render_table(results)),
        OutputFormat::Id => {
            for row in results {
                println!("{}", row.code.diagnostic_code);
            }
        }
        OutputFormat::Tsv | OutputFormat::Auto => print_text(results, quiet),
    }
    Ok(())
}

fn print_text(results: &[&ResolvedCode], quiet: bool) {
    if !results.is_empty() {
        let rows: Vec<CodeRow> = results.iter().map(|r| CodeRow::from(*r)).collect();
        let table = Table::new(rows).with(Style::psql()).to_string();
        println!("{}", table);
    }

    if !quiet {
        println!();
        println!("{} code(s) found.", style(results.len()).cyan());
    }
}

fn print_csv(results: &[&ResolvedCode]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(io::stdout());
    writer
        .write_record([
            "code",
            "description",
            "code_type",
            "part_type",
            "system_category",
            "make",
            "details_url",
        ])
        .into_diagnostic()?;

    for row in results {
        writer
            .write_record([
                row.code.diagnostic_code.as_str(),
                row.code.description.as_str(),
                row.code_type.as_str(),
                row.part_type.as_str(),
                row.system_category.as_str(),
                row.make.as_str(),
                row.code.details_url().unwrap_or(""),
            ])
            .into_diagnostic()?;
    }

    writer.flush().into_diagnostic()?;
    Ok(())
}

fn print_md(results: &[&ResolvedCode]) {
    println!("| Code | Description | Details |");
    println!("|---|---|---|");
    for row in results {
        println!(
            "| {} | {} | {} |",
            escape_md(&row.code.diagnostic_code),
            escape_md(&row.code.description),
            escape_md(&row.metadata())
        );
    }
}

/// Print the causes lists below the text table, one block per code
/// that has any.
pub fn print_causes(results: &[&ResolvedCode]) {
    for row in results {
        if row.code.causes.is_empty() {
            continue;
        }
        println!();
        println!(
            "Possible causes for {}:",
            style(&row.code.diagnostic_code).cyan()
        );
        for cause in &row.code.causes {
            println!("  - {}", cause);
        }
    }
}
