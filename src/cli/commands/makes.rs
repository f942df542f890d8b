//! `dtcq makes` command - list vehicle makes

use console::style;
use miette::{IntoDiagnostic, Result};
use std::io;
use tabled::{settings::Style, Table, Tabled};

use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::{Catalog, Config, Dataset};

#[derive(clap::Args, Debug)]
pub struct MakesArgs {}

#[derive(Tabled)]
struct MakeRow {
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "MAKE")]
    description: String,
    #[tabled(rename = "CODES")]
    codes: usize,
    #[tabled(rename = "DICTIONARY")]
    dictionary: &'static str,
}

pub fn run(_args: MakesArgs, global: &GlobalOpts) -> Result<()> {
    let config = Config::load();
    let catalog = Catalog::resolve(global.data.as_deref(), &config).into_diagnostic()?;
    let dataset = Dataset::load(&catalog).into_diagnostic()?;
    let format = global.effective_format(&config);

    let dictionaries = catalog.available_make_dictionaries();
    let has_dictionary =
        |name: &str| dictionaries.iter().any(|d| d.eq_ignore_ascii_case(name));

    match format {
        OutputFormat::Json => {
            let rows: Vec<serde_json::Value> = dataset
                .makes()
                .iter()
                .map(|m| {
                    serde_json::json!({
                        "Name": m.name,
                        "Description": m.description,
                        "Codes": dataset.codes_for_make(m),
                        "HasDictionary": has_dictionary(&m.name),
                    })
                })
                .collect();
            println!(
                "{}",
                serde_json::to_string_pretty(&rows).into_diagnostic()?
            );
        }
        OutputFormat::Id => {
            for make in dataset.makes() {
                println!("{}", make.name);
            }
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(io::stdout());
            writer
                .write_record(["name", "description", "codes", "has_dictionary"])
                .into_diagnostic()?;
            for make in dataset.makes() {
                let codes = dataset.codes_for_make(make).to_string();
                writer
                    .write_record([
                        make.name.as_str(),
                        make.description.as_str(),
                        codes.as_str(),
                        if has_dictionary(&make.name) { "yes" } else { "no" },
                    ])
                    .into_diagnostic()?;
            }
            writer.flush().into_diagnostic()?;
        }
        OutputFormat::Md => {
            println!("| Name | Make | Codes | Dictionary |");
            println!("|---|---|---|---|");
            for make in dataset.makes() {
                println!(
                    "| {} | {} | {} | {} |",
                    make.name,
                    make.description,
                    dataset.codes_for_make(make),
                    if has_dictionary(&make.name) { "yes" } else { "-" }
                );
            }
        }
        OutputFormat::Tsv | OutputFormat::Auto | OutputFormat::Html => {
            let rows: Vec<MakeRow> = dataset
                .makes()
                .iter()
                .map(|m| MakeRow {
                    name: m.name.clone(),
                    description: m.description.clone(),
                    codes: dataset.codes_for_make(m),
                    dictionary: if has_dictionary(&m.name) { "yes" } else { "-" },
                })
                .collect();

            if !rows.is_empty() {
                println!("{}", Table::new(rows).with(Style::psql()));
            }
            if !global.quiet {
                println!();
                println!("{} make(s) found.", style(dataset.makes().len()).cyan());
            }
        }
    }

    Ok(())
}
