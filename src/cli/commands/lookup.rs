//! `dtcq lookup` command - look up codes, optionally per make
//!
//! The canonical path filters the joined dataset. When a make is
//! selected, codes the joined table does not know are looked up in
//! that make's manufacturer-specific dictionary and appended to the
//! results.

use dialoguer::{theme::ColorfulTheme, Select};
use miette::{IntoDiagnostic, Result};

use crate::cli::helpers::print_not_found;
use crate::cli::{table, GlobalOpts, OutputFormat};
use crate::core::loader;
use crate::core::{Catalog, CodeFilter, Config, Dataset};
use crate::model::{Code, MakeCodeEntry, ResolvedCode, UNKNOWN};

#[derive(clap::Args, Debug)]
pub struct LookupArgs {
    /// Codes to look up, comma or space separated (empty = all)
    pub codes: Vec<String>,

    /// Restrict to a vehicle make (short key or display name)
    #[arg(long, short = 'm')]
    pub make: Option<String>,

    /// Pick the make interactively
    #[arg(long, short = 'i', conflicts_with = "make")]
    pub interactive: bool,
}

pub fn run(args: LookupArgs, global: &GlobalOpts) -> Result<()> {
    let config = Config::load();
    let catalog = Catalog::resolve(global.data.as_deref(), &config).into_diagnostic()?;
    let dataset = Dataset::load(&catalog).into_diagnostic()?;
    let format = global.effective_format(&config);

    if global.verbose {
        eprintln!(
            "loaded {} codes from {}",
            dataset.codes().len(),
            catalog.root().display()
        );
    }

    let make_input = if args.interactive {
        prompt_make(&dataset)?
    } else {
        args.make.clone()
    };

    let codes = CodeFilter::parse_codes(&args.codes.join(","));

    // Normalize a short make key (the dictionary file name) to the
    // display name the join resolved; an unrecognized input is still
    // applied verbatim and simply matches nothing.
    let selected = make_input
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty());
    let make_row = selected.and_then(|input| dataset.find_make(input));
    let make_label = match (selected, make_row) {
        (_, Some(m)) => Some(m.description.clone()),
        (Some(input), None) => Some(input.to_string()),
        (None, None) => None,
    };

    let mut filter = CodeFilter::default().with_codes(&codes);
    if let Some(label) = &make_label {
        filter = filter.with_make(label);
    }

    let known = dataset.filter(&filter);
    let missing: Vec<&String> = codes
        .iter()
        .filter(|code| {
            !known
                .iter()
                .any(|r| r.code.diagnostic_code.eq_ignore_ascii_case(code))
        })
        .collect();

    // Consult the per-make dictionary only for codes the joined table
    // does not know.
    let supplemental: Vec<ResolvedCode> = if selected.is_some() && !missing.is_empty() {
        let key = make_row
            .map(|m| m.name.as_str())
            .or(selected)
            .unwrap_or_default();
        let dict = loader::load_make_dictionary(&catalog, key);
        let label = make_label.as_deref().unwrap_or_default();

        missing
            .iter()
            .filter_map(|code| {
                dict.iter()
                    .find(|(k, _)| k.eq_ignore_ascii_case(code.as_str()))
                    .map(|(k, entry)| manufacturer_row(k, entry, label))
            })
            .collect()
    } else {
        Vec::new()
    };

    let mut results = known;
    results.extend(supplemental.iter());

    for code in &codes {
        let found = results
            .iter()
            .any(|r| r.code.diagnostic_code.eq_ignore_ascii_case(code));
        if !found {
            print_not_found(code);
        }
    }

    table::print_results(&results, format, global.quiet)?;
    if matches!(format, OutputFormat::Tsv | OutputFormat::Auto) && !codes.is_empty() {
        table::print_causes(&results);
    }

    Ok(())
}

/// Interactive make selection over the loaded make table
fn prompt_make(dataset: &Dataset) -> Result<Option<String>> {
    let mut items: Vec<String> = vec!["All makes".to_string()];
    items.extend(dataset.makes().iter().map(|m| m.description.clone()));

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Vehicle make")
        .default(0)
        .items(&items)
        .interact()
        .into_diagnostic()?;

    if selection == 0 {
        Ok(None)
    } else {
        Ok(Some(items[selection].clone()))
    }
}

/// Joined-view row synthesized from a per-make dictionary entry
fn manufacturer_row(code: &str, entry: &MakeCodeEntry, make: &str) -> ResolvedCode {
    ResolvedCode {
        code: Code {
            diagnostic_code: code.to_string(),
            description: entry.description.clone(),
            code_type_id: None,
            part_type_id: None,
            system_category_id: None,
            car_make_id: None,
            details_url: entry.details_url.clone(),
            causes: entry.causes.clone(),
        },
        code_type: "Manufacturer Specific".to_string(),
        part_type: UNKNOWN.to_string(),
        system_category: UNKNOWN.to_string(),
        make: make.to_string(),
    }
}
