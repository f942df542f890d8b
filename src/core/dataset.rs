//! Loaded dataset and join engine
//!
//! `Dataset` is the single loaded-state value: the joined fact list
//! plus the make table kept for prompts and filter normalization. It
//! is constructed once per invocation and only read afterwards.

use std::collections::HashMap;

use crate::core::catalog::Catalog;
use crate::core::filter::CodeFilter;
use crate::core::loader::{self, LoadError};
use crate::model::{
    CarMake, Code, CodeType, Dimension, PartType, ResolvedCode, SystemCategory, UNIVERSAL, UNKNOWN,
};

/// The fully loaded and joined dataset for one invocation.
#[derive(Debug)]
pub struct Dataset {
    codes: Vec<ResolvedCode>,
    makes: Vec<CarMake>,
}

impl Dataset {
    /// Load the five tables from the catalog and join them.
    pub fn load(catalog: &Catalog) -> Result<Self, LoadError> {
        let codes: Vec<Code> = loader::load_table(&catalog.table_path("Code.json"))?;
        let code_types: Vec<CodeType> = loader::load_table(&catalog.table_path(CodeType::TABLE))?;
        let part_types: Vec<PartType> = loader::load_table(&catalog.table_path(PartType::TABLE))?;
        let system_categories: Vec<SystemCategory> =
            loader::load_table(&catalog.table_path(SystemCategory::TABLE))?;
        let makes: Vec<CarMake> = loader::load_table(&catalog.make_table_path())?;

        Ok(Self::from_tables(
            codes,
            &code_types,
            &part_types,
            &system_categories,
            makes,
        ))
    }

    /// Join the fact table against the dimension tables.
    ///
    /// Pure over its inputs: one pass to index each dimension table,
    /// one pass over the facts, fact order preserved. Missing foreign
    /// keys resolve to "Unknown", or "Universal" for the make.
    pub fn from_tables(
        codes: Vec<Code>,
        code_types: &[CodeType],
        part_types: &[PartType],
        system_categories: &[SystemCategory],
        makes: Vec<CarMake>,
    ) -> Self {
        let code_type_map = index_by_id(code_types);
        let part_type_map = index_by_id(part_types);
        let system_category_map = index_by_id(system_categories);
        let make_map = index_by_id(&makes);

        let codes = codes
            .into_iter()
            .map(|code| {
                let code_type = resolve(&code_type_map, code.code_type_id, UNKNOWN);
                let part_type = resolve(&part_type_map, code.part_type_id, UNKNOWN);
                let system_category = resolve(&system_category_map, code.system_category_id, UNKNOWN);
                let make = resolve(&make_map, code.car_make_id, UNIVERSAL);

                ResolvedCode {
                    code,
                    code_type,
                    part_type,
                    system_category,
                    make,
                }
            })
            .collect();

        Self { codes, makes }
    }

    /// All joined fact rows, in table order
    pub fn codes(&self) -> &[ResolvedCode] {
        &self.codes
    }

    /// The make table, in table order
    pub fn makes(&self) -> &[CarMake] {
        &self.makes
    }

    /// Find a make by its short key or display name
    pub fn find_make(&self, input: &str) -> Option<&CarMake> {
        self.makes.iter().find(|m| m.matches(input))
    }

    /// Count of joined codes resolving to the given make
    pub fn codes_for_make(&self, make: &CarMake) -> usize {
        self.codes
            .iter()
            .filter(|c| c.make.eq_ignore_ascii_case(&make.description))
            .count()
    }

    /// Linear scan of the joined list applying the filter predicates.
    pub fn filter<'a>(&'a self, filter: &CodeFilter) -> Vec<&'a ResolvedCode> {
        self.codes.iter().filter(|c| filter.matches(c)).collect()
    }
}

/// Index dimension rows by id in one pass. Duplicate ids keep the
/// last occurrence, matching map-insert semantics of the source data.
fn index_by_id<T: Dimension>(rows: &[T]) -> HashMap<i64, &T> {
    let mut map = HashMap::with_capacity(rows.len());
    for row in rows {
        map.insert(row.id(), row);
    }
    map
}

fn resolve<T: Dimension>(map: &HashMap<i64, &T>, key: Option<i64>, default: &str) -> String {
    key.and_then(|k| map.get(&k))
        .map(|row| row.label().to_string())
        .unwrap_or_else(|| default.to_string())
}
