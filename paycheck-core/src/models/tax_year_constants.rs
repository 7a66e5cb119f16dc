use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{FicaConstants, FilingSchedule, FilingStatus, StateTaxProfile};

/// Where a figure in the tables came from. Display-only; the engine never
/// reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceCitation {
    pub jurisdiction: String,
    pub title: String,
    pub url: Option<String>,
}

/// Every rate, bracket and threshold the engine needs for one tax year.
///
/// Passed explicitly into each calculation so several years can coexist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxYearConstants {
    pub tax_year: i32,
    pub federal: BTreeMap<FilingStatus, FilingSchedule>,
    pub fica: FicaConstants,
    /// Keyed by upper-case postal code.
    pub states: BTreeMap<String, StateTaxProfile>,
    #[serde(default)]
    pub sources: Vec<SourceCitation>,
}

impl TaxYearConstants {
    pub fn new(
        tax_year: i32,
        federal: BTreeMap<FilingStatus, FilingSchedule>,
        fica: FicaConstants,
    ) -> Self {
        Self {
            tax_year,
            federal,
            fica,
            states: BTreeMap::new(),
            sources: Vec::new(),
        }
    }

    /// Adds or replaces a state profile.
    pub fn insert_state(
        &mut self,
        profile: StateTaxProfile,
    ) {
        self.states.insert(profile.code.clone(), profile);
    }

    /// Looks up a state by code, ignoring case and surrounding whitespace.
    pub fn state(
        &self,
        code: &str,
    ) -> Option<&StateTaxProfile> {
        self.states.get(&code.trim().to_ascii_uppercase())
    }

    pub fn federal_schedule(
        &self,
        status: FilingStatus,
    ) -> Option<&FilingSchedule> {
        self.federal.get(&status)
    }
}
