use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use paycheck_core::{
    BracketSchedule, BracketScheduleError, FilingSchedule, FilingStatus, StateTaxMethod,
    StateTaxProfile, TaxBracket, TaxYearConstants,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Jurisdiction code used for federal rows.
pub const FEDERAL_JURISDICTION: &str = "US";

/// Errors that can occur when loading bracket or deduction tables.
#[derive(Debug, Error)]
pub enum TableLoaderError {
    #[error("CSV parse error: {0}")]
    CsvParse(String),

    #[error("Invalid filing status or schedule code '{0}'")]
    InvalidFilingStatus(String),

    #[error("Row for tax year {found} cannot be applied to tax year {expected}")]
    TaxYearMismatch { expected: i32, found: i32 },

    #[error("Invalid bracket table for {jurisdiction} {status}: {source}")]
    InvalidSchedule {
        jurisdiction: String,
        status: &'static str,
        #[source]
        source: BracketScheduleError,
    },

    #[error("Deduction for {jurisdiction} {status} has no table to attach to")]
    DeductionWithoutSchedule {
        jurisdiction: String,
        status: &'static str,
    },

    #[error("Deduction for {jurisdiction} {status} must not be negative, got {amount}")]
    NegativeDeduction {
        jurisdiction: String,
        status: &'static str,
        amount: Decimal,
    },
}

impl From<csv::Error> for TableLoaderError {
    fn from(err: csv::Error) -> Self {
        TableLoaderError::CsvParse(err.to_string())
    }
}

/// Expands a `filing_status` cell into the statuses it covers.
///
/// - Schedule X → Single
/// - Schedule Y-1 → Married Filing Jointly and Qualifying Surviving Spouse
/// - Schedule Y-2 → Married Filing Separately
/// - Schedule Z → Head of Household
/// - `*` → every status
/// - anything else is parsed as a filing status code or name
fn filing_statuses_for(code: &str) -> Result<Vec<FilingStatus>, TableLoaderError> {
    match code.trim() {
        "X" => Ok(vec![FilingStatus::Single]),
        "Y-1" => Ok(vec![
            FilingStatus::MarriedFilingJointly,
            FilingStatus::QualifyingSurvivingSpouse,
        ]),
        "Y-2" => Ok(vec![FilingStatus::MarriedFilingSeparately]),
        "Z" => Ok(vec![FilingStatus::HeadOfHousehold]),
        "*" => Ok(FilingStatus::ALL.to_vec()),
        other => FilingStatus::parse(other)
            .map(|status| vec![status])
            .ok_or_else(|| TableLoaderError::InvalidFilingStatus(other.to_string())),
    }
}

/// A single record from a bracket CSV file.
///
/// - `tax_year`: the tax year (e.g., 2026)
/// - `jurisdiction`: `US` for federal, otherwise a state postal code
/// - `filing_status`: status code, IRS schedule code (X, Y-1, Y-2, Z) or `*`
/// - `min_income`: lower bound of the bracket
/// - `max_income`: upper bound (empty for unlimited)
/// - `rate`: marginal rate as a decimal (e.g., 0.10 for 10%)
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct BracketRecord {
    pub tax_year: i32,
    pub jurisdiction: String,
    pub filing_status: String,
    pub min_income: Decimal,
    #[serde(deserialize_with = "deserialize_optional_decimal")]
    pub max_income: Option<Decimal>,
    pub rate: Decimal,
}

/// A single record from a standard deduction CSV file.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct DeductionRecord {
    pub tax_year: i32,
    pub jurisdiction: String,
    pub filing_status: String,
    pub amount: Decimal,
}

fn deserialize_optional_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => s
            .trim()
            .parse::<Decimal>()
            .map(Some)
            .map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

/// Result of overlaying CSV tables onto a tax year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedTables {
    pub constants: TaxYearConstants,
    /// Bracket schedules written, one per (jurisdiction, filing status).
    pub schedules_loaded: usize,
    /// Codes of states that did not exist before loading.
    pub states_created: Vec<String>,
    pub deductions_applied: usize,
}

/// Loader for bracket and deduction tables from CSV files.
///
/// Rows are grouped per (jurisdiction, filing status), sorted by
/// `min_income` and validated as a [`BracketSchedule`] before they replace
/// anything. Loading is all-or-nothing: any error leaves no partial result.
pub struct TableLoader;

impl TableLoader {
    /// Parse bracket records from a CSV reader.
    pub fn parse_brackets<R: Read>(reader: R) -> Result<Vec<BracketRecord>, TableLoaderError> {
        parse_records(csv::Reader::from_reader(reader))
    }

    /// Parse deduction records from a CSV reader.
    pub fn parse_deductions<R: Read>(reader: R) -> Result<Vec<DeductionRecord>, TableLoaderError> {
        parse_records(csv::Reader::from_reader(reader))
    }

    pub fn read_brackets_file(path: &Path) -> Result<Vec<BracketRecord>, TableLoaderError> {
        parse_records(csv::Reader::from_path(path)?)
    }

    pub fn read_deductions_file(path: &Path) -> Result<Vec<DeductionRecord>, TableLoaderError> {
        parse_records(csv::Reader::from_path(path)?)
    }

    /// Overlay bracket and deduction records onto `constants`.
    ///
    /// For each (jurisdiction, filing status) group this will:
    /// 1. Sort the rows by `min_income` and validate them as a schedule
    /// 2. Replace the federal schedule, or the state's schedule
    /// 3. Convert a no-tax or flat state to a progressive one first (a flat
    ///    rate becomes a single unbounded bracket per status and a no-tax
    ///    state gets a 0% bracket for every status, so statuses not in the
    ///    file keep their previous behaviour)
    /// 4. Create states that do not exist yet
    ///
    /// Deductions are applied after every schedule is in place.
    pub fn apply(
        mut constants: TaxYearConstants,
        brackets: &[BracketRecord],
        deductions: &[DeductionRecord],
    ) -> Result<LoadedTables, TableLoaderError> {
        let expected = constants.tax_year;
        for found in brackets
            .iter()
            .map(|r| r.tax_year)
            .chain(deductions.iter().map(|r| r.tax_year))
        {
            if found != expected {
                return Err(TableLoaderError::TaxYearMismatch { expected, found });
            }
        }

        let schedules = group_schedules(brackets)?;
        let schedules_loaded = schedules.len();
        let mut states_created = Vec::new();

        for ((jurisdiction, status), schedule) in schedules {
            if jurisdiction == FEDERAL_JURISDICTION {
                replace_federal(&mut constants, status, schedule);
            } else if replace_state(&mut constants, &jurisdiction, status, schedule)? {
                states_created.push(jurisdiction);
            }
        }

        let mut deductions_applied = 0;
        for record in deductions {
            let jurisdiction = record.jurisdiction.trim().to_ascii_uppercase();
            for status in filing_statuses_for(&record.filing_status)? {
                apply_deduction(&mut constants, &jurisdiction, status, record.amount)?;
                deductions_applied += 1;
            }
        }

        info!(
            tax_year = constants.tax_year,
            schedules_loaded,
            deductions_applied,
            states_created = states_created.len(),
            "tables loaded"
        );

        Ok(LoadedTables {
            constants,
            schedules_loaded,
            states_created,
            deductions_applied,
        })
    }
}

fn parse_records<R, T>(mut csv_reader: csv::Reader<R>) -> Result<Vec<T>, TableLoaderError>
where
    R: Read,
    T: for<'de> Deserialize<'de>,
{
    let mut records = Vec::new();

    for result in csv_reader.deserialize() {
        let record: T = result?;
        records.push(record);
    }

    Ok(records)
}

fn group_schedules(
    records: &[BracketRecord]
) -> Result<BTreeMap<(String, FilingStatus), BracketSchedule>, TableLoaderError> {
    let mut groups: BTreeMap<(String, FilingStatus), Vec<TaxBracket>> = BTreeMap::new();

    for record in records {
        let jurisdiction = record.jurisdiction.trim().to_ascii_uppercase();
        for status in filing_statuses_for(&record.filing_status)? {
            groups
                .entry((jurisdiction.clone(), status))
                .or_default()
                .push(TaxBracket {
                    min_income: record.min_income,
                    max_income: record.max_income,
                    rate: record.rate,
                });
        }
    }

    groups
        .into_iter()
        .map(|((jurisdiction, status), mut brackets)| {
            brackets.sort_by(|a, b| a.min_income.cmp(&b.min_income));
            match BracketSchedule::new(brackets) {
                Ok(schedule) => Ok(((jurisdiction, status), schedule)),
                Err(source) => Err(TableLoaderError::InvalidSchedule {
                    jurisdiction,
                    status: status.as_str(),
                    source,
                }),
            }
        })
        .collect()
}

fn replace_federal(
    constants: &mut TaxYearConstants,
    status: FilingStatus,
    brackets: BracketSchedule,
) {
    match constants.federal.get_mut(&status) {
        Some(existing) => {
            debug!(status = status.as_str(), "replacing federal schedule");
            existing.brackets = brackets;
        }
        None => {
            warn!(
                status = status.as_str(),
                "adding federal schedule with no standard deduction"
            );
            constants.federal.insert(
                status,
                FilingSchedule {
                    standard_deduction: Decimal::ZERO,
                    brackets,
                },
            );
        }
    }
}

/// Returns `true` when the state had to be created.
fn replace_state(
    constants: &mut TaxYearConstants,
    code: &str,
    status: FilingStatus,
    brackets: BracketSchedule,
) -> Result<bool, TableLoaderError> {
    let created = constants.state(code).is_none();
    if created {
        warn!(state = code, "state not in built-in tables; creating it");
        constants.insert_state(StateTaxProfile::new(
            code,
            code,
            StateTaxMethod::Progressive {
                schedules: BTreeMap::new(),
            },
        ));
    }

    let Some(profile) = constants.states.get_mut(code) else {
        return Ok(created);
    };

    if !matches!(profile.method, StateTaxMethod::Progressive { .. }) {
        debug!(
            state = code,
            from = profile.method.name(),
            "converting state to progressive schedules"
        );
        profile.method = to_progressive(&profile.method).map_err(|source| {
            TableLoaderError::InvalidSchedule {
                jurisdiction: code.to_string(),
                status: status.as_str(),
                source,
            }
        })?;
    }

    if let StateTaxMethod::Progressive { schedules } = &mut profile.method {
        let standard_deduction = schedules
            .get(&status)
            .map_or(Decimal::ZERO, |s| s.standard_deduction);
        schedules.insert(
            status,
            FilingSchedule {
                standard_deduction,
                brackets,
            },
        );
    }

    Ok(created)
}

/// Rewrites a no-tax or flat method as equivalent progressive schedules.
/// A no-tax state gets a 0% schedule with no deduction for every status.
fn to_progressive(method: &StateTaxMethod) -> Result<StateTaxMethod, BracketScheduleError> {
    let schedules = match method {
        StateTaxMethod::NoIncomeTax => {
            let untaxed = BracketSchedule::from_thresholds(&[(Decimal::ZERO, Decimal::ZERO)])?;
            FilingStatus::ALL
                .into_iter()
                .map(|status| {
                    let schedule = FilingSchedule {
                        standard_deduction: Decimal::ZERO,
                        brackets: untaxed.clone(),
                    };
                    (status, schedule)
                })
                .collect()
        }
        StateTaxMethod::Flat {
            rate,
            standard_deductions,
        } => {
            let mut schedules = BTreeMap::new();
            for (status, deduction) in standard_deductions {
                schedules.insert(
                    *status,
                    FilingSchedule {
                        standard_deduction: *deduction,
                        brackets: BracketSchedule::from_thresholds(&[(Decimal::ZERO, *rate)])?,
                    },
                );
            }
            schedules
        }
        StateTaxMethod::Progressive { schedules } => schedules.clone(),
    };

    Ok(StateTaxMethod::Progressive { schedules })
}

fn apply_deduction(
    constants: &mut TaxYearConstants,
    jurisdiction: &str,
    status: FilingStatus,
    amount: Decimal,
) -> Result<(), TableLoaderError> {
    if amount < Decimal::ZERO {
        return Err(TableLoaderError::NegativeDeduction {
            jurisdiction: jurisdiction.to_string(),
            status: status.as_str(),
            amount,
        });
    }

    let missing = || TableLoaderError::DeductionWithoutSchedule {
        jurisdiction: jurisdiction.to_string(),
        status: status.as_str(),
    };

    if jurisdiction == FEDERAL_JURISDICTION {
        let schedule = constants.federal.get_mut(&status).ok_or_else(missing)?;
        schedule.standard_deduction = amount;
        return Ok(());
    }

    let profile = constants.states.get_mut(jurisdiction).ok_or_else(missing)?;
    match &mut profile.method {
        StateTaxMethod::NoIncomeTax => return Err(missing()),
        StateTaxMethod::Flat {
            standard_deductions,
            ..
        } => {
            standard_deductions.insert(status, amount);
        }
        StateTaxMethod::Progressive { schedules } => {
            let schedule = schedules.get_mut(&status).ok_or_else(missing)?;
            schedule.standard_deduction = amount;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::tables::tax_year_2026;

    const FEDERAL_CSV: &str = r#"tax_year,jurisdiction,filing_status,min_income,max_income,rate
2026,US,X,0,12400,0.10
2026,US,X,12400,50400,0.12
2026,US,X,50400,,0.22
"#;

    #[test]
    fn test_parse_csv_single_bracket() {
        let csv = "tax_year,jurisdiction,filing_status,min_income,max_income,rate\n2026,US,X,0,12400,0.10";

        let records = TableLoader::parse_brackets(csv.as_bytes()).expect("Failed to parse CSV");

        assert_eq!(
            records,
            vec![BracketRecord {
                tax_year: 2026,
                jurisdiction: "US".to_string(),
                filing_status: "X".to_string(),
                min_income: dec!(0),
                max_income: Some(dec!(12400)),
                rate: dec!(0.10),
            }]
        );
    }

    #[test]
    fn test_parse_csv_unlimited_max_income() {
        let records = TableLoader::parse_brackets(FEDERAL_CSV.as_bytes()).unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(records[2].max_income, None);
        assert_eq!(records[2].rate, dec!(0.22));
    }

    #[test]
    fn test_parse_invalid_csv_missing_column() {
        let csv = "tax_year,jurisdiction,filing_status\n2026,US,X";

        let err = TableLoader::parse_brackets(csv.as_bytes()).expect_err("Should fail for missing column");

        let TableLoaderError::CsvParse(msg) = err else {
            panic!("Expected CsvParse error, got: {:?}", err);
        };
        assert!(msg.contains("missing field"), "Expected 'missing field' in error, got: {}", msg);
    }

    #[test]
    fn test_parse_invalid_csv_bad_decimal() {
        let csv = "tax_year,jurisdiction,filing_status,min_income,max_income,rate\n2026,US,X,abc,12400,0.10";

        let result = TableLoader::parse_brackets(csv.as_bytes());

        assert!(matches!(result, Err(TableLoaderError::CsvParse(_))));
    }

    #[test]
    fn test_parse_deductions() {
        let csv = "tax_year,jurisdiction,filing_status,amount\n2026,CA,S,6000\n2026,US,*,15000";

        let records = TableLoader::parse_deductions(csv.as_bytes()).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].amount, dec!(6000));
        assert_eq!(records[1].filing_status, "*");
    }

    #[test]
    fn test_filing_statuses_for_schedule_codes() {
        assert_eq!(filing_statuses_for("X").unwrap(), vec![FilingStatus::Single]);
        assert_eq!(
            filing_statuses_for("Y-1").unwrap(),
            vec![
                FilingStatus::MarriedFilingJointly,
                FilingStatus::QualifyingSurvivingSpouse
            ]
        );
        assert_eq!(
            filing_statuses_for("Y-2").unwrap(),
            vec![FilingStatus::MarriedFilingSeparately]
        );
        assert_eq!(filing_statuses_for("Z").unwrap(), vec![FilingStatus::HeadOfHousehold]);
        assert_eq!(filing_statuses_for("*").unwrap().len(), 5);
    }

    #[test]
    fn test_filing_statuses_for_status_codes() {
        assert_eq!(filing_statuses_for("HOH").unwrap(), vec![FilingStatus::HeadOfHousehold]);
        assert_eq!(filing_statuses_for(" mfj ").unwrap(), vec![FilingStatus::MarriedFilingJointly]);
    }

    #[test]
    fn test_filing_statuses_for_invalid() {
        match filing_statuses_for("INVALID") {
            Err(TableLoaderError::InvalidFilingStatus(ref code)) => assert_eq!(code, "INVALID"),
            other => panic!("expected InvalidFilingStatus, got {other:?}"),
        }
    }

    #[test]
    fn apply_replaces_federal_schedule_and_keeps_deduction() {
        let records = TableLoader::parse_brackets(FEDERAL_CSV.as_bytes()).unwrap();

        let loaded = TableLoader::apply(tax_year_2026().unwrap(), &records, &[]).unwrap();
        let single = &loaded.constants.federal[&FilingStatus::Single];

        assert_eq!(loaded.schedules_loaded, 1);
        assert_eq!(single.brackets.brackets().len(), 3);
        assert_eq!(single.standard_deduction, dec!(16100));
    }

    #[test]
    fn apply_sorts_rows_before_validating() {
        let csv = "tax_year,jurisdiction,filing_status,min_income,max_income,rate\n\
                   2026,US,S,12400,,0.12\n\
                   2026,US,S,0,12400,0.10";
        let records = TableLoader::parse_brackets(csv.as_bytes()).unwrap();

        let loaded = TableLoader::apply(tax_year_2026().unwrap(), &records, &[]).unwrap();

        assert_eq!(
            loaded.constants.federal[&FilingStatus::Single].brackets.brackets()[0].rate,
            dec!(0.10)
        );
    }

    #[test]
    fn apply_rejects_gap_in_schedule() {
        let csv = "tax_year,jurisdiction,filing_status,min_income,max_income,rate\n\
                   2026,CA,S,0,10000,0.01\n\
                   2026,CA,S,20000,,0.02";
        let records = TableLoader::parse_brackets(csv.as_bytes()).unwrap();

        let result = TableLoader::apply(tax_year_2026().unwrap(), &records, &[]);

        match result {
            Err(TableLoaderError::InvalidSchedule {
                jurisdiction,
                status,
                source,
            }) => {
                assert_eq!(jurisdiction, "CA");
                assert_eq!(status, "S");
                assert!(matches!(source, BracketScheduleError::NotContiguous { .. }));
            }
            other => panic!("expected InvalidSchedule, got {other:?}"),
        }
    }

    #[test]
    fn apply_rejects_tax_year_mismatch() {
        let csv = "tax_year,jurisdiction,filing_status,min_income,max_income,rate\n2025,US,X,0,,0.10";
        let records = TableLoader::parse_brackets(csv.as_bytes()).unwrap();

        let result = TableLoader::apply(tax_year_2026().unwrap(), &records, &[]);

        assert!(matches!(
            result,
            Err(TableLoaderError::TaxYearMismatch {
                expected: 2026,
                found: 2025
            })
        ));
    }

    #[test]
    fn apply_converts_flat_state_and_keeps_other_statuses() {
        let csv = "tax_year,jurisdiction,filing_status,min_income,max_income,rate\n\
                   2026,il,S,0,50000,0.04\n\
                   2026,il,S,50000,,0.06";
        let records = TableLoader::parse_brackets(csv.as_bytes()).unwrap();

        let loaded = TableLoader::apply(tax_year_2026().unwrap(), &records, &[]).unwrap();
        let il = loaded.constants.state("IL").unwrap();

        let StateTaxMethod::Progressive { schedules } = &il.method else {
            panic!("IL should now be progressive");
        };
        let single = &schedules[&FilingStatus::Single];
        let joint = &schedules[&FilingStatus::MarriedFilingJointly];

        assert_eq!(single.standard_deduction, dec!(2850));
        assert_eq!(single.brackets.brackets().len(), 2);
        assert_eq!(joint.standard_deduction, dec!(5700));
        assert_eq!(joint.brackets.brackets().len(), 1);
        assert_eq!(joint.brackets.top_rate(), dec!(0.0495));
        assert!(loaded.states_created.is_empty());
    }

    #[test]
    fn apply_to_no_tax_state_keeps_other_statuses_untaxed() {
        let csv = "tax_year,jurisdiction,filing_status,min_income,max_income,rate\n2026,TX,S,0,,0.01";
        let records = TableLoader::parse_brackets(csv.as_bytes()).unwrap();

        let loaded = TableLoader::apply(tax_year_2026().unwrap(), &records, &[]).unwrap();
        let texas = loaded.constants.state("TX").unwrap();

        let StateTaxMethod::Progressive { schedules } = &texas.method else {
            panic!("TX should now be progressive");
        };
        assert_eq!(schedules.len(), FilingStatus::ALL.len());
        assert_eq!(schedules[&FilingStatus::Single].brackets.top_rate(), dec!(0.01));
        for status in FilingStatus::ALL.into_iter().filter(|s| *s != FilingStatus::Single) {
            let schedule = &schedules[&status];
            assert!(texas.method.supports(status));
            assert_eq!(schedule.standard_deduction, Decimal::ZERO);
            assert_eq!(schedule.brackets.top_rate(), Decimal::ZERO);
        }
    }

    #[test]
    fn apply_creates_missing_state() {
        let csv = "tax_year,jurisdiction,filing_status,min_income,max_income,rate\n2026,ZZ,*,0,,0.05";
        let deductions = TableLoader::parse_deductions(
            "tax_year,jurisdiction,filing_status,amount\n2026,ZZ,S,1000".as_bytes(),
        )
        .unwrap();
        let records = TableLoader::parse_brackets(csv.as_bytes()).unwrap();

        let loaded = TableLoader::apply(tax_year_2026().unwrap(), &records, &deductions).unwrap();

        assert_eq!(loaded.states_created, vec!["ZZ".to_string()]);
        assert_eq!(loaded.schedules_loaded, 5);
        assert_eq!(loaded.deductions_applied, 1);
        assert!(loaded.constants.state("zz").is_some());
    }

    #[test]
    fn apply_deduction_to_no_tax_state_fails() {
        let deductions = TableLoader::parse_deductions(
            "tax_year,jurisdiction,filing_status,amount\n2026,TX,S,1000".as_bytes(),
        )
        .unwrap();

        let result = TableLoader::apply(tax_year_2026().unwrap(), &[], &deductions);

        assert!(matches!(result, Err(TableLoaderError::DeductionWithoutSchedule { .. })));
    }

    #[test]
    fn apply_rejects_negative_deduction() {
        let deductions = TableLoader::parse_deductions(
            "tax_year,jurisdiction,filing_status,amount\n2026,US,S,-1".as_bytes(),
        )
        .unwrap();

        let result = TableLoader::apply(tax_year_2026().unwrap(), &[], &deductions);

        assert!(matches!(result, Err(TableLoaderError::NegativeDeduction { .. })));
    }
}
