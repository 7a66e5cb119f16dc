//! State wage income tax profiles.
//!
//! Progressive states carry one schedule per filing status; where a state
//! reuses a table across statuses the same threshold list is referenced.
//! "Standard deduction" here also covers personal exemptions for states that
//! grant an exemption instead of a deduction.

use std::collections::BTreeMap;

use paycheck_core::{
    BracketSchedule, BracketScheduleError, FilingSchedule, FilingStatus, FilingStatusAmounts,
    StateTaxMethod, StateTaxProfile,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::federal::STANDARD_DEDUCTION_2026;

type Thresholds = &'static [(Decimal, Decimal)];

const NO_INCOME_TAX: [(&str, &str); 9] = [
    ("AK", "Alaska"),
    ("FL", "Florida"),
    ("NV", "Nevada"),
    ("NH", "New Hampshire"),
    ("SD", "South Dakota"),
    ("TN", "Tennessee"),
    ("TX", "Texas"),
    ("WA", "Washington"),
    ("WY", "Wyoming"),
];

// --- California ---

const CA_SINGLE: Thresholds = &[
    (dec!(0), dec!(0.01)),
    (dec!(11079), dec!(0.02)),
    (dec!(26264), dec!(0.04)),
    (dec!(41452), dec!(0.06)),
    (dec!(57542), dec!(0.08)),
    (dec!(72724), dec!(0.093)),
    (dec!(371479), dec!(0.103)),
    (dec!(445771), dec!(0.113)),
    (dec!(742953), dec!(0.123)),
    // Mental health services surcharge starts at 1,000,000 for every status.
    (dec!(1000000), dec!(0.133)),
];

const CA_JOINT: Thresholds = &[
    (dec!(0), dec!(0.01)),
    (dec!(22158), dec!(0.02)),
    (dec!(52528), dec!(0.04)),
    (dec!(82904), dec!(0.06)),
    (dec!(115084), dec!(0.08)),
    (dec!(145448), dec!(0.093)),
    (dec!(742958), dec!(0.103)),
    (dec!(891542), dec!(0.113)),
    (dec!(1000000), dec!(0.123)),
    (dec!(1485906), dec!(0.133)),
];

const CA_HEAD_OF_HOUSEHOLD: Thresholds = &[
    (dec!(0), dec!(0.01)),
    (dec!(22173), dec!(0.02)),
    (dec!(52530), dec!(0.04)),
    (dec!(67716), dec!(0.06)),
    (dec!(83805), dec!(0.08)),
    (dec!(98990), dec!(0.093)),
    (dec!(505208), dec!(0.103)),
    (dec!(606251), dec!(0.113)),
    (dec!(1000000), dec!(0.123)),
    (dec!(1010417), dec!(0.133)),
];

// --- New York ---

const NY_SINGLE: Thresholds = &[
    (dec!(0), dec!(0.04)),
    (dec!(8500), dec!(0.045)),
    (dec!(11700), dec!(0.0525)),
    (dec!(13900), dec!(0.055)),
    (dec!(80650), dec!(0.06)),
    (dec!(215400), dec!(0.0685)),
    (dec!(1077550), dec!(0.0965)),
    (dec!(5000000), dec!(0.103)),
    (dec!(25000000), dec!(0.109)),
];

const NY_JOINT: Thresholds = &[
    (dec!(0), dec!(0.04)),
    (dec!(17150), dec!(0.045)),
    (dec!(23600), dec!(0.0525)),
    (dec!(27900), dec!(0.055)),
    (dec!(161550), dec!(0.06)),
    (dec!(323200), dec!(0.0685)),
    (dec!(2155350), dec!(0.0965)),
    (dec!(5000000), dec!(0.103)),
    (dec!(25000000), dec!(0.109)),
];

const NY_HEAD_OF_HOUSEHOLD: Thresholds = &[
    (dec!(0), dec!(0.04)),
    (dec!(12800), dec!(0.045)),
    (dec!(17650), dec!(0.0525)),
    (dec!(20900), dec!(0.055)),
    (dec!(107650), dec!(0.06)),
    (dec!(269300), dec!(0.0685)),
    (dec!(1616450), dec!(0.0965)),
    (dec!(5000000), dec!(0.103)),
    (dec!(25000000), dec!(0.109)),
];

// --- New Jersey ---

const NJ_SINGLE: Thresholds = &[
    (dec!(0), dec!(0.014)),
    (dec!(20000), dec!(0.0175)),
    (dec!(35000), dec!(0.035)),
    (dec!(40000), dec!(0.05525)),
    (dec!(75000), dec!(0.0637)),
    (dec!(500000), dec!(0.0897)),
    (dec!(1000000), dec!(0.1075)),
];

const NJ_JOINT: Thresholds = &[
    (dec!(0), dec!(0.014)),
    (dec!(20000), dec!(0.0175)),
    (dec!(50000), dec!(0.0245)),
    (dec!(70000), dec!(0.035)),
    (dec!(80000), dec!(0.05525)),
    (dec!(150000), dec!(0.0637)),
    (dec!(500000), dec!(0.0897)),
    (dec!(1000000), dec!(0.1075)),
];

// --- Oregon ---

const OR_SINGLE: Thresholds = &[
    (dec!(0), dec!(0.0475)),
    (dec!(4400), dec!(0.0675)),
    (dec!(11050), dec!(0.0875)),
    (dec!(125000), dec!(0.099)),
];

const OR_JOINT: Thresholds = &[
    (dec!(0), dec!(0.0475)),
    (dec!(8800), dec!(0.0675)),
    (dec!(22100), dec!(0.0875)),
    (dec!(250000), dec!(0.099)),
];

// --- Connecticut ---

const CT_SINGLE: Thresholds = &[
    (dec!(0), dec!(0.02)),
    (dec!(10000), dec!(0.045)),
    (dec!(50000), dec!(0.055)),
    (dec!(100000), dec!(0.06)),
    (dec!(200000), dec!(0.065)),
    (dec!(250000), dec!(0.069)),
    (dec!(500000), dec!(0.0699)),
];

const CT_JOINT: Thresholds = &[
    (dec!(0), dec!(0.02)),
    (dec!(20000), dec!(0.045)),
    (dec!(100000), dec!(0.055)),
    (dec!(200000), dec!(0.06)),
    (dec!(400000), dec!(0.065)),
    (dec!(500000), dec!(0.069)),
    (dec!(1000000), dec!(0.0699)),
];

const CT_HEAD_OF_HOUSEHOLD: Thresholds = &[
    (dec!(0), dec!(0.02)),
    (dec!(16000), dec!(0.045)),
    (dec!(80000), dec!(0.055)),
    (dec!(160000), dec!(0.06)),
    (dec!(320000), dec!(0.065)),
    (dec!(400000), dec!(0.069)),
    (dec!(800000), dec!(0.0699)),
];

// --- Hawaii ---

const HI_SINGLE: Thresholds = &[
    (dec!(0), dec!(0.014)),
    (dec!(9600), dec!(0.032)),
    (dec!(14400), dec!(0.055)),
    (dec!(19200), dec!(0.064)),
    (dec!(24000), dec!(0.068)),
    (dec!(36000), dec!(0.072)),
    (dec!(48000), dec!(0.076)),
    (dec!(125000), dec!(0.079)),
    (dec!(175000), dec!(0.0825)),
    (dec!(225000), dec!(0.09)),
    (dec!(275000), dec!(0.10)),
    (dec!(325000), dec!(0.11)),
];

const HI_JOINT: Thresholds = &[
    (dec!(0), dec!(0.014)),
    (dec!(19200), dec!(0.032)),
    (dec!(28800), dec!(0.055)),
    (dec!(38400), dec!(0.064)),
    (dec!(48000), dec!(0.068)),
    (dec!(72000), dec!(0.072)),
    (dec!(96000), dec!(0.076)),
    (dec!(250000), dec!(0.079)),
    (dec!(350000), dec!(0.0825)),
    (dec!(450000), dec!(0.09)),
    (dec!(550000), dec!(0.10)),
    (dec!(650000), dec!(0.11)),
];

const HI_HEAD_OF_HOUSEHOLD: Thresholds = &[
    (dec!(0), dec!(0.014)),
    (dec!(14400), dec!(0.032)),
    (dec!(21600), dec!(0.055)),
    (dec!(28800), dec!(0.064)),
    (dec!(36000), dec!(0.068)),
    (dec!(54000), dec!(0.072)),
    (dec!(72000), dec!(0.076)),
    (dec!(187500), dec!(0.079)),
    (dec!(262500), dec!(0.0825)),
    (dec!(337500), dec!(0.09)),
    (dec!(412500), dec!(0.10)),
    (dec!(487500), dec!(0.11)),
];

// --- Maryland (state rate only; county income taxes are not modelled) ---

const MD_SINGLE: Thresholds = &[
    (dec!(0), dec!(0.02)),
    (dec!(1000), dec!(0.03)),
    (dec!(2000), dec!(0.04)),
    (dec!(3000), dec!(0.0475)),
    (dec!(100000), dec!(0.05)),
    (dec!(125000), dec!(0.0525)),
    (dec!(150000), dec!(0.055)),
    (dec!(250000), dec!(0.0575)),
    (dec!(500000), dec!(0.0625)),
    (dec!(1000000), dec!(0.065)),
];

const MD_JOINT: Thresholds = &[
    (dec!(0), dec!(0.02)),
    (dec!(1000), dec!(0.03)),
    (dec!(2000), dec!(0.04)),
    (dec!(3000), dec!(0.0475)),
    (dec!(150000), dec!(0.05)),
    (dec!(175000), dec!(0.0525)),
    (dec!(225000), dec!(0.055)),
    (dec!(300000), dec!(0.0575)),
    (dec!(600000), dec!(0.0625)),
    (dec!(1200000), dec!(0.065)),
];

// --- Minnesota ---

const MN_SINGLE: Thresholds = &[
    (dec!(0), dec!(0.0535)),
    (dec!(33310), dec!(0.068)),
    (dec!(109430), dec!(0.0785)),
    (dec!(203150), dec!(0.0985)),
];

const MN_JOINT: Thresholds = &[
    (dec!(0), dec!(0.0535)),
    (dec!(48700), dec!(0.068)),
    (dec!(193480), dec!(0.0785)),
    (dec!(337930), dec!(0.0985)),
];

const MN_SEPARATE: Thresholds = &[
    (dec!(0), dec!(0.0535)),
    (dec!(24350), dec!(0.068)),
    (dec!(96740), dec!(0.0785)),
    (dec!(168965), dec!(0.0985)),
];

const MN_HEAD_OF_HOUSEHOLD: Thresholds = &[
    (dec!(0), dec!(0.0535)),
    (dec!(41010), dec!(0.068)),
    (dec!(164800), dec!(0.0785)),
    (dec!(270060), dec!(0.0985)),
];

// --- Vermont ---

const VT_SINGLE: Thresholds = &[
    (dec!(0), dec!(0.0335)),
    (dec!(47900), dec!(0.066)),
    (dec!(116000), dec!(0.076)),
    (dec!(242000), dec!(0.0875)),
];

const VT_JOINT: Thresholds = &[
    (dec!(0), dec!(0.0335)),
    (dec!(79950), dec!(0.066)),
    (dec!(193300), dec!(0.076)),
    (dec!(294600), dec!(0.0875)),
];

const VT_SEPARATE: Thresholds = &[
    (dec!(0), dec!(0.0335)),
    (dec!(39975), dec!(0.066)),
    (dec!(96650), dec!(0.076)),
    (dec!(147300), dec!(0.0875)),
];

const VT_HEAD_OF_HOUSEHOLD: Thresholds = &[
    (dec!(0), dec!(0.0335)),
    (dec!(64200), dec!(0.066)),
    (dec!(165700), dec!(0.076)),
    (dec!(268300), dec!(0.0875)),
];

// --- Wisconsin ---

const WI_SINGLE: Thresholds = &[
    (dec!(0), dec!(0.035)),
    (dec!(14680), dec!(0.044)),
    (dec!(29370), dec!(0.053)),
    (dec!(323290), dec!(0.0765)),
];

const WI_JOINT: Thresholds = &[
    (dec!(0), dec!(0.035)),
    (dec!(19580), dec!(0.044)),
    (dec!(39150), dec!(0.053)),
    (dec!(431060), dec!(0.0765)),
];

const WI_SEPARATE: Thresholds = &[
    (dec!(0), dec!(0.035)),
    (dec!(9790), dec!(0.044)),
    (dec!(19575), dec!(0.053)),
    (dec!(215530), dec!(0.0765)),
];

// --- single / joint states ---

const AL_SINGLE: Thresholds = &[(dec!(0), dec!(0.02)), (dec!(500), dec!(0.04)), (dec!(3000), dec!(0.05))];
const AL_JOINT: Thresholds = &[(dec!(0), dec!(0.02)), (dec!(1000), dec!(0.04)), (dec!(6000), dec!(0.05))];

const KS_SINGLE: Thresholds = &[(dec!(0), dec!(0.052)), (dec!(23000), dec!(0.0558))];
const KS_JOINT: Thresholds = &[(dec!(0), dec!(0.052)), (dec!(46000), dec!(0.0558))];

const ME_SINGLE: Thresholds = &[
    (dec!(0), dec!(0.058)),
    (dec!(27400), dec!(0.0675)),
    (dec!(64850), dec!(0.0715)),
];
const ME_JOINT: Thresholds = &[
    (dec!(0), dec!(0.058)),
    (dec!(54850), dec!(0.0675)),
    (dec!(129750), dec!(0.0715)),
];

const MT_SINGLE: Thresholds = &[(dec!(0), dec!(0.047)), (dec!(47500), dec!(0.0565))];
const MT_JOINT: Thresholds = &[(dec!(0), dec!(0.047)), (dec!(95000), dec!(0.0565))];

const NE_SINGLE: Thresholds = &[
    (dec!(0), dec!(0.0246)),
    (dec!(4030), dec!(0.0351)),
    (dec!(24120), dec!(0.0455)),
];
const NE_JOINT: Thresholds = &[
    (dec!(0), dec!(0.0246)),
    (dec!(8040), dec!(0.0351)),
    (dec!(48250), dec!(0.0455)),
];

const NM_SINGLE: Thresholds = &[
    (dec!(0), dec!(0.015)),
    (dec!(5500), dec!(0.032)),
    (dec!(16500), dec!(0.043)),
    (dec!(33500), dec!(0.047)),
    (dec!(66500), dec!(0.049)),
    (dec!(210000), dec!(0.059)),
];
const NM_JOINT: Thresholds = &[
    (dec!(0), dec!(0.015)),
    (dec!(8000), dec!(0.032)),
    (dec!(25000), dec!(0.043)),
    (dec!(50000), dec!(0.047)),
    (dec!(100000), dec!(0.049)),
    (dec!(315000), dec!(0.059)),
];

const ND_SINGLE: Thresholds = &[
    (dec!(0), dec!(0)),
    (dec!(48475), dec!(0.0195)),
    (dec!(244825), dec!(0.025)),
];
const ND_JOINT: Thresholds = &[
    (dec!(0), dec!(0)),
    (dec!(80975), dec!(0.0195)),
    (dec!(298075), dec!(0.025)),
];

const OK_SINGLE: Thresholds = &[
    (dec!(0), dec!(0)),
    (dec!(3750), dec!(0.025)),
    (dec!(4900), dec!(0.035)),
    (dec!(7200), dec!(0.045)),
];
const OK_JOINT: Thresholds = &[
    (dec!(0), dec!(0)),
    (dec!(7500), dec!(0.025)),
    (dec!(9800), dec!(0.035)),
    (dec!(14400), dec!(0.045)),
];

// --- single-table states ---

const VA_ALL: Thresholds = &[
    (dec!(0), dec!(0.02)),
    (dec!(3000), dec!(0.03)),
    (dec!(5000), dec!(0.05)),
    (dec!(17000), dec!(0.0575)),
];

// 4% surtax on income above the indexed millionaire threshold
const MA_ALL: Thresholds = &[(dec!(0), dec!(0.05)), (dec!(1083150), dec!(0.09))];

// First 10,000 of taxable income is exempt
const MS_ALL: Thresholds = &[(dec!(0), dec!(0)), (dec!(10000), dec!(0.044))];

// The first 5,500 is taxed at 0%
const AR_ALL: Thresholds = &[
    (dec!(0), dec!(0)),
    (dec!(5500), dec!(0.02)),
    (dec!(10900), dec!(0.03)),
    (dec!(15600), dec!(0.034)),
    (dec!(25700), dec!(0.039)),
];

const DE_ALL: Thresholds = &[
    (dec!(0), dec!(0)),
    (dec!(2000), dec!(0.022)),
    (dec!(5000), dec!(0.039)),
    (dec!(10000), dec!(0.048)),
    (dec!(20000), dec!(0.052)),
    (dec!(25000), dec!(0.0555)),
    (dec!(60000), dec!(0.066)),
];

const MO_ALL: Thresholds = &[
    (dec!(0), dec!(0)),
    (dec!(1313), dec!(0.02)),
    (dec!(2626), dec!(0.025)),
    (dec!(3939), dec!(0.03)),
    (dec!(5252), dec!(0.035)),
    (dec!(6565), dec!(0.04)),
    (dec!(7878), dec!(0.045)),
    (dec!(9191), dec!(0.047)),
];

// 2.75% on nonbusiness income above 26,050
const OH_ALL: Thresholds = &[(dec!(0), dec!(0)), (dec!(26050), dec!(0.0275))];

const RI_ALL: Thresholds = &[
    (dec!(0), dec!(0.0375)),
    (dec!(82050), dec!(0.0475)),
    (dec!(186450), dec!(0.0599)),
];

const SC_ALL: Thresholds = &[(dec!(0), dec!(0)), (dec!(3560), dec!(0.03)), (dec!(17830), dec!(0.06))];

const WV_ALL: Thresholds = &[
    (dec!(0), dec!(0.0222)),
    (dec!(10000), dec!(0.0296)),
    (dec!(25000), dec!(0.0333)),
    (dec!(40000), dec!(0.0444)),
    (dec!(60000), dec!(0.0482)),
];

const DC_ALL: Thresholds = &[
    (dec!(0), dec!(0.04)),
    (dec!(10000), dec!(0.06)),
    (dec!(40000), dec!(0.065)),
    (dec!(60000), dec!(0.085)),
    (dec!(250000), dec!(0.0925)),
    (dec!(500000), dec!(0.0975)),
    (dec!(1000000), dec!(0.1075)),
];


/// Deductions listed in `FilingStatus::ALL` order: S, MFJ, MFS, HOH, QSS.
const fn by_status(amounts: [Decimal; 5]) -> FilingStatusAmounts {
    FilingStatusAmounts {
        single: amounts[0],
        married_filing_jointly: amounts[1],
        married_filing_separately: amounts[2],
        head_of_household: amounts[3],
        qualifying_surviving_spouse: amounts[4],
    }
}

fn no_income_tax(
    code: &str,
    name: &str,
) -> StateTaxProfile {
    StateTaxProfile::new(code, name, StateTaxMethod::NoIncomeTax)
}

fn flat(
    code: &str,
    name: &str,
    rate: Decimal,
    deductions: FilingStatusAmounts,
) -> StateTaxProfile {
    let standard_deductions = FilingStatus::ALL
        .into_iter()
        .map(|status| (status, deductions.get(status)))
        .collect();

    StateTaxProfile::new(
        code,
        name,
        StateTaxMethod::Flat {
            rate,
            standard_deductions,
        },
    )
}

/// Progressive profile where `tables` picks the threshold list per status.
fn progressive(
    code: &str,
    name: &str,
    deductions: FilingStatusAmounts,
    tables: impl Fn(FilingStatus) -> Thresholds,
) -> Result<StateTaxProfile, BracketScheduleError> {
    let mut schedules = BTreeMap::new();

    for status in FilingStatus::ALL {
        let schedule = FilingSchedule {
            standard_deduction: deductions.get(status),
            brackets: BracketSchedule::from_thresholds(tables(status))?,
        };
        schedules.insert(status, schedule);
    }

    Ok(StateTaxProfile::new(code, name, StateTaxMethod::Progressive { schedules }))
}

fn single_or_joint(
    single: Thresholds,
    joint: Thresholds,
) -> impl Fn(FilingStatus) -> Thresholds {
    move |status| match status {
        FilingStatus::Single | FilingStatus::MarriedFilingSeparately => single,
        _ => joint,
    }
}

fn progressive_profiles() -> Result<Vec<StateTaxProfile>, BracketScheduleError> {
    Ok(vec![
        progressive(
            "CA",
            "California",
            by_status([dec!(5706), dec!(11412), dec!(5706), dec!(11412), dec!(11412)]),
            |status| match status {
                FilingStatus::Single | FilingStatus::MarriedFilingSeparately => CA_SINGLE,
                FilingStatus::HeadOfHousehold => CA_HEAD_OF_HOUSEHOLD,
                _ => CA_JOINT,
            },
        )?,
        progressive(
            "NY",
            "New York",
            by_status([dec!(8000), dec!(16050), dec!(8000), dec!(11200), dec!(16050)]),
            |status| match status {
                FilingStatus::Single | FilingStatus::MarriedFilingSeparately => NY_SINGLE,
                FilingStatus::HeadOfHousehold => NY_HEAD_OF_HOUSEHOLD,
                _ => NY_JOINT,
            },
        )?,
        progressive(
            "NJ",
            "New Jersey",
            by_status([dec!(1000), dec!(2000), dec!(1000), dec!(1000), dec!(1000)]),
            single_or_joint(NJ_SINGLE, NJ_JOINT),
        )?,
        progressive(
            "OR",
            "Oregon",
            by_status([dec!(2835), dec!(5670), dec!(2835), dec!(4560), dec!(5670)]),
            single_or_joint(OR_SINGLE, OR_JOINT),
        )?,
        progressive(
            "VA",
            "Virginia",
            by_status([dec!(8500), dec!(17000), dec!(8500), dec!(8500), dec!(17000)]),
            |_| VA_ALL,
        )?,
        progressive(
            "MA",
            "Massachusetts",
            by_status([dec!(4400), dec!(8800), dec!(4400), dec!(6800), dec!(4400)]),
            |_| MA_ALL,
        )?,
        progressive(
            "MS",
            "Mississippi",
            by_status([dec!(8300), dec!(16600), dec!(8300), dec!(12900), dec!(16600)]),
            |_| MS_ALL,
        )?,
        progressive(
            "AL",
            "Alabama",
            by_status([dec!(4500), dec!(11500), dec!(5750), dec!(8200), dec!(11500)]),
            single_or_joint(AL_SINGLE, AL_JOINT),
        )?,
        progressive(
            "AR",
            "Arkansas",
            by_status([dec!(2410), dec!(4820), dec!(2410), dec!(2410), dec!(4820)]),
            |_| AR_ALL,
        )?,
        progressive(
            "CT",
            "Connecticut",
            by_status([dec!(15000), dec!(24000), dec!(12000), dec!(19000), dec!(24000)]),
            |status| match status {
                FilingStatus::Single | FilingStatus::MarriedFilingSeparately => CT_SINGLE,
                FilingStatus::HeadOfHousehold => CT_HEAD_OF_HOUSEHOLD,
                _ => CT_JOINT,
            },
        )?,
        progressive(
            "DE",
            "Delaware",
            by_status([dec!(3250), dec!(6500), dec!(3250), dec!(3250), dec!(6500)]),
            |_| DE_ALL,
        )?,
        progressive("DC", "District of Columbia", STANDARD_DEDUCTION_2026, |_| DC_ALL)?,
        progressive(
            "HI",
            "Hawaii",
            by_status([dec!(8000), dec!(16000), dec!(8000), dec!(12000), dec!(16000)]),
            |status| match status {
                FilingStatus::Single | FilingStatus::MarriedFilingSeparately => HI_SINGLE,
                FilingStatus::HeadOfHousehold => HI_HEAD_OF_HOUSEHOLD,
                _ => HI_JOINT,
            },
        )?,
        progressive(
            "KS",
            "Kansas",
            by_status([dec!(12765), dec!(26560), dec!(13280), dec!(15340), dec!(26560)]),
            single_or_joint(KS_SINGLE, KS_JOINT),
        )?,
        progressive("ME", "Maine", STANDARD_DEDUCTION_2026, single_or_joint(ME_SINGLE, ME_JOINT))?,
        progressive(
            "MD",
            "Maryland",
            by_status([dec!(6550), dec!(13100), dec!(6550), dec!(9900), dec!(13100)]),
            single_or_joint(MD_SINGLE, MD_JOINT),
        )?,
        progressive(
            "MN",
            "Minnesota",
            by_status([dec!(15300), dec!(30600), dec!(15300), dec!(23000), dec!(30600)]),
            |status| match status {
                FilingStatus::Single => MN_SINGLE,
                FilingStatus::MarriedFilingSeparately => MN_SEPARATE,
                FilingStatus::HeadOfHousehold => MN_HEAD_OF_HOUSEHOLD,
                _ => MN_JOINT,
            },
        )?,
        progressive("MO", "Missouri", STANDARD_DEDUCTION_2026, |_| MO_ALL)?,
        progressive("MT", "Montana", STANDARD_DEDUCTION_2026, single_or_joint(MT_SINGLE, MT_JOINT))?,
        progressive(
            "NE",
            "Nebraska",
            by_status([dec!(8600), dec!(17200), dec!(8600), dec!(12650), dec!(17200)]),
            single_or_joint(NE_SINGLE, NE_JOINT),
        )?,
        progressive("NM", "New Mexico", STANDARD_DEDUCTION_2026, single_or_joint(NM_SINGLE, NM_JOINT))?,
        progressive("ND", "North Dakota", STANDARD_DEDUCTION_2026, single_or_joint(ND_SINGLE, ND_JOINT))?,
        progressive("OH", "Ohio", FilingStatusAmounts::uniform(dec!(0)), |_| OH_ALL)?,
        progressive(
            "OK",
            "Oklahoma",
            by_status([dec!(7350), dec!(14700), dec!(7350), dec!(10350), dec!(14700)]),
            single_or_joint(OK_SINGLE, OK_JOINT),
        )?,
        progressive(
            "RI",
            "Rhode Island",
            by_status([dec!(16000), dec!(32000), dec!(16000), dec!(21450), dec!(32000)]),
            |_| RI_ALL,
        )?,
        progressive("SC", "South Carolina", STANDARD_DEDUCTION_2026, |_| SC_ALL)?,
        progressive(
            "VT",
            "Vermont",
            by_status([dec!(12500), dec!(25050), dec!(12500), dec!(16200), dec!(25050)]),
            |status| match status {
                FilingStatus::Single => VT_SINGLE,
                FilingStatus::MarriedFilingSeparately => VT_SEPARATE,
                FilingStatus::HeadOfHousehold => VT_HEAD_OF_HOUSEHOLD,
                _ => VT_JOINT,
            },
        )?,
        progressive(
            "WV",
            "West Virginia",
            by_status([dec!(2000), dec!(4000), dec!(2000), dec!(2000), dec!(4000)]),
            |_| WV_ALL,
        )?,
        progressive(
            "WI",
            "Wisconsin",
            by_status([dec!(14630), dec!(27190), dec!(12950), dec!(18700), dec!(27190)]),
            |status| match status {
                FilingStatus::MarriedFilingSeparately => WI_SEPARATE,
                FilingStatus::MarriedFilingJointly | FilingStatus::QualifyingSurvivingSpouse => WI_JOINT,
                _ => WI_SINGLE,
            },
        )?,
    ])
}

fn flat_profiles() -> Vec<StateTaxProfile> {
    vec![
        flat("AZ", "Arizona", dec!(0.025), STANDARD_DEDUCTION_2026),
        flat("CO", "Colorado", dec!(0.044), STANDARD_DEDUCTION_2026),
        flat(
            "GA",
            "Georgia",
            dec!(0.0519),
            by_status([dec!(12000), dec!(24000), dec!(12000), dec!(12000), dec!(24000)]),
        ),
        flat("IA", "Iowa", dec!(0.038), STANDARD_DEDUCTION_2026),
        flat("ID", "Idaho", dec!(0.053), STANDARD_DEDUCTION_2026),
        flat(
            "IL",
            "Illinois",
            dec!(0.0495),
            by_status([dec!(2850), dec!(5700), dec!(2850), dec!(2850), dec!(2850)]),
        ),
        flat(
            "IN",
            "Indiana",
            dec!(0.0295),
            by_status([dec!(1000), dec!(2000), dec!(1000), dec!(1000), dec!(1000)]),
        ),
        flat(
            "KY",
            "Kentucky",
            dec!(0.035),
            by_status([dec!(3270), dec!(6540), dec!(3270), dec!(3270), dec!(3270)]),
        ),
        flat(
            "LA",
            "Louisiana",
            dec!(0.03),
            by_status([dec!(12500), dec!(25000), dec!(12500), dec!(25000), dec!(25000)]),
        ),
        flat(
            "MI",
            "Michigan",
            dec!(0.0425),
            by_status([dec!(5800), dec!(11600), dec!(5800), dec!(5800), dec!(5800)]),
        ),
        flat(
            "NC",
            "North Carolina",
            dec!(0.0399),
            by_status([dec!(12750), dec!(25500), dec!(12750), dec!(19125), dec!(25500)]),
        ),
        flat("PA", "Pennsylvania", dec!(0.0307), FilingStatusAmounts::uniform(dec!(0))),
        flat("UT", "Utah", dec!(0.045), FilingStatusAmounts::uniform(dec!(0))),
    ]
}

/// Every state profile for 2026.
pub fn state_profiles_2026() -> Result<Vec<StateTaxProfile>, BracketScheduleError> {
    let mut profiles: Vec<StateTaxProfile> = NO_INCOME_TAX
        .iter()
        .map(|(code, name)| no_income_tax(code, name))
        .collect();
    profiles.extend(flat_profiles());
    profiles.extend(progressive_profiles()?);
    Ok(profiles)
}
