//! Row-wise cleaning pipeline and the phone-gated filter.
//!
//! Every record is normalized independently; there is no cross-record
//! state. After the transform, records without a valid phone are dropped
//! and the aggregate statistics are accumulated as a side artifact.

use leadwash_model::{CleanSummary, LeadRecord};
use tracing::debug;

use crate::date::clean_date;
use crate::email::normalize_email;
use crate::fields::{clean_age, clean_gender, clean_name, clean_source};
use crate::phone::normalize_phone;

/// Result of cleaning one dataset: retained records plus statistics.
#[derive(Debug, Clone)]
pub struct CleanOutcome {
    pub records: Vec<LeadRecord>,
    pub summary: CleanSummary,
}

/// Normalize every field of a record in place.
///
/// Field order matches the column order; correctness does not depend on
/// it since fields are independent.
pub fn clean_record(record: &mut LeadRecord) {
    record.tel = normalize_phone(record.tel.as_deref());
    record.email = normalize_email(record.email.as_deref());
    record.name = clean_name(record.name.as_deref());
    record.firstname = clean_name(record.firstname.as_deref());
    record.idade = clean_age(record.idade.as_deref()).map(|age| age.to_string());
    record.sexo = clean_gender(record.sexo.as_deref());
    record.onde = Some(clean_source(record.onde.as_deref()));
    record.date = clean_date(record.date.as_deref());
}

/// Two-digit dialing code of an E.164 number.
fn ddd_of(tel: &str) -> Option<&str> {
    tel.strip_prefix("+55").and_then(|national| national.get(..2))
}

/// Clean a full dataset and drop records without a valid phone.
///
/// Phone counts cover all input rows; email counts and the frequency maps
/// cover retained rows only.
pub fn clean_dataset(records: Vec<LeadRecord>) -> CleanOutcome {
    let mut summary = CleanSummary {
        input_rows: records.len(),
        ..CleanSummary::default()
    };
    let mut retained = Vec::with_capacity(records.len());

    for mut record in records {
        clean_record(&mut record);
        let Some(tel) = record.tel.as_deref() else {
            summary.invalid_phones += 1;
            continue;
        };
        summary.valid_phones += 1;
        if let Some(ddd) = ddd_of(tel) {
            *summary.ddd_counts.entry(ddd.to_string()).or_insert(0) += 1;
        }
        if record.email.is_some() {
            summary.valid_emails += 1;
        } else {
            summary.invalid_emails += 1;
        }
        if let Some(source) = record.onde.clone() {
            *summary.source_counts.entry(source).or_insert(0) += 1;
        }
        retained.push(record);
    }

    summary.retained_rows = retained.len();
    debug!(
        input_rows = summary.input_rows,
        retained_rows = summary.retained_rows,
        valid_emails = summary.valid_emails,
        "dataset cleaned"
    );
    CleanOutcome {
        records: retained,
        summary,
    }
}
