//! Document-level checks that must hold before any code is generated.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::CompileError;
use crate::model::{GenericCheck, TslDocument};

// `[0-9]` rather than `\d`: the latter also accepts non-ASCII digits.
static NUMERIC_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?[0-9]+(\.[0-9]+)?$").expect("static regex"));

pub fn validate(doc: &TslDocument) -> Result<(), CompileError> {
    validate_unique_ids(doc)?;
    for check in &doc.tests {
        validate_numeric(check.meta.id, check.kind.generic_checks())?;
    }
    if doc.required_files.is_empty() {
        return Err(CompileError::NoRequiredFiles);
    }
    Ok(())
}

/// Every id that occurs more than once, reported in ascending order.
pub fn validate_unique_ids(doc: &TslDocument) -> Result<(), CompileError> {
    let mut seen = BTreeMap::<i64, usize>::new();
    for check in &doc.tests {
        *seen.entry(check.meta.id).or_default() += 1;
    }
    let dups: Vec<i64> = seen
        .into_iter()
        .filter(|&(_, n)| n > 1)
        .map(|(id, _)| id)
        .collect();
    if dups.is_empty() {
        Ok(())
    } else {
        Err(CompileError::DuplicateIds(dups))
    }
}

pub fn validate_numeric<'a, I>(check_id: i64, checks: I) -> Result<(), CompileError>
where
    I: IntoIterator<Item = &'a GenericCheck>,
{
    for gc in checks.into_iter().filter(|gc| gc.is_numeric) {
        for value in &gc.expected_value {
            if !is_number(value) {
                return Err(CompileError::NotNumeric {
                    check_id,
                    value: value.clone(),
                });
            }
        }
    }
    Ok(())
}

/// Values are trimmed first, matching what the literal encoder emits.
pub fn is_number(value: &str) -> bool {
    NUMERIC_RE.is_match(value.trim())
}
