//! Display formatters for catalog and clinical values
//!
//! Pure functions mapping a domain value to a display string. Missing or
//! empty input renders the placeholder, never an error.

use chrono::NaiveDateTime;

use crate::catalog::models::{Disorder, FileRef, Phenotype};
use crate::clinical::models::ClinicalAnalysis;

/// Rendered for absent or empty values.
pub const PLACEHOLDER: &str = "-";

/// Format a phenotype list as `Name (id)` entries joined by `; `.
pub fn phenotypes(phenotypes: &[Phenotype]) -> String {
    if phenotypes.is_empty() {
        return PLACEHOLDER.to_string();
    }
    phenotypes
        .iter()
        .map(|p| named_with_id(p.name.as_deref(), &p.id))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Format a disorder as `Name (id)`.
pub fn disorder(disorder: Option<&Disorder>) -> String {
    match disorder {
        Some(d) => named_with_id(d.name.as_deref(), &d.id),
        None => PLACEHOLDER.to_string(),
    }
}

/// Format a file list as names (falling back to ids) joined by `, `.
pub fn files(files: &[FileRef]) -> String {
    if files.is_empty() {
        return PLACEHOLDER.to_string();
    }
    files
        .iter()
        .map(|f| f.name.as_deref().unwrap_or(&f.id).to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Format an OpenCGA timestamp (`yyyyMMddHHmmss`, or the date-only
/// `yyyyMMdd` form) as `dd Mon yyyy[, HH:MM]`.
pub fn datetime(stamp: &str) -> String {
    let stamp = stamp.trim();
    if let Ok(dt) = NaiveDateTime::parse_from_str(stamp, "%Y%m%d%H%M%S") {
        return dt.format("%d %b %Y, %H:%M").to_string();
    }
    if let Ok(date) = chrono::NaiveDate::parse_from_str(stamp, "%Y%m%d") {
        return date.format("%d %b %Y").to_string();
    }
    PLACEHOLDER.to_string()
}

/// Format a case list as ids joined by `, `.
pub fn case_ids(cases: &[ClinicalAnalysis]) -> String {
    if cases.is_empty() {
        return PLACEHOLDER.to_string();
    }
    cases
        .iter()
        .map(|c| c.id.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn named_with_id(name: Option<&str>, id: &str) -> String {
    match name {
        Some(name) if !name.is_empty() => format!("{name} ({id})"),
        _ => id.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phenotype(id: &str, name: Option<&str>) -> Phenotype {
        Phenotype {
            id: id.to_string(),
            name: name.map(str::to_string),
            source: None,
            age_of_onset: None,
            status: None,
        }
    }

    #[test]
    fn test_phenotypes_joined_with_ids() {
        let list = vec![
            phenotype("HP:0001250", Some("Seizure")),
            phenotype("HP:0004322", None),
        ];
        assert_eq!(phenotypes(&list), "Seizure (HP:0001250); HP:0004322");
    }

    #[test]
    fn test_empty_input_renders_placeholder() {
        assert_eq!(phenotypes(&[]), PLACEHOLDER);
        assert_eq!(disorder(None), PLACEHOLDER);
        assert_eq!(files(&[]), PLACEHOLDER);
        assert_eq!(case_ids(&[]), PLACEHOLDER);
    }

    #[test]
    fn test_datetime_full_and_date_only() {
        assert_eq!(datetime("20250114093015"), "14 Jan 2025, 09:30");
        assert_eq!(datetime("20250114"), "14 Jan 2025");
    }

    #[test]
    fn test_datetime_invalid_renders_placeholder() {
        assert_eq!(datetime(""), PLACEHOLDER);
        assert_eq!(datetime("not-a-date"), PLACEHOLDER);
        assert_eq!(datetime("2025-01-14"), PLACEHOLDER);
    }

    #[test]
    fn test_files_fall_back_to_id() {
        let list = vec![
            FileRef {
                id: "bam:1".to_string(),
                name: Some("proband.bam".to_string()),
                path: None,
                size: None,
            },
            FileRef {
                id: "vcf:2".to_string(),
                name: None,
                path: None,
                size: None,
            },
        ];
        assert_eq!(files(&list), "proband.bam, vcf:2");
    }
}
