//! Construction-time dataset validation.
//!
//! Collects every defect of a record list in one pass. Structural defects
//! (duplicate ids, empty required fields, malformed links, out-of-range
//! values) are always errors; dangling relation ids follow `DanglingPolicy`.

use std::collections::HashSet;

use regex::Regex;
use url::Url;

use crate::config::DanglingPolicy;
use crate::error::{GridError, Result};
use crate::model::{LinkType, Record};

const ID_PATTERN: &str = r"^[a-z0-9]+(-[a-z0-9]+)*$";

/// Outcome of validating one table.
#[derive(Debug, Default)]
pub struct ValidationReport {
    pub errors: Vec<GridError>,
    pub warnings: Vec<GridError>,
}

impl ValidationReport {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn merge(&mut self, other: ValidationReport) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }

    /// `Ok` when there are no errors, otherwise `GridError::Validation`.
    pub fn into_result(self) -> Result<()> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(GridError::Validation(self.errors))
        }
    }
}

pub fn validate_records<T: Record>(records: &[T], policy: DanglingPolicy) -> ValidationReport {
    let mut report = ValidationReport::default();
    let id_regex = Regex::new(ID_PATTERN).expect("Invalid regex pattern");
    let kind = T::KIND;

    let mut seen = HashSet::new();
    for record in records {
        let id = record.id();
        if !seen.insert(id) {
            report.errors.push(GridError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }

        if !id_regex.is_match(id) {
            report.errors.push(GridError::InvalidRecord {
                kind,
                id: id.to_string(),
                reason: format!("id must be a lowercase slug matching {}", ID_PATTERN),
            });
        }

        for (field, value) in record.required_fields() {
            if value.trim().is_empty() {
                report.errors.push(GridError::MissingField {
                    kind,
                    id: id.to_string(),
                    field,
                });
            }
        }

        for link in record.links() {
            if let Err(reason) = check_link_url(&link.url, link.link_type) {
                report.errors.push(GridError::InvalidRecord {
                    kind,
                    id: id.to_string(),
                    reason: format!("link '{}': {}", link.label, reason),
                });
            }
        }

        for stat in record.stats() {
            if !stat.value.is_finite() {
                report.errors.push(GridError::InvalidRecord {
                    kind,
                    id: id.to_string(),
                    reason: format!("stat '{}' is not a finite number", stat.label),
                });
            }
        }

        for reason in record.check() {
            report.errors.push(GridError::InvalidRecord {
                kind,
                id: id.to_string(),
                reason,
            });
        }
    }

    for record in records {
        for target in record.relation_ids() {
            if seen.contains(target.as_str()) {
                continue;
            }
            let defect = GridError::DanglingReference {
                kind,
                id: record.id().to_string(),
                target: target.clone(),
            };
            match policy {
                DanglingPolicy::Warn => {
                    log::warn!("{}; it will be skipped when resolving related records", defect);
                    report.warnings.push(defect);
                }
                DanglingPolicy::Deny => report.errors.push(defect),
            }
        }
    }

    report
}

/// Internal links are site-absolute paths; external links are absolute http(s) URLs.
fn check_link_url(raw: &str, link_type: LinkType) -> std::result::Result<(), String> {
    match link_type {
        LinkType::Internal => {
            if raw.starts_with('/') && !raw.starts_with("//") {
                Ok(())
            } else {
                Err(format!("internal url must start with '/': {}", raw))
            }
        }
        LinkType::External => {
            let url = Url::parse(raw).map_err(|e| format!("invalid external url {}: {}", raw, e))?;
            match url.scheme() {
                "http" | "https" => Ok(()),
                other => Err(format!("unsupported scheme '{}' in {}", other, raw)),
            }
        }
    }
}
