use super::Dataset;
use crate::uid::is_valid_uid;
use std::fmt;

/// UID attributes checked for well-formedness
const UID_KEYWORDS: [&str; 5] = [
    "SOPClassUID",
    "SOPInstanceUID",
    "StudyInstanceUID",
    "SeriesInstanceUID",
    "FrameOfReferenceUID",
];

/// Severity of a validation finding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
#[cfg_attr(feature = "json", serde(rename_all = "lowercase"))]
pub enum Severity {
    /// The file should not be written as is
    Error,
    /// Caller responsibility that was not met
    Warning,
}

/// One finding of the ready-to-serialize check
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct ValidationIssue {
    pub severity: Severity,
    pub keyword: String,
    pub message: String,
}

impl ValidationIssue {
    fn error(keyword: &str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            keyword: keyword.to_string(),
            message: message.into(),
        }
    }

    fn warning(keyword: &str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            keyword: keyword.to_string(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        write!(f, "{}: {}: {}", level, self.keyword, self.message)
    }
}

/// Checks whether a dataset is ready to be written
///
/// Nothing here is enforced by writing; callers decide what to do with the
/// findings.
///
/// # Checks
///
/// 1. Modality and SOPClassUID are set
/// 2. MediaStorageSOPClassUID matches SOPClassUID
/// 3. SOPInstanceUID has been assigned
/// 4. UID attributes are well formed
/// 5. PresentationLUTShape agrees with PhotometricInterpretation
/// 6. HighBit equals BitsStored - 1 (warning)
pub fn validate(ds: &Dataset) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    for keyword in ["Modality", "SOPClassUID"] {
        if ds.get_str(keyword).unwrap_or_default().is_empty() {
            issues.push(ValidationIssue::error(keyword, "not set"));
        }
    }

    let sop_class = ds.get_str("SOPClassUID").unwrap_or_default();
    if ds.file_meta().media_storage_sop_class_uid != sop_class {
        issues.push(ValidationIssue::error(
            "MediaStorageSOPClassUID",
            format!(
                "'{}' does not match SOPClassUID '{}'",
                ds.file_meta().media_storage_sop_class_uid,
                sop_class
            ),
        ));
    }

    if ds.get_str("SOPInstanceUID").unwrap_or_default().is_empty() {
        issues.push(ValidationIssue::error("SOPInstanceUID", "not assigned"));
    }

    for keyword in UID_KEYWORDS {
        if let Some(uid) = ds.get_str(keyword) {
            if !uid.is_empty() && !is_valid_uid(&uid) {
                issues.push(ValidationIssue::error(
                    keyword,
                    format!("'{}' is not a valid UID", uid),
                ));
            }
        }
    }

    let expected = ds.expected_presentation_lut_shape().map(|s| s.as_str());
    let actual = ds.get_str("PresentationLUTShape");
    if expected != actual.as_deref() {
        issues.push(ValidationIssue::error(
            "PresentationLUTShape",
            format!(
                "'{}' is inconsistent with PhotometricInterpretation",
                actual.unwrap_or_default()
            ),
        ));
    }

    match (ds.get_u16("BitsStored"), ds.get_u16("HighBit")) {
        (Some(stored), Some(high)) if stored == 0 || high != stored - 1 => {
            issues.push(ValidationIssue::warning(
                "HighBit",
                format!("{} does not equal BitsStored - 1 ({})", high, stored),
            ));
        }
        (Some(_), None) | (None, Some(_)) => {
            issues.push(ValidationIssue::warning(
                "HighBit",
                "BitsStored and HighBit should be set together",
            ));
        }
        _ => {}
    }

    issues
}

/// True if no finding has error severity
pub fn is_ready(issues: &[ValidationIssue]) -> bool {
    !issues.iter().any(|i| i.severity == Severity::Error)
}

impl Dataset {
    /// Runs the ready-to-serialize check, see [`validate`]
    pub fn validate(&self) -> Vec<ValidationIssue> {
        validate(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{baseline, mr};
    use crate::dictionary::TagRegistry;
    use crate::types::CapturedInstant;
    use crate::uid::UuidUidGenerator;
    use std::sync::Arc;

    fn baseline_ds() -> Dataset {
        baseline::build(
            "v.dcm",
            Arc::new(TagRegistry::new()),
            Arc::new(UuidUidGenerator),
            CapturedInstant::now(),
        )
        .unwrap()
    }

    fn keywords(issues: &[ValidationIssue]) -> Vec<&str> {
        issues.iter().map(|i| i.keyword.as_str()).collect()
    }

    #[test]
    fn test_baseline_is_not_ready() {
        let issues = baseline_ds().validate();
        let kws = keywords(&issues);
        assert!(kws.contains(&"Modality"));
        assert!(kws.contains(&"SOPClassUID"));
        assert!(kws.contains(&"SOPInstanceUID"));
        assert!(!is_ready(&issues));
    }

    #[test]
    fn test_mr_with_instance_is_ready() {
        let mut ds = mr::specialize(baseline_ds()).unwrap();
        ds.assign_instance(1).unwrap();
        let issues = ds.validate();
        assert!(issues.is_empty(), "{:?}", issues);
        assert!(is_ready(&issues));
    }

    #[test]
    fn test_high_bit_mismatch_is_warning() {
        let mut ds = mr::specialize(baseline_ds()).unwrap();
        ds.assign_instance(1).unwrap();
        ds.set("BitsStored", 12_u16).unwrap();
        ds.set("HighBit", 15_u16).unwrap();

        let issues = ds.validate();
        assert_eq!(keywords(&issues), vec!["HighBit"]);
        assert_eq!(issues[0].severity, Severity::Warning);
        assert!(is_ready(&issues));

        ds.set("HighBit", 11_u16).unwrap();
        assert!(ds.validate().is_empty());
    }

    #[test]
    fn test_invalid_uid_reported() {
        let mut ds = mr::specialize(baseline_ds()).unwrap();
        ds.set("SOPInstanceUID", "1.02.abc").unwrap();
        let issues = ds.validate();
        assert!(issues
            .iter()
            .any(|i| i.keyword == "SOPInstanceUID" && i.severity == Severity::Error));
    }

    #[test]
    fn test_meta_sop_class_mismatch() {
        let mut ds = baseline_ds();
        ds.set("Modality", "MR").unwrap();
        ds.set("SOPClassUID", "1.2.840.10008.5.1.4.1.1.4").unwrap();
        ds.assign_instance(1).unwrap();
        let issues = ds.validate();
        assert_eq!(keywords(&issues), vec!["MediaStorageSOPClassUID"]);
    }

    #[test]
    fn test_issue_display() {
        let issue = ValidationIssue::warning("HighBit", "check");
        assert_eq!(issue.to_string(), "warning: HighBit: check");
    }
}
