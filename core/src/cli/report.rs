use crate::api::DatasetSummary;
use crate::dataset::ValidationIssue;
use std::fmt;

/// Text report formatter for a built dataset
pub struct TextReport<'a> {
    summary: &'a DatasetSummary,
    issues: &'a [ValidationIssue],
}

impl<'a> TextReport<'a> {
    /// Creates a new text report
    pub fn new(summary: &'a DatasetSummary) -> Self {
        Self {
            summary,
            issues: &[],
        }
    }

    /// Appends validation findings to the report
    pub fn with_issues(mut self, issues: &'a [ValidationIssue]) -> Self {
        self.issues = issues;
        self
    }
}

fn or_empty(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("<empty>")
}

impl<'a> fmt::Display for TextReport<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.summary;
        writeln!(f, "DICOM Dataset")?;
        writeln!(f, "=============")?;
        writeln!(f)?;
        writeln!(f, "File:           {}", s.filename)?;
        writeln!(f, "Specialization: {}", s.specialization.simple_name())?;
        writeln!(f, "Modality:       {}", or_empty(&s.modality))?;
        writeln!(f, "SOP Class:      {}", or_empty(&s.sop_class_uid))?;
        writeln!(f, "Transfer Syntax: {}", s.transfer_syntax_uid)?;
        writeln!(f, "Attributes:     {}", s.attribute_count)?;
        writeln!(f)?;

        writeln!(f, "Identifiers")?;
        writeln!(f, "-----------")?;
        writeln!(f, "Study UID:      {}", or_empty(&s.study_instance_uid))?;
        writeln!(f, "Series UID:     {}", or_empty(&s.series_instance_uid))?;
        writeln!(f, "Frame of Ref:   {}", or_empty(&s.frame_of_reference_uid))?;
        writeln!(f, "Instance UID:   {}", or_empty(&s.sop_instance_uid))?;
        writeln!(f, "Content Date:   {}", or_empty(&s.content_date))?;
        writeln!(f, "Content Time:   {}", or_empty(&s.content_time))?;
        writeln!(f)?;

        writeln!(f, "Image")?;
        writeln!(f, "-----")?;
        writeln!(
            f,
            "Photometric:    {}",
            or_empty(&s.photometric_interpretation)
        )?;
        writeln!(f, "LUT Shape:      {}", or_empty(&s.presentation_lut_shape))?;
        match s.bits_allocated {
            Some(bits) => writeln!(f, "Bits Allocated: {}", bits)?,
            None => writeln!(f, "Bits Allocated: <empty>")?,
        }

        if !self.issues.is_empty() {
            writeln!(f)?;
            writeln!(f, "Validation")?;
            writeln!(f, "----------")?;
            for issue in self.issues {
                writeln!(f, "{}", issue)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::DatasetBuilder;
    use crate::types::ModalitySpecialization;

    #[test]
    fn test_text_report_format() {
        let ds = DatasetBuilder::new()
            .filename("report.dcm")
            .modality(ModalitySpecialization::Mr)
            .build()
            .unwrap();
        let summary = DatasetSummary::from_dataset(&ds);

        let output = format!("{}", TextReport::new(&summary));

        assert!(output.contains("DICOM Dataset"));
        assert!(output.contains("File:           report.dcm"));
        assert!(output.contains("Specialization: mr"));
        assert!(output.contains("Modality:       MR"));
        assert!(output.contains("SOP Class:      1.2.840.10008.5.1.4.1.1.4"));
        assert!(output.contains("Instance UID:   <empty>"));
        assert!(output.contains("Photometric:    MONOCHROME2"));
        assert!(output.contains("LUT Shape:      IDENTITY"));
        assert!(output.contains("Bits Allocated: 16"));
        assert!(!output.contains("Validation"));
    }

    #[test]
    fn test_text_report_with_issues() {
        let ds = DatasetBuilder::new().build().unwrap();
        let summary = DatasetSummary::from_dataset(&ds);
        let issues = ds.validate();

        let output = format!("{}", TextReport::new(&summary).with_issues(&issues));

        assert!(output.contains("Specialization: generic"));
        assert!(output.contains("Validation"));
        assert!(output.contains("error: Modality"));
    }
}
