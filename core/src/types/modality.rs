use dicom_dictionary_std::uids;
use std::fmt;

/// Modality specialization of a dataset
///
/// `Generic` leaves Modality and SOPClassUID for the caller to fill in,
/// `Mr` pins them to the MR Image Storage values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
#[cfg_attr(feature = "json", serde(rename_all = "lowercase"))]
pub enum ModalitySpecialization {
    #[default]
    Generic,
    Mr,
}

impl ModalitySpecialization {
    /// Value written to the Modality attribute
    pub fn modality_code(&self) -> &'static str {
        match self {
            ModalitySpecialization::Generic => "",
            ModalitySpecialization::Mr => "MR",
        }
    }

    /// SOP class UID stored in SOPClassUID and MediaStorageSOPClassUID
    pub fn sop_class_uid(&self) -> &'static str {
        match self {
            ModalitySpecialization::Generic => "",
            ModalitySpecialization::Mr => uids::MR_IMAGE_STORAGE,
        }
    }

    /// Returns simple name for display
    pub fn simple_name(&self) -> &'static str {
        match self {
            ModalitySpecialization::Generic => "generic",
            ModalitySpecialization::Mr => "mr",
        }
    }

    /// Whether this specialization pins Modality, SOPClassUID and BitsAllocated
    pub fn has_fixed_attributes(&self) -> bool {
        !matches!(self, ModalitySpecialization::Generic)
    }
}

impl fmt::Display for ModalitySpecialization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.simple_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mr_values() {
        let mr = ModalitySpecialization::Mr;
        assert_eq!(mr.modality_code(), "MR");
        assert_eq!(mr.sop_class_uid(), "1.2.840.10008.5.1.4.1.1.4");
        assert!(mr.has_fixed_attributes());
    }

    #[test]
    fn test_generic_values() {
        let generic = ModalitySpecialization::default();
        assert_eq!(generic, ModalitySpecialization::Generic);
        assert_eq!(generic.modality_code(), "");
        assert_eq!(generic.sop_class_uid(), "");
        assert!(!generic.has_fixed_attributes());
        assert_eq!(generic.to_string(), "generic");
    }
}
