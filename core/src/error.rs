use thiserror::Error;

/// Result type for nii2dcm operations
pub type Result<T> = std::result::Result<T, Nii2DcmError>;

/// Error types for nii2dcm operations
#[derive(Error, Debug)]
pub enum Nii2DcmError {
    /// Malformed tag dictionary definition
    #[error("Dictionary error: {0}")]
    Dictionary(String),

    /// Attribute keyword not known to the tag registry
    #[error("Unknown attribute keyword: {0}")]
    UnknownKeyword(String),

    /// Attempt to change an attribute pinned by the modality specialization
    #[error("Attribute {keyword} is fixed to '{value}' for this modality")]
    FixedAttribute { keyword: String, value: String },

    /// Value cannot be represented with the attribute's VR
    #[error("Invalid value: {0}")]
    InvalidValue(String),

    /// File meta group could not be assembled
    #[error("File meta error: {0}")]
    MetaTable(String),

    /// Serialization failure reported by the DICOM encoder
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// DICOM reading error
    #[error("DICOM error: {0}")]
    DicomError(String),

    /// I/O error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<dicom_object::WriteError> for Nii2DcmError {
    fn from(e: dicom_object::WriteError) -> Self {
        Nii2DcmError::Encoding(format!("{}", e))
    }
}

impl From<dicom_object::WithMetaError> for Nii2DcmError {
    fn from(e: dicom_object::WithMetaError) -> Self {
        Nii2DcmError::MetaTable(format!("{}", e))
    }
}

impl From<dicom_object::ReadError> for Nii2DcmError {
    fn from(e: dicom_object::ReadError) -> Self {
        Nii2DcmError::DicomError(format!("{}", e))
    }
}

impl From<dicom_core::value::ConvertValueError> for Nii2DcmError {
    fn from(e: dicom_core::value::ConvertValueError) -> Self {
        Nii2DcmError::InvalidValue(format!("{}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_attribute_message() {
        let err = Nii2DcmError::FixedAttribute {
            keyword: "Modality".to_string(),
            value: "MR".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Attribute Modality is fixed to 'MR' for this modality"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: Nii2DcmError = io.into();
        assert!(matches!(err, Nii2DcmError::IoError(_)));
    }
}
