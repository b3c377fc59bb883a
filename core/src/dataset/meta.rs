use crate::uid::IMPLEMENTATION_CLASS_UID;
use dicom_dictionary_std::uids;
use dicom_object::FileMetaTableBuilder;

/// Implementation version name written to the file meta group
pub const IMPLEMENTATION_VERSION_NAME: &str = "nii2dcm_DICOM";

/// File meta information accompanying one dataset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMetaHeader {
    /// Transfer syntax, Explicit VR Little Endian unless changed
    pub transfer_syntax_uid: String,
    pub implementation_version_name: String,
    pub implementation_class_uid: String,
    /// Left empty until a modality specialization or the caller sets it
    pub media_storage_sop_class_uid: String,
}

impl Default for FileMetaHeader {
    fn default() -> Self {
        Self {
            transfer_syntax_uid: uids::EXPLICIT_VR_LITTLE_ENDIAN.to_string(),
            implementation_version_name: IMPLEMENTATION_VERSION_NAME.to_string(),
            implementation_class_uid: IMPLEMENTATION_CLASS_UID.to_string(),
            media_storage_sop_class_uid: String::new(),
        }
    }
}

impl FileMetaHeader {
    /// Prepares a file meta table builder for the given SOP instance
    pub fn to_builder(&self, media_storage_sop_instance_uid: &str) -> FileMetaTableBuilder {
        FileMetaTableBuilder::new()
            .transfer_syntax(self.transfer_syntax_uid.as_str())
            .media_storage_sop_class_uid(self.media_storage_sop_class_uid.as_str())
            .media_storage_sop_instance_uid(media_storage_sop_instance_uid)
            .implementation_class_uid(self.implementation_class_uid.as_str())
            .implementation_version_name(self.implementation_version_name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let meta = FileMetaHeader::default();
        assert_eq!(meta.transfer_syntax_uid, "1.2.840.10008.1.2.1");
        assert_eq!(meta.implementation_version_name, "nii2dcm_DICOM");
        assert!(meta.media_storage_sop_class_uid.is_empty());
    }

    #[test]
    fn test_builder_produces_table() {
        let meta = FileMetaHeader {
            media_storage_sop_class_uid: "1.2.840.10008.5.1.4.1.1.4".to_string(),
            ..Default::default()
        };
        let table = meta.to_builder("2.25.1").build().unwrap();
        let trim = |s: &str| s.trim_end_matches('\0').to_string();
        assert_eq!(trim(&table.media_storage_sop_instance_uid), "2.25.1");
        assert_eq!(
            trim(&table.media_storage_sop_class_uid),
            "1.2.840.10008.5.1.4.1.1.4"
        );
        assert_eq!(trim(&table.transfer_syntax), "1.2.840.10008.1.2.1");
    }
}
