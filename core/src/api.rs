use crate::dataset::{baseline, mr, Dataset, DEFAULT_FILENAME};
use crate::dictionary::TagRegistry;
use crate::error::Result;
use crate::types::{CapturedInstant, ModalitySpecialization};
use crate::uid::{UidGenerator, UuidUidGenerator};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Builder for baseline and modality-specific datasets
///
/// Without further configuration, the builder targets
/// `nii2dcm_tempfile.dcm`, uses the process-wide [`TagRegistry::shared`]
/// registry, UUID-derived UIDs and the current time.
///
/// # Example
///
/// ```
/// use nii2dcm_core::{DatasetBuilder, ModalitySpecialization};
///
/// let ds = DatasetBuilder::new()
///     .filename("slice_001.dcm")
///     .modality(ModalitySpecialization::Mr)
///     .build()
///     .unwrap();
///
/// assert_eq!(ds.get_str("Modality").as_deref(), Some("MR"));
/// assert_eq!(ds.get_u16("BitsAllocated"), Some(16));
/// assert_eq!(ds.get_str("PresentationLUTShape").as_deref(), Some("IDENTITY"));
/// ```
pub struct DatasetBuilder {
    filename: PathBuf,
    registry: Option<Arc<TagRegistry>>,
    uids: Arc<dyn UidGenerator>,
    captured_at: Option<CapturedInstant>,
    modality: ModalitySpecialization,
}

impl Default for DatasetBuilder {
    fn default() -> Self {
        Self {
            filename: PathBuf::from(DEFAULT_FILENAME),
            registry: None,
            uids: Arc::new(UuidUidGenerator),
            captured_at: None,
            modality: ModalitySpecialization::Generic,
        }
    }
}

impl DatasetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Output filename of the dataset
    pub fn filename(mut self, filename: impl Into<PathBuf>) -> Self {
        self.filename = filename.into();
        self
    }

    /// Registry used to resolve keywords, instead of the shared one
    pub fn registry(mut self, registry: Arc<TagRegistry>) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Source of study, series and instance UIDs
    pub fn uid_generator(mut self, uids: Arc<dyn UidGenerator>) -> Self {
        self.uids = uids;
        self
    }

    /// Instant stamped into the date/time attributes, instead of now
    pub fn captured_at(mut self, instant: CapturedInstant) -> Self {
        self.captured_at = Some(instant);
        self
    }

    pub fn modality(mut self, modality: ModalitySpecialization) -> Self {
        self.modality = modality;
        self
    }

    /// Builds the dataset
    ///
    /// # Errors
    ///
    /// Returns an error if an attribute keyword does not resolve
    pub fn build(self) -> Result<Dataset> {
        let registry = self.registry.unwrap_or_else(TagRegistry::shared);
        let captured_at = self.captured_at.unwrap_or_else(CapturedInstant::now);

        let ds = baseline::build(self.filename, registry, self.uids, captured_at)?;
        match self.modality {
            ModalitySpecialization::Generic => Ok(ds),
            ModalitySpecialization::Mr => mr::specialize(ds),
        }
    }
}

/// Builds a modality-agnostic dataset bound to `filename`
pub fn build_baseline(filename: impl AsRef<Path>) -> Result<Dataset> {
    DatasetBuilder::new()
        .filename(filename.as_ref())
        .build()
}

/// Builds an MR image dataset bound to `filename`
pub fn build_mr(filename: impl AsRef<Path>) -> Result<Dataset> {
    DatasetBuilder::new()
        .filename(filename.as_ref())
        .modality(ModalitySpecialization::Mr)
        .build()
}

/// Key attributes of a dataset, for reports
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct DatasetSummary {
    pub filename: String,
    pub specialization: ModalitySpecialization,
    pub modality: Option<String>,
    pub sop_class_uid: Option<String>,
    pub transfer_syntax_uid: String,
    pub study_instance_uid: Option<String>,
    pub series_instance_uid: Option<String>,
    pub frame_of_reference_uid: Option<String>,
    pub sop_instance_uid: Option<String>,
    pub content_date: Option<String>,
    pub content_time: Option<String>,
    pub photometric_interpretation: Option<String>,
    pub presentation_lut_shape: Option<String>,
    pub bits_allocated: Option<u16>,
    pub attribute_count: usize,
}

impl DatasetSummary {
    pub fn from_dataset(ds: &Dataset) -> Self {
        let non_empty = |keyword: &str| ds.get_str(keyword).filter(|s| !s.is_empty());
        Self {
            filename: ds.filename().display().to_string(),
            specialization: ds.modality(),
            modality: non_empty("Modality"),
            sop_class_uid: non_empty("SOPClassUID"),
            transfer_syntax_uid: ds.file_meta().transfer_syntax_uid.clone(),
            study_instance_uid: non_empty("StudyInstanceUID"),
            series_instance_uid: non_empty("SeriesInstanceUID"),
            frame_of_reference_uid: non_empty("FrameOfReferenceUID"),
            sop_instance_uid: non_empty("SOPInstanceUID"),
            content_date: non_empty("ContentDate"),
            content_time: non_empty("ContentTime"),
            photometric_interpretation: non_empty("PhotometricInterpretation"),
            presentation_lut_shape: non_empty("PresentationLUTShape"),
            bits_allocated: ds.get_u16("BitsAllocated"),
            attribute_count: ds.dataset().iter().count(),
        }
    }
}
