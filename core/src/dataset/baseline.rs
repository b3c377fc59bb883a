//! Modality-agnostic baseline dataset
//!
//! Populates patient, study, general image and per-instance attributes with
//! fixed defaults or empty placeholders, stamps every date/time pair from one
//! captured instant and generates the study and series tier UIDs.

use super::Dataset;
use crate::dictionary::TagRegistry;
use crate::error::Result;
use crate::types::CapturedInstant;
use crate::uid::UidGenerator;
use log::debug;
use std::path::PathBuf;
use std::sync::Arc;

/// Protocol name given to every generated dataset
pub const PROTOCOL_NAME: &str = "nii2dcm_DICOM";

/// Attributes with a fixed default value
const FIXED_DEFAULTS: &[(&str, &str)] = &[
    ("SpecificCharacterSet", "ISO_IR 100"),
    ("ProtocolName", PROTOCOL_NAME),
    ("PatientName", "Test^Firstname"),
    ("PatientID", "12345678"),
    ("AccessionNumber", "ABCXYZ"),
    ("InstitutionName", "INSTITUTION_NAME_NONE"),
];

/// Object tier attributes left for the caller to fill in
const OBJECT_PLACEHOLDERS: &[&str] = &[
    "PatientBirthDate",
    "PatientSex",
    "PatientAge",
    "PatientWeight",
    "BodyPartExamined",
    "Manufacturer",
    "ManufacturerModelName",
    "StudyDescription",
    "InstanceCreatorUID",
    "SoftwareVersions",
    // set by a modality specialization
    "SOPClassUID",
    "Modality",
];

/// Image attributes left for the caller to fill in
const IMAGE_PLACEHOLDERS: &[&str] = &[
    "Rows",
    "Columns",
    "PixelSpacing",
    "PixelRepresentation",
    "PatientPosition",
    "LossyImageCompression",
    "RescaleIntercept",
    "RescaleSlope",
    "WindowCenter",
    "WindowWidth",
];

/// Per-instance attributes, expected to change for every output instance
const INSTANCE_PLACEHOLDERS: &[&str] = &[
    "SOPInstanceUID",
    "InstanceNumber",
    "SliceThickness",
    "SpacingBetweenSlices",
    "SliceLocation",
];

/// Date/time attribute pairs stamped with the captured instant
pub const DATE_TIME_PAIRS: [(&str, &str); 5] = [
    ("ContentDate", "ContentTime"),
    ("StudyDate", "StudyTime"),
    ("SeriesDate", "SeriesTime"),
    ("AcquisitionDate", "AcquisitionTime"),
    ("InstanceCreationDate", "InstanceCreationTime"),
];

/// Default patient orientation (row and column direction cosines)
pub const DEFAULT_IMAGE_ORIENTATION: [&str; 6] = ["1", "0", "0", "0", "1", "0"];

/// Default patient position of the first voxel
pub const DEFAULT_IMAGE_POSITION: [&str; 3] = ["0", "0", "0"];

/// Builds the baseline dataset
///
/// Registers the private tag table with `registry` (a no-op if already
/// registered), then populates the object, study and series tiers.
/// Modality and SOPClassUID are left empty.
///
/// # Errors
///
/// Returns an error if a keyword cannot be resolved by the registry
pub fn build(
    filename: impl Into<PathBuf>,
    registry: Arc<TagRegistry>,
    uids: Arc<dyn UidGenerator>,
    captured_at: CapturedInstant,
) -> Result<Dataset> {
    registry.register_private_tags()?;

    let mut ds = Dataset::empty(filename.into(), registry, uids, captured_at);

    ds.set_strs("ImageType", &["DERIVED", "SECONDARY"])?;
    for (keyword, value) in FIXED_DEFAULTS {
        ds.set(keyword, *value)?;
    }
    for keyword in OBJECT_PLACEHOLDERS {
        ds.set_empty(keyword)?;
    }

    stamp_date_times(&mut ds, captured_at)?;

    for keyword in IMAGE_PLACEHOLDERS {
        ds.set_empty(keyword)?;
    }
    ds.set_strs("ImageOrientationPatient", &DEFAULT_IMAGE_ORIENTATION)?;

    for keyword in INSTANCE_PLACEHOLDERS {
        ds.set_empty(keyword)?;
    }
    ds.set_strs("ImagePositionPatient", &DEFAULT_IMAGE_POSITION)?;

    ds.init_study_tags()?;
    ds.init_series_tags()?;

    debug!(
        "Built baseline dataset for {} at {}",
        ds.filename().display(),
        captured_at
    );
    Ok(ds)
}

/// Writes one instant into every date/time pair
pub fn stamp_date_times(ds: &mut Dataset, instant: CapturedInstant) -> Result<()> {
    let date = instant.date_string();
    let time = instant.time_string();
    for (date_keyword, time_keyword) in DATE_TIME_PAIRS {
        ds.set(date_keyword, date.as_str())?;
        ds.set(time_keyword, time.as_str())?;
    }
    Ok(())
}

impl Dataset {
    /// Generates the study tier identifier
    ///
    /// StudyInstanceUID is shared by all series and instances of a study.
    pub fn init_study_tags(&mut self) -> Result<()> {
        let study_uid = self.uid_generator().generate();
        self.set("StudyInstanceUID", study_uid.as_str())
    }

    /// Generates the series tier identifiers
    ///
    /// SeriesInstanceUID and FrameOfReferenceUID are fresh; SeriesNumber and
    /// AcquisitionNumber become empty placeholders.
    pub fn init_series_tags(&mut self) -> Result<()> {
        let series_uid = self.uid_generator().generate();
        let frame_of_reference_uid = self.uid_generator().generate();
        self.set("SeriesInstanceUID", series_uid.as_str())?;
        self.set("FrameOfReferenceUID", frame_of_reference_uid.as_str())?;
        self.set_empty("SeriesNumber")?;
        self.set_empty("AcquisitionNumber")
    }
}
