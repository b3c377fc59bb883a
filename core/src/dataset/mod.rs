//! In-memory DICOM dataset under construction
//!
//! A [`Dataset`] binds an output filename, a [`FileMetaHeader`], a zero
//! preamble and the attribute map. Attributes are addressed by keyword and
//! resolved through a shared [`TagRegistry`].
//!
//! - [`baseline`]: modality-agnostic defaults and the study/series tiers
//! - [`mr`]: MR image specialization
//! - [`validate`]: optional ready-to-serialize checks

pub mod baseline;
pub mod meta;
pub mod mr;
pub mod validate;

pub use meta::{FileMetaHeader, IMPLEMENTATION_VERSION_NAME};
pub use validate::{Severity, ValidationIssue};

use crate::dictionary::{TagDictionaryEntry, TagRegistry};
use crate::error::{Nii2DcmError, Result};
use crate::types::{
    conform_value, parse_text_value, CapturedInstant, ModalitySpecialization, PhotometricInterpretation,
    PresentationLutShape,
};
use crate::uid::UidGenerator;
use crate::writer;
use dicom_core::{DataElement, PrimitiveValue, Tag, VR};
use dicom_dictionary_std::tags;
use dicom_object::InMemDicomObject;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Output filename used when none is given
pub const DEFAULT_FILENAME: &str = "nii2dcm_tempfile.dcm";

/// Length of the file preamble
pub const PREAMBLE_LEN: usize = 128;

/// Attributes pinned by a modality specialization
const FIXED_TAGS: [Tag; 3] = [tags::MODALITY, tags::SOP_CLASS_UID, tags::BITS_ALLOCATED];

/// DICOM dataset with its file meta header, ready to be written
pub struct Dataset {
    filename: PathBuf,
    registry: Arc<TagRegistry>,
    uids: Arc<dyn UidGenerator>,
    file_meta: FileMetaHeader,
    preamble: [u8; PREAMBLE_LEN],
    obj: InMemDicomObject,
    modality: ModalitySpecialization,
    captured_at: CapturedInstant,
}

impl Dataset {
    /// Creates an empty dataset; see [`baseline::build`] for the populated form
    pub(crate) fn empty(
        filename: PathBuf,
        registry: Arc<TagRegistry>,
        uids: Arc<dyn UidGenerator>,
        captured_at: CapturedInstant,
    ) -> Self {
        Self {
            filename,
            registry,
            uids,
            file_meta: FileMetaHeader::default(),
            preamble: [0; PREAMBLE_LEN],
            obj: InMemDicomObject::new_empty(),
            modality: ModalitySpecialization::Generic,
            captured_at,
        }
    }

    /// Sets an attribute by keyword
    ///
    /// The VR comes from the tag registry. Setting PhotometricInterpretation
    /// re-derives PresentationLUTShape.
    ///
    /// # Errors
    ///
    /// - [`Nii2DcmError::UnknownKeyword`] if the keyword does not resolve
    /// - [`Nii2DcmError::FixedAttribute`] if the modality pins the attribute
    ///   to a different value
    /// - [`Nii2DcmError::InvalidValue`] if the value cannot be held by the
    ///   attribute's VR (text is converted for numeric VRs), or if
    ///   PresentationLUTShape is set to a value inconsistent with
    ///   PhotometricInterpretation
    pub fn set(&mut self, keyword: &str, value: impl Into<PrimitiveValue>) -> Result<()> {
        let entry = self.registry.resolve(keyword)?;
        self.set_resolved(&entry, value.into())
    }

    /// Sets an attribute from its textual form, converted according to its VR
    ///
    /// Multiple values are separated with `\`.
    pub fn set_text(&mut self, keyword: &str, text: &str) -> Result<()> {
        let entry = self.registry.resolve(keyword)?;
        let value = parse_text_value(entry.vr, text)?;
        self.set_resolved(&entry, value)
    }

    /// Sets a multi-valued string attribute
    pub fn set_strs(&mut self, keyword: &str, values: &[&str]) -> Result<()> {
        let value = PrimitiveValue::Strs(values.iter().map(|v| v.to_string()).collect());
        self.set(keyword, value)
    }

    /// Sets an attribute to an empty placeholder value
    pub fn set_empty(&mut self, keyword: &str) -> Result<()> {
        self.set(keyword, PrimitiveValue::Empty)
    }

    /// Removes an attribute, returning whether it was present
    ///
    /// PresentationLUTShape can only be removed by changing
    /// PhotometricInterpretation to a value that implies no shape.
    pub fn remove(&mut self, keyword: &str) -> Result<bool> {
        let entry = self.registry.resolve(keyword)?;
        if self.modality.has_fixed_attributes() && FIXED_TAGS.contains(&entry.tag) {
            return Err(Nii2DcmError::FixedAttribute {
                keyword: entry.keyword,
                value: self.str_by_tag(entry.tag).unwrap_or_default(),
            });
        }
        if entry.tag == tags::PRESENTATION_LUT_SHAPE {
            if let Some(shape) = self.expected_presentation_lut_shape() {
                return Err(Nii2DcmError::InvalidValue(format!(
                    "PresentationLUTShape is required to be '{}' by PhotometricInterpretation",
                    shape
                )));
            }
        }
        let removed = self.obj.remove_element(entry.tag);
        if entry.tag == tags::PHOTOMETRIC_INTERPRETATION {
            self.refresh_presentation_lut_shape();
        }
        Ok(removed)
    }

    /// Whether the attribute is present (possibly empty)
    pub fn contains(&self, keyword: &str) -> bool {
        self.registry
            .by_keyword(keyword)
            .map(|e| self.obj.element(e.tag).is_ok())
            .unwrap_or(false)
    }

    /// String value of an attribute, trimmed of padding
    ///
    /// Returns `None` if the attribute is unknown, absent or not textual
    pub fn get_str(&self, keyword: &str) -> Option<String> {
        self.registry
            .by_keyword(keyword)
            .and_then(|e| self.str_by_tag(e.tag))
    }

    /// All values of a multi-valued attribute
    pub fn get_strs(&self, keyword: &str) -> Option<Vec<String>> {
        let entry = self.registry.by_keyword(keyword)?;
        self.obj
            .element(entry.tag)
            .ok()
            .and_then(|elem| elem.to_multi_str().ok())
            .map(|strs| strs.iter().map(|s| trim_value(s)).collect())
    }

    /// Unsigned 16-bit value of an attribute
    ///
    /// Returns `None` for empty placeholders
    pub fn get_u16(&self, keyword: &str) -> Option<u16> {
        let entry = self.registry.by_keyword(keyword)?;
        self.obj
            .element(entry.tag)
            .ok()
            .and_then(|elem| elem.to_int::<u16>().ok())
    }

    /// Signed 32-bit value of an attribute
    pub fn get_i32(&self, keyword: &str) -> Option<i32> {
        let entry = self.registry.by_keyword(keyword)?;
        self.obj
            .element(entry.tag)
            .ok()
            .and_then(|elem| elem.to_int::<i32>().ok())
    }

    /// Re-derives PresentationLUTShape from PhotometricInterpretation
    ///
    /// MONOCHROME2 gives IDENTITY, MONOCHROME1 gives INVERSE; any other
    /// value (or none) removes PresentationLUTShape.
    pub fn refresh_presentation_lut_shape(&mut self) -> Option<PresentationLutShape> {
        let shape = self.expected_presentation_lut_shape();
        match shape {
            Some(shape) => {
                self.obj.put(DataElement::new(
                    tags::PRESENTATION_LUT_SHAPE,
                    VR::CS,
                    PrimitiveValue::from(shape.as_str()),
                ));
            }
            None => {
                self.obj.remove_element(tags::PRESENTATION_LUT_SHAPE);
            }
        }
        shape
    }

    /// PresentationLUTShape implied by the current PhotometricInterpretation
    pub fn expected_presentation_lut_shape(&self) -> Option<PresentationLutShape> {
        let pi = self
            .str_by_tag(tags::PHOTOMETRIC_INTERPRETATION)
            .map(|s| PhotometricInterpretation::from_str(&s))
            .unwrap_or(PhotometricInterpretation::Unknown);
        PresentationLutShape::for_photometric(&pi)
    }

    /// Assigns a fresh SOPInstanceUID and the given InstanceNumber
    ///
    /// Call once per output instance before writing it.
    ///
    /// # Returns
    ///
    /// The new SOP instance UID
    pub fn assign_instance(&mut self, instance_number: u32) -> Result<String> {
        let uid = self.uids.generate();
        self.set("SOPInstanceUID", uid.as_str())?;
        self.set_text("InstanceNumber", &instance_number.to_string())?;
        Ok(uid)
    }

    /// Writes the dataset to its filename, relative to the working directory
    ///
    /// # Returns
    ///
    /// The absolute path of the written file
    pub fn save_as(&self) -> Result<PathBuf> {
        writer::save_as(self)
    }

    /// Writes the dataset to an explicit path
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<()> {
        writer::write_dataset(self, path)
    }

    /// The attribute map
    pub fn dataset(&self) -> &InMemDicomObject {
        &self.obj
    }

    pub fn file_meta(&self) -> &FileMetaHeader {
        &self.file_meta
    }

    pub fn file_meta_mut(&mut self) -> &mut FileMetaHeader {
        &mut self.file_meta
    }

    pub fn filename(&self) -> &Path {
        &self.filename
    }

    pub fn set_filename(&mut self, filename: impl Into<PathBuf>) {
        self.filename = filename.into();
    }

    /// File preamble, always zero-filled
    pub fn preamble(&self) -> &[u8; PREAMBLE_LEN] {
        &self.preamble
    }

    pub fn modality(&self) -> ModalitySpecialization {
        self.modality
    }

    pub fn registry(&self) -> &Arc<TagRegistry> {
        &self.registry
    }

    /// The instant stamped into every date/time attribute at construction
    pub fn captured_at(&self) -> CapturedInstant {
        self.captured_at
    }

    pub(crate) fn uid_generator(&self) -> &dyn UidGenerator {
        self.uids.as_ref()
    }

    pub(crate) fn set_modality(&mut self, modality: ModalitySpecialization) {
        self.modality = modality;
    }

    pub(crate) fn str_by_tag(&self, tag: Tag) -> Option<String> {
        self.obj
            .element(tag)
            .ok()
            .and_then(|elem| elem.to_str().ok())
            .map(|s| trim_value(&s))
    }

    fn set_resolved(&mut self, entry: &TagDictionaryEntry, value: PrimitiveValue) -> Result<()> {
        if self.modality.has_fixed_attributes() && FIXED_TAGS.contains(&entry.tag) {
            let current = self.str_by_tag(entry.tag).unwrap_or_default();
            if trim_value(&value.to_str()) == current {
                return Ok(());
            }
            return Err(Nii2DcmError::FixedAttribute {
                keyword: entry.keyword.clone(),
                value: current,
            });
        }

        let value = conform_value(entry.vr, value)?;

        if entry.tag == tags::PRESENTATION_LUT_SHAPE {
            let expected = self.expected_presentation_lut_shape();
            let requested = trim_value(&value.to_str());
            if expected.map(|s| s.as_str()) != Some(requested.as_str()) {
                return Err(Nii2DcmError::InvalidValue(format!(
                    "PresentationLUTShape '{}' is inconsistent with PhotometricInterpretation",
                    requested
                )));
            }
        }

        self.obj.put(DataElement::new(entry.tag, entry.vr, value));

        if entry.tag == tags::PHOTOMETRIC_INTERPRETATION {
            self.refresh_presentation_lut_shape();
        }
        Ok(())
    }
}

impl fmt::Debug for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dataset")
            .field("filename", &self.filename)
            .field("modality", &self.modality)
            .field("file_meta", &self.file_meta)
            .field("captured_at", &self.captured_at)
            .field("obj", &self.obj)
            .finish_non_exhaustive()
    }
}

fn trim_value(s: &str) -> String {
    s.trim_end_matches('\0').trim().to_string()
}
