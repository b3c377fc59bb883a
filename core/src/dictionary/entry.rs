use crate::error::{Nii2DcmError, Result};
use dicom_core::{Tag, VR};
use std::fmt;

/// Interchange form of a tag definition:
/// (VR code, VM, description, retired flag, keyword)
pub type TagDefinition = (
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
);

/// One attribute definition in the tag registry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagDictionaryEntry {
    pub tag: Tag,
    pub vr: VR,
    /// Value multiplicity, e.g. "1", "3", "1-n"
    pub vm: String,
    pub description: String,
    pub retired: bool,
    pub keyword: String,
}

impl TagDictionaryEntry {
    /// Creates a new entry
    pub fn new(
        tag: Tag,
        vr: VR,
        vm: impl Into<String>,
        description: impl Into<String>,
        retired: bool,
        keyword: impl Into<String>,
    ) -> Self {
        Self {
            tag,
            vr,
            vm: vm.into(),
            description: description.into(),
            retired,
            keyword: keyword.into(),
        }
    }

    /// Builds an entry from a 32-bit tag code and its 5-tuple definition
    ///
    /// The upper 16 bits of `code` are the group, the lower 16 bits the
    /// element. A non-empty retired flag marks the entry as retired.
    ///
    /// # Errors
    ///
    /// Returns an error if the VR code is not a known two-letter VR
    pub fn from_definition(code: u32, def: TagDefinition) -> Result<Self> {
        let (vr_code, vm, description, retired, keyword) = def;
        let vr = parse_vr(vr_code).ok_or_else(|| {
            Nii2DcmError::Dictionary(format!(
                "invalid VR '{}' for tag {:08X} ({})",
                vr_code, code, keyword
            ))
        })?;

        Ok(Self::new(
            tag_from_code(code),
            vr,
            vm,
            description,
            !retired.trim().is_empty(),
            keyword,
        ))
    }
}

impl fmt::Display for TagDictionaryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({:04X},{:04X}) {} VM={} {}",
            self.tag.group(),
            self.tag.element(),
            self.vr,
            self.vm,
            self.keyword
        )
    }
}

/// Splits a combined group/element code into a tag
pub fn tag_from_code(code: u32) -> Tag {
    Tag((code >> 16) as u16, (code & 0xFFFF) as u16)
}

fn parse_vr(code: &str) -> Option<VR> {
    match code.as_bytes() {
        [a, b] => VR::from_binary([*a, *b]),
        _ => None,
    }
}
