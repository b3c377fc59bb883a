use super::entry::TagDictionaryEntry;
use super::private::private_tag_entries;
use crate::error::{Nii2DcmError, Result};
use dicom_core::dictionary::{DataDictionary, DataDictionaryEntry};
use dicom_core::Tag;
use dicom_dictionary_std::StandardDataDictionary;
use log::{debug, warn};
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, OnceLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Debug, Default)]
struct Tables {
    by_tag: HashMap<Tag, TagDictionaryEntry>,
    by_keyword: HashMap<String, Tag>,
}

/// Registry of attribute definitions used to resolve dataset keywords
///
/// Lookups consult the registered extension entries first and fall back to
/// the standard DICOM data dictionary. Registration is last-write-wins for
/// both the tag map and the keyword map, and is guarded by a lock so the
/// registry can be shared between threads behind an [`Arc`].
///
/// # Example
///
/// ```
/// use nii2dcm_core::TagRegistry;
/// use dicom_core::{Tag, VR};
///
/// let registry = TagRegistry::with_private_tags().unwrap();
///
/// let entry = registry.by_keyword("MRImageType").unwrap();
/// assert_eq!(entry.tag, Tag(0x2005, 0x1011));
///
/// // standard keywords resolve through the built-in dictionary
/// let entry = registry.by_keyword("PatientName").unwrap();
/// assert_eq!(entry.vr, VR::PN);
/// ```
#[derive(Debug, Default)]
pub struct TagRegistry {
    tables: RwLock<Tables>,
}

impl TagRegistry {
    /// Creates a registry with no extension entries
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry with the private tag table already registered
    pub fn with_private_tags() -> Result<Self> {
        let registry = Self::new();
        registry.register_private_tags()?;
        Ok(registry)
    }

    /// Process-wide registry with the private tags registered once
    pub fn shared() -> Arc<TagRegistry> {
        static SHARED: OnceLock<Arc<TagRegistry>> = OnceLock::new();
        SHARED
            .get_or_init(|| {
                let registry = TagRegistry::new();
                if let Err(e) = registry.register_private_tags() {
                    warn!("Private tag registration failed: {}", e);
                }
                Arc::new(registry)
            })
            .clone()
    }

    /// Registers a single entry, replacing any previous definition
    pub fn register(&self, entry: TagDictionaryEntry) {
        let mut tables = self.write();
        tables.by_keyword.insert(entry.keyword.clone(), entry.tag);
        tables.by_tag.insert(entry.tag, entry);
    }

    /// Registers every entry from an iterator
    pub fn register_all<I>(&self, entries: I)
    where
        I: IntoIterator<Item = TagDictionaryEntry>,
    {
        let mut tables = self.write();
        for entry in entries {
            tables.by_keyword.insert(entry.keyword.clone(), entry.tag);
            tables.by_tag.insert(entry.tag, entry);
        }
    }

    /// Registers the vendor private tag table
    ///
    /// Repeating the call leaves the registry unchanged.
    ///
    /// # Returns
    ///
    /// The number of entries in the private tag table
    pub fn register_private_tags(&self) -> Result<usize> {
        let entries = private_tag_entries()?;
        let count = entries.len();
        self.register_all(entries);
        debug!("Registered {} private tag definitions", count);
        Ok(count)
    }

    /// Looks up an attribute by keyword
    pub fn by_keyword(&self, keyword: &str) -> Option<TagDictionaryEntry> {
        {
            let tables = self.read();
            if let Some(entry) = tables
                .by_keyword
                .get(keyword)
                .and_then(|tag| tables.by_tag.get(tag))
            {
                return Some(entry.clone());
            }
        }
        StandardDataDictionary
            .by_name(keyword)
            .map(|e| from_standard(e))
    }

    /// Looks up an attribute by tag
    pub fn by_tag(&self, tag: Tag) -> Option<TagDictionaryEntry> {
        if let Some(entry) = self.read().by_tag.get(&tag) {
            return Some(entry.clone());
        }
        StandardDataDictionary.by_tag(tag).map(|e| from_standard(e))
    }

    /// Looks up an attribute by keyword, failing if it is unknown
    ///
    /// # Errors
    ///
    /// Returns [`Nii2DcmError::UnknownKeyword`] if neither the extension
    /// entries nor the standard dictionary define `keyword`
    pub fn resolve(&self, keyword: &str) -> Result<TagDictionaryEntry> {
        self.by_keyword(keyword)
            .ok_or_else(|| Nii2DcmError::UnknownKeyword(keyword.to_string()))
    }

    /// Number of registered extension entries
    pub fn extension_len(&self) -> usize {
        self.read().by_tag.len()
    }

    /// Registered extension entries, ordered by tag
    pub fn extension_entries(&self) -> Vec<TagDictionaryEntry> {
        let mut entries: Vec<TagDictionaryEntry> = self.read().by_tag.values().cloned().collect();
        entries.sort_by_key(|e| e.tag);
        entries
    }

    /// Snapshot of the keyword to tag map of the extension entries
    pub fn keyword_map(&self) -> BTreeMap<String, Tag> {
        self.read()
            .by_keyword
            .iter()
            .map(|(k, t)| (k.clone(), *t))
            .collect()
    }

    fn read(&self) -> RwLockReadGuard<'_, Tables> {
        self.tables.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Tables> {
        self.tables.write().unwrap_or_else(PoisonError::into_inner)
    }
}

fn from_standard<E: DataDictionaryEntry>(entry: &E) -> TagDictionaryEntry {
    // the standard dictionary carries no multiplicity or description
    TagDictionaryEntry::new(
        entry.tag(),
        entry.vr().relaxed(),
        "1",
        entry.alias(),
        false,
        entry.alias(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::private::PRIVATE_TAGS;
    use dicom_core::VR;
    use std::thread;

    #[test]
    fn test_new_registry_has_no_extensions() {
        let registry = TagRegistry::new();
        assert_eq!(registry.extension_len(), 0);
        assert!(registry.by_keyword("MRImageType").is_none());
    }

    #[test]
    fn test_standard_fallback() {
        let registry = TagRegistry::new();
        let entry = registry.by_keyword("StudyInstanceUID").unwrap();
        assert_eq!(entry.tag, Tag(0x0020, 0x000D));
        assert_eq!(entry.vr, VR::UI);

        let entry = registry.by_tag(Tag(0x0008, 0x0060)).unwrap();
        assert_eq!(entry.keyword, "Modality");
    }

    #[test]
    fn test_register_private_tags() {
        let registry = TagRegistry::with_private_tags().unwrap();
        assert_eq!(registry.extension_len(), PRIVATE_TAGS.len());

        let entry = registry.by_keyword("NumberOfStacks").unwrap();
        assert_eq!(entry.tag, Tag(0x2001, 0x1060));
        assert_eq!(entry.vr, VR::SL);

        let entry = registry.by_tag(Tag(0x2005, 0x143e)).unwrap();
        assert_eq!(entry.keyword, "MRStackPosteriorCoilPos");
    }

    #[test]
    fn test_register_private_tags_is_idempotent() {
        let registry = TagRegistry::new();
        registry.register_private_tags().unwrap();
        let entries_once = registry.extension_entries();
        let keywords_once = registry.keyword_map();

        registry.register_private_tags().unwrap();
        assert_eq!(registry.extension_entries(), entries_once);
        assert_eq!(registry.keyword_map(), keywords_once);
    }

    #[test]
    fn test_extension_overrides_standard() {
        let registry = TagRegistry::with_private_tags().unwrap();
        let entry = registry.by_keyword("PhaseContrast").unwrap();
        assert_eq!(entry.description, "Phase Contrast");
    }

    #[test]
    fn test_last_write_wins() {
        let registry = TagRegistry::new();
        let tag = Tag(0x0009, 0x1001);
        registry.register(TagDictionaryEntry::new(tag, VR::LO, "1", "First", false, "First"));
        registry.register(TagDictionaryEntry::new(tag, VR::SH, "1", "Second", false, "Second"));

        assert_eq!(registry.extension_len(), 1);
        assert_eq!(registry.by_tag(tag).unwrap().vr, VR::SH);

        // keyword collision: the reverse map follows the latest registration
        let other = Tag(0x0009, 0x1002);
        registry.register(TagDictionaryEntry::new(other, VR::LO, "1", "Dup", false, "Second"));
        assert_eq!(registry.by_keyword("Second").unwrap().tag, other);
    }

    #[test]
    fn test_resolve_unknown_keyword() {
        let registry = TagRegistry::new();
        let err = registry.resolve("NotAKeyword").unwrap_err();
        assert!(matches!(err, Nii2DcmError::UnknownKeyword(k) if k == "NotAKeyword"));
    }

    #[test]
    fn test_concurrent_registration() {
        let registry = Arc::new(TagRegistry::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let registry = Arc::clone(&registry);
                thread::spawn(move || registry.register_private_tags().unwrap())
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(registry.extension_len(), PRIVATE_TAGS.len());
        assert_eq!(registry.keyword_map().len(), PRIVATE_TAGS.len());
    }

    #[test]
    fn test_shared_registry_has_private_tags() {
        let shared = TagRegistry::shared();
        assert!(shared.by_keyword("PCVelocity").is_some());
        assert!(Arc::ptr_eq(&shared, &TagRegistry::shared()));
    }
}
