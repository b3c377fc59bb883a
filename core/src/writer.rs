use crate::dataset::Dataset;
use crate::error::Result;
use dicom_dictionary_std::tags;
use dicom_object::{open_file, DefaultDicomObject};
use log::{debug, info};
use std::path::{Path, PathBuf};

/// Writes a dataset as a DICOM file
///
/// The file holds the 128-byte zero preamble, the `DICM` magic code, the
/// file meta group built from the dataset's [`FileMetaHeader`] and the
/// attributes encoded with its transfer syntax. MediaStorageSOPInstanceUID
/// is taken from SOPInstanceUID.
///
/// Encoder failures are returned as they are, nothing is retried.
///
/// [`FileMetaHeader`]: crate::dataset::FileMetaHeader
pub fn write_dataset(ds: &Dataset, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let sop_instance_uid = ds.str_by_tag(tags::SOP_INSTANCE_UID).unwrap_or_default();
    let meta = ds.file_meta().to_builder(&sop_instance_uid);

    let file_obj = ds.dataset().clone().with_meta(meta)?;
    file_obj.write_to_file(path)?;

    debug!(
        "Wrote {} attributes to {}",
        ds.dataset().iter().count(),
        path.display()
    );
    Ok(())
}

/// Writes a dataset to its own filename
///
/// Relative filenames are resolved against the current working directory.
///
/// # Returns
///
/// The absolute path of the written file
pub fn save_as(ds: &Dataset) -> Result<PathBuf> {
    let target = if ds.filename().is_absolute() {
        ds.filename().to_path_buf()
    } else {
        std::env::current_dir()?.join(ds.filename())
    };
    info!("Writing DICOM to {}", target.display());
    write_dataset(ds, &target)?;
    Ok(target)
}

/// Reads a written file back
pub fn read_file(path: impl AsRef<Path>) -> Result<DefaultDicomObject> {
    Ok(open_file(path.as_ref())?)
}
