//! MR image specialization
//!
//! Extends a baseline dataset with the MR Image module attributes and pins
//! Modality, SOPClassUID and BitsAllocated.

use super::Dataset;
use crate::error::Result;
use crate::types::ModalitySpecialization;
use log::debug;

/// Bits allocated per pixel sample in MR images
pub const MR_BITS_ALLOCATED: u16 = 16;

/// Default photometric interpretation for MR images
pub const DEFAULT_PHOTOMETRIC_INTERPRETATION: &str = "MONOCHROME2";

/// Scanning sequence default, "RM" = research mode
pub const DEFAULT_SCANNING_SEQUENCE: &str = "RM";

/// MR acquisition attributes awaiting caller-supplied values
const MR_ACQUISITION_PLACEHOLDERS: &[&str] = &[
    "SequenceVariant",
    "ScanOptions",
    "MRAcquisitionType",
    "RepetitionTime",
    "EchoTime",
    "EchoTrainLength",
    "InversionTime",
    "TriggerTime",
    "SequenceName",
    "AngioFlag",
    "NumberOfAverages",
    "ImagingFrequency",
    "ImagedNucleus",
    "EchoNumbers",
    "MagneticFieldStrength",
    "NumberOfPhaseEncodingSteps",
    "PercentSampling",
    "PercentPhaseFieldOfView",
    "PixelBandwidth",
    "NominalInterval",
    "BeatRejectionFlag",
    "LowRRValue",
    "HighRRValue",
    "IntervalsAcquired",
    "IntervalsRejected",
    "PVCRejection",
    "SkipBeats",
    "HeartRate",
    "CardiacNumberOfImages",
    "TriggerWindow",
    "ReconstructionDiameter",
    "ReceiveCoilName",
    "TransmitCoilName",
    "AcquisitionMatrix",
    "InPlanePhaseEncodingDirection",
    "FlipAngle",
    "SAR",
    "VariableFlipAngleFlag",
    "dBdt",
    "TemporalPositionIdentifier",
    "NumberOfTemporalPositions",
    "TemporalResolution",
    "IsocenterPosition",
    "B1rms",
];

/// Turns a baseline dataset into an MR image dataset
///
/// HighBit is expected to equal BitsStored - 1, but both stay empty here and
/// must be set consistently by the caller.
///
/// # Errors
///
/// Returns an error if a keyword cannot be resolved by the dataset registry
pub fn specialize(mut ds: Dataset) -> Result<Dataset> {
    let mr = ModalitySpecialization::Mr;

    ds.set("Modality", mr.modality_code())?;
    ds.set("SOPClassUID", mr.sop_class_uid())?;
    ds.file_meta_mut().media_storage_sop_class_uid = mr.sop_class_uid().to_string();

    ds.set_empty("SamplesPerPixel")?;
    // derives PresentationLUTShape
    ds.set("PhotometricInterpretation", DEFAULT_PHOTOMETRIC_INTERPRETATION)?;

    ds.set("BitsAllocated", MR_BITS_ALLOCATED)?;
    ds.set_empty("BitsStored")?;
    ds.set_empty("HighBit")?;

    ds.set("ScanningSequence", DEFAULT_SCANNING_SEQUENCE)?;
    for keyword in MR_ACQUISITION_PLACEHOLDERS {
        ds.set_empty(keyword)?;
    }

    ds.set_modality(mr);
    debug!("Specialized {} as MR image", ds.filename().display());
    Ok(ds)
}
