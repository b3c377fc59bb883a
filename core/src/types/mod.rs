//! Core type definitions for dataset construction
//!
//! - [`ModalitySpecialization`]: Which modality transform a dataset went through
//! - [`PhotometricInterpretation`] and [`PresentationLutShape`]: Pixel interpretation and its derived LUT shape
//! - [`CapturedInstant`]: The single instant stamped into all date/time attributes
//! - [`parse_text_value`]: Conversion of textual values to typed DICOM values

mod modality;
mod photometric;
mod timestamp;
mod value;

pub use modality::ModalitySpecialization;
pub use photometric::{PhotometricInterpretation, PresentationLutShape};
pub use timestamp::CapturedInstant;
pub use value::{conform_value, parse_text_value};
