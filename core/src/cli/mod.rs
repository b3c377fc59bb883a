pub mod report;

use crate::error::{Nii2DcmError, Result};
use crate::types::ModalitySpecialization;
use clap::{Parser, ValueEnum};
use regex::Regex;
use std::path::PathBuf;
use std::sync::OnceLock;

/// Command-line arguments for nii2dcm
#[derive(Parser, Debug)]
#[command(name = "nii2dcm")]
#[command(about = "Build a DICOM dataset skeleton and write it to disk")]
#[command(version)]
pub struct Cli {
    /// Output DICOM file
    #[arg(value_name = "OUTPUT", default_value = "nii2dcm_tempfile.dcm")]
    pub output: PathBuf,

    /// Modality specialization applied to the baseline dataset
    #[arg(short, long, default_value = "generic")]
    pub modality: ModalityArg,

    /// Attribute override as KEYWORD=VALUE (repeatable, `\` separates values)
    #[arg(short, long = "set", value_name = "KEYWORD=VALUE", value_parser = parse_assignment)]
    pub set: Vec<Assignment>,

    /// PhotometricInterpretation override
    #[arg(short, long)]
    pub photometric: Option<PhotometricArg>,

    /// Assign a fresh SOPInstanceUID with this InstanceNumber
    #[arg(short, long, value_name = "N")]
    pub instance_number: Option<u32>,

    /// Refuse to write a dataset with validation errors
    #[arg(long)]
    pub validate: bool,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Modality options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ModalityArg {
    /// Modality-agnostic baseline
    Generic,
    /// MR image storage
    Mr,
}

impl From<ModalityArg> for ModalitySpecialization {
    fn from(arg: ModalityArg) -> Self {
        match arg {
            ModalityArg::Generic => ModalitySpecialization::Generic,
            ModalityArg::Mr => ModalitySpecialization::Mr,
        }
    }
}

/// PhotometricInterpretation options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PhotometricArg {
    /// Minimum value displayed as white
    Monochrome1,
    /// Minimum value displayed as black
    Monochrome2,
}

impl PhotometricArg {
    pub fn as_str(&self) -> &'static str {
        match self {
            PhotometricArg::Monochrome1 => "MONOCHROME1",
            PhotometricArg::Monochrome2 => "MONOCHROME2",
        }
    }
}

/// Output format options
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text format
    Text,
    /// JSON format
    Json,
}

/// One `KEYWORD=VALUE` attribute override
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub keyword: String,
    pub value: String,
}

fn assignment_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^\s*([A-Za-z][A-Za-z0-9]*)\s*=(.*)$").expect("Failed to compile regex")
    })
}

/// Parses a `KEYWORD=VALUE` override
///
/// The value is kept verbatim and may be empty.
pub fn parse_assignment(s: &str) -> Result<Assignment> {
    let caps = assignment_regex()
        .captures(s)
        .ok_or_else(|| Nii2DcmError::InvalidValue(format!("expected KEYWORD=VALUE, got '{}'", s)))?;
    Ok(Assignment {
        keyword: caps[1].to_string(),
        value: caps[2].to_string(),
    })
}
