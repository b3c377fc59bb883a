//! Vendor private and phase-contrast tag definitions
//!
//! Philips MR acquisition tags (groups 2001 and 2005) together with the
//! phase-contrast / velocity-encoding attributes. Registering them makes the
//! keywords available to datasets; nothing here is written to a dataset by
//! default.

use super::entry::{TagDefinition, TagDictionaryEntry};
use crate::error::Result;

pub const PRIVATE_TAGS: &[(u32, TagDefinition)] = &[
    (0x2001_1002, ("IS", "1", "Chemical Shift Number MR", "", "ChemicalShiftNumberMR")),
    (0x2001_1008, ("IS", "1", "Phase Number", "", "PhaseNumber")),
    (0x2001_100a, ("IS", "1", "Slice Number MR", "", "SliceNumberMR")),
    (0x2001_100b, ("CS", "1", "Slice Orientation", "", "SliceOrientation")),
    (0x2001_1014, ("SL", "1", "Number Of Echoes", "", "NumberOfEchoes")),
    (0x2001_1015, ("SS", "1", "Number Of Locations", "", "NumberOfLocations")),
    (0x2001_1016, ("SS", "1", "Number Of PC Directions", "", "NumberOfPCDirections")),
    (0x2001_1017, ("SL", "1", "Number Of Phases MR", "", "NumberOfPhasesMR")),
    (0x2001_1018, ("SL", "1", "Number Of Slices MR", "", "NumberOfSlicesMR")),
    (0x2001_1020, ("LO", "1", "Scanning Technique", "", "ScanningTechnique")),
    (0x2001_1025, ("SH", "1", "Echo Time Display MR", "", "EchoTimeDisplayMR")),
    (0x2001_1060, ("SL", "1", "Number Of Stacks", "", "NumberOfStacks")),
    (0x2001_1063, ("CS", "1", "Examination Source", "", "ExaminationSource")),
    (0x2001_1081, ("IS", "1", "Number Of Dynamic Scans", "", "NumberOfDynamicScans")),
    (0x2001_101a, ("FL", "3", "PC Velocity", "", "PCVelocity")),
    (0x2001_101d, ("IS", "1", "Reconstruction Number MR", "", "ReconstructionNumberMR")),
    (0x2005_1035, ("CS", "1", "", "", "unknowntag20051035")),
    (0x2005_1011, ("CS", "1", "MR Image Type", "", "MRImageType")),
    (0x2005_106e, ("CS", "1", "MR Scan Sequence", "", "MRScanSequence")),
    // Philips stack
    (0x2001_105f, ("SQ", "1", "Stack", "", "Stack")),
    (0x2001_0010, ("LO", "1", "Private Creator", "", "PrivateCreator20010010")),
    (0x2001_102d, ("SS", "1", "StackNumberOfSlices", "", "StackNumberOfSlices")),
    (0x2001_1032, ("FL", "1", "StackRadialAngle", "", "StackRadialAngle")),
    (0x2001_1033, ("CS", "1", "StackRadialAxis", "", "StackRadialAxis")),
    (0x2001_1035, ("SS", "1", "MRSeriesDataType", "", "MRSeriesDataType")),
    (0x2001_1036, ("CS", "1", "StackType", "", "StackType")),
    (0x2005_0010, ("LO", "1", "Private Creator", "", "PrivateCreator20050010")),
    (0x2005_0011, ("LO", "1", "Private Creator", "", "PrivateCreator20050011")),
    (0x2005_0012, ("LO", "1", "Private Creator", "", "PrivateCreator20050012")),
    (0x2005_0013, ("LO", "1", "Private Creator", "", "PrivateCreator20050013")),
    (0x2005_0014, ("LO", "1", "Private Creator", "", "PrivateCreator20050014")),
    (0x2005_0015, ("LO", "1", "Private Creator", "", "PrivateCreator20050015")),
    (0x2005_1071, ("FL", "1", "MRStackAngulationAP", "", "MRStackAngulationAP")),
    (0x2005_1072, ("FL", "1", "MRStackAngulationFH", "", "MRStackAngulationFH")),
    (0x2005_1073, ("FL", "1", "MRStackAngulationRL", "", "MRStackAngulationRL")),
    (0x2005_1074, ("FL", "1", "MRStackFovAP", "", "MRStackFovAP")),
    (0x2005_1075, ("FL", "1", "MRStackFovFH", "", "MRStackFovFH")),
    (0x2005_1076, ("FL", "1", "MRStackFovRL", "", "MRStackFovRL")),
    (0x2005_1078, ("FL", "1", "MRStackOffcentreAP", "", "MRStackOffcentreAP")),
    (0x2005_1079, ("FL", "1", "MRStackOffcentreFH", "", "MRStackOffcentreFH")),
    (0x2005_107a, ("FL", "1", "MRStackOffcentreRL", "", "MRStackOffcentreRL")),
    (0x2005_107b, ("CS", "1", "MRStackPreparationDirection", "", "MRStackPreparationDirection")),
    (0x2005_107e, ("FL", "1", "MRStackSliceDistance", "", "MRStackSliceDistance")),
    (0x2005_1081, ("CS", "1", "MRStackViewAxis", "", "MRStackViewAxis")),
    (0x2005_143c, ("FL", "1", "MRStackTablePosLong", "", "MRStackTablePosLong")),
    (0x2005_143d, ("FL", "1", "MRStackTablePosLat", "", "MRStackTablePosLat")),
    (0x2005_143e, ("FL", "1", "MRStackPosteriorCoilPos", "", "MRStackPosteriorCoilPos")),
    (0x2005_1567, ("IS", "1", "MRPhilipsX1", "", "MRPhilipsX1")),
    // Phase contrast / velocity encoding
    (0x0008_9209, ("CS", "1", "Acquisition Contrast", "", "AcquisitionContrast")),
    (0x0018_9014, ("CS", "1", "Phase Contrast", "", "PhaseContrast")),
    (0x0018_9090, ("FD", "3", "Velocity Encoding Direction", "", "VelocityEncodingDirection")),
    (0x0018_9091, ("FD", "1", "Velocity Encoding Minimum Value", "", "VelocityEncodingMinimumValue")),
];

/// Converts the private tag table into dictionary entries
pub fn private_tag_entries() -> Result<Vec<TagDictionaryEntry>> {
    PRIVATE_TAGS
        .iter()
        .map(|(code, def)| TagDictionaryEntry::from_definition(*code, *def))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use dicom_core::{Tag, VR};
    use std::collections::HashSet;

    #[test]
    fn test_table_size() {
        assert_eq!(PRIVATE_TAGS.len(), 52);
    }

    #[test]
    fn test_all_entries_parse() {
        let entries = private_tag_entries().unwrap();
        assert_eq!(entries.len(), PRIVATE_TAGS.len());
    }

    #[test]
    fn test_codes_and_keywords_unique() {
        let codes: HashSet<u32> = PRIVATE_TAGS.iter().map(|(c, _)| *c).collect();
        let keywords: HashSet<&str> = PRIVATE_TAGS.iter().map(|(_, d)| d.4).collect();
        assert_eq!(codes.len(), PRIVATE_TAGS.len());
        assert_eq!(keywords.len(), PRIVATE_TAGS.len());
    }

    #[test]
    fn test_velocity_encoding_direction() {
        let entries = private_tag_entries().unwrap();
        let entry = entries
            .iter()
            .find(|e| e.keyword == "VelocityEncodingDirection")
            .unwrap();
        assert_eq!(entry.tag, Tag(0x0018, 0x9090));
        assert_eq!(entry.vr, VR::FD);
        assert_eq!(entry.vm, "3");
    }

    #[test]
    fn test_stack_is_sequence() {
        let entries = private_tag_entries().unwrap();
        let stack = entries.iter().find(|e| e.keyword == "Stack").unwrap();
        assert_eq!(stack.vr, VR::SQ);
    }
}
