use std::fmt;

/// Photometric interpretation enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhotometricInterpretation {
    Unknown,
    Monochrome1,
    Monochrome2,
    PaletteColor,
    Rgb,
    YbrFull,
    YbrFull422,
}

impl PhotometricInterpretation {
    /// Parses photometric interpretation from an attribute value
    ///
    /// Only space and NUL padding is stripped; the comparison is
    /// case-sensitive, as for any CS value.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Self {
        match s.trim_matches(|c| c == ' ' || c == '\0') {
            "MONOCHROME1" => PhotometricInterpretation::Monochrome1,
            "MONOCHROME2" => PhotometricInterpretation::Monochrome2,
            "PALETTE COLOR" => PhotometricInterpretation::PaletteColor,
            "RGB" => PhotometricInterpretation::Rgb,
            "YBR_FULL" => PhotometricInterpretation::YbrFull,
            "YBR_FULL_422" => PhotometricInterpretation::YbrFull422,
            _ => PhotometricInterpretation::Unknown,
        }
    }
}

/// Presentation LUT shape applied to monochrome images
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PresentationLutShape {
    Identity,
    Inverse,
}

impl PresentationLutShape {
    /// Derives the LUT shape from the photometric interpretation
    ///
    /// - MONOCHROME2 → IDENTITY
    /// - MONOCHROME1 → INVERSE
    /// - anything else → `None` (attribute stays unset)
    pub fn for_photometric(pi: &PhotometricInterpretation) -> Option<Self> {
        match pi {
            PhotometricInterpretation::Monochrome2 => Some(PresentationLutShape::Identity),
            PhotometricInterpretation::Monochrome1 => Some(PresentationLutShape::Inverse),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PresentationLutShape::Identity => "IDENTITY",
            PresentationLutShape::Inverse => "INVERSE",
        }
    }
}

impl fmt::Display for PresentationLutShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("MONOCHROME2", Some(PresentationLutShape::Identity))]
    #[case("MONOCHROME2 ", Some(PresentationLutShape::Identity))]
    #[case("MONOCHROME1\0", Some(PresentationLutShape::Inverse))]
    #[case("monochrome2", None)]
    #[case("monochrome1", None)]
    #[case("MONOCHROME1", Some(PresentationLutShape::Inverse))]
    #[case("RGB", None)]
    #[case("", None)]
    #[case("MONOCHROME3", None)]
    fn test_lut_shape_for_photometric(
        #[case] value: &str,
        #[case] expected: Option<PresentationLutShape>,
    ) {
        let pi = PhotometricInterpretation::from_str(value);
        assert_eq!(PresentationLutShape::for_photometric(&pi), expected);
    }

    #[rstest]
    #[case("PALETTE COLOR", PhotometricInterpretation::PaletteColor)]
    #[case("YBR_FULL_422", PhotometricInterpretation::YbrFull422)]
    #[case("Rgb", PhotometricInterpretation::Unknown)]
    fn test_photometric_from_str(#[case] value: &str, #[case] expected: PhotometricInterpretation) {
        assert_eq!(PhotometricInterpretation::from_str(value), expected);
    }
}
