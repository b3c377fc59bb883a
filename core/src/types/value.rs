use crate::error::{Nii2DcmError, Result};
use dicom_core::{PrimitiveValue, VR};
use regex::Regex;
use std::str::FromStr;
use std::sync::OnceLock;

/// Converts a textual attribute value into a primitive value for the given VR
///
/// Multiple values are separated by a backslash, as in the DICOM encoding.
/// An empty string yields an empty (zero-length) value.
///
/// # Errors
///
/// Returns an error if a component cannot be parsed for a numeric VR,
/// if a DS/IS component is not a valid number, or if the VR holds
/// binary or sequence data.
pub fn parse_text_value(vr: VR, text: &str) -> Result<PrimitiveValue> {
    if text.is_empty() {
        return Ok(PrimitiveValue::Empty);
    }

    let parts: Vec<&str> = text.split('\\').map(|p| p.trim()).collect();

    match vr {
        VR::US => Ok(PrimitiveValue::U16(parse_all::<u16>(vr, &parts)?.into())),
        VR::SS => Ok(PrimitiveValue::I16(parse_all::<i16>(vr, &parts)?.into())),
        VR::UL => Ok(PrimitiveValue::U32(parse_all::<u32>(vr, &parts)?.into())),
        VR::SL => Ok(PrimitiveValue::I32(parse_all::<i32>(vr, &parts)?.into())),
        VR::FL => Ok(PrimitiveValue::F32(parse_all::<f32>(vr, &parts)?.into())),
        VR::FD => Ok(PrimitiveValue::F64(parse_all::<f64>(vr, &parts)?.into())),
        VR::SQ | VR::OB | VR::OW | VR::OF | VR::OD | VR::OL | VR::UN => Err(
            Nii2DcmError::InvalidValue(format!("cannot set {} value from text", vr)),
        ),
        VR::DS => {
            check_pattern(decimal_string(), vr, &parts)?;
            Ok(strings(&parts))
        }
        VR::IS => {
            check_pattern(integer_string(), vr, &parts)?;
            Ok(strings(&parts))
        }
        _ => Ok(strings(&parts)),
    }
}

/// Brings a value in line with the VR it is stored under
///
/// Values already held in the VR's native form are kept. Text, or numbers
/// of another width, go through [`parse_text_value`] so that the encoded
/// bytes read back as the value that was set. DS and IS text is checked the
/// same way.
///
/// # Errors
///
/// Returns an error for any primitive value under SQ, and for values that
/// cannot be represented with `vr`.
pub fn conform_value(vr: VR, value: PrimitiveValue) -> Result<PrimitiveValue> {
    if vr == VR::SQ {
        return Err(Nii2DcmError::InvalidValue(
            "sequence attributes cannot hold a primitive value".to_string(),
        ));
    }

    let native = matches!(
        (vr, &value),
        (_, PrimitiveValue::Empty)
            | (VR::US, PrimitiveValue::U16(_))
            | (VR::SS, PrimitiveValue::I16(_))
            | (VR::UL, PrimitiveValue::U32(_))
            | (VR::SL, PrimitiveValue::I32(_))
            | (VR::FL, PrimitiveValue::F32(_))
            | (VR::FD, PrimitiveValue::F64(_))
    );
    if native {
        return Ok(value);
    }

    match vr {
        VR::US | VR::SS | VR::UL | VR::SL | VR::FL | VR::FD | VR::DS | VR::IS => {
            parse_text_value(vr, &value.to_multi_str().join("\\"))
        }
        VR::OB | VR::OW | VR::OF | VR::OD | VR::OL | VR::UN | VR::AT => Ok(value),
        _ => match value {
            PrimitiveValue::Str(_) | PrimitiveValue::Strs(_) => Ok(value),
            other => {
                let texts = other.to_multi_str();
                let parts: Vec<&str> = texts.iter().map(String::as_str).collect();
                Ok(strings(&parts))
            }
        },
    }
}

fn parse_all<T: FromStr>(vr: VR, parts: &[&str]) -> Result<Vec<T>> {
    parts
        .iter()
        .map(|p| {
            p.parse::<T>().map_err(|_| {
                Nii2DcmError::InvalidValue(format!("'{}' is not a valid {} value", p, vr))
            })
        })
        .collect()
}

fn check_pattern(re: &Regex, vr: VR, parts: &[&str]) -> Result<()> {
    match parts.iter().find(|p| !re.is_match(p)) {
        Some(bad) => Err(Nii2DcmError::InvalidValue(format!(
            "'{}' is not a valid {} value",
            bad, vr
        ))),
        None => Ok(()),
    }
}

fn strings(parts: &[&str]) -> PrimitiveValue {
    if parts.len() == 1 {
        PrimitiveValue::from(parts[0])
    } else {
        PrimitiveValue::Strs(parts.iter().map(|p| p.to_string()).collect())
    }
}

fn decimal_string() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(r"^[-+]?(\d+\.?\d*|\.\d+)([eE][-+]?\d+)?$").expect("Failed to compile regex")
    })
}

fn integer_string() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^[-+]?\d+$").expect("Failed to compile regex"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_empty_text_is_empty_value() {
        assert_eq!(parse_text_value(VR::US, "").unwrap(), PrimitiveValue::Empty);
        assert_eq!(parse_text_value(VR::LO, "").unwrap(), PrimitiveValue::Empty);
    }

    #[test]
    fn test_unsigned_short() {
        let value = parse_text_value(VR::US, "256").unwrap();
        assert_eq!(value, PrimitiveValue::from(256_u16));
    }

    #[test]
    fn test_multi_float() {
        let value = parse_text_value(VR::FD, "1.5\\0\\-2").unwrap();
        assert_eq!(value.multiplicity(), 3);
        assert_eq!(value.to_float64().unwrap(), 1.5);
    }

    #[test]
    fn test_decimal_string_multi_value() {
        let value = parse_text_value(VR::DS, "1\\0\\0\\0\\1\\0").unwrap();
        assert_eq!(value.multiplicity(), 6);
        assert_eq!(value.to_str(), "1\\0\\0\\0\\1\\0");
    }

    #[test]
    fn test_decimal_string_exponent() {
        assert!(parse_text_value(VR::DS, "1.5e-3").is_ok());
        assert!(parse_text_value(VR::DS, "abc").is_err());
    }

    #[test]
    fn test_integer_string() {
        assert!(parse_text_value(VR::IS, "12").is_ok());
        assert!(parse_text_value(VR::IS, "1.2").is_err());
    }

    #[test]
    fn test_invalid_unsigned() {
        let err = parse_text_value(VR::US, "-1").unwrap_err();
        assert!(matches!(err, Nii2DcmError::InvalidValue(_)));
    }

    #[test]
    fn test_conform_keeps_native_values() {
        let value = conform_value(VR::US, PrimitiveValue::from(16_u16)).unwrap();
        assert_eq!(value, PrimitiveValue::from(16_u16));
        let value = conform_value(VR::LO, PrimitiveValue::from("abc")).unwrap();
        assert_eq!(value, PrimitiveValue::from("abc"));
        assert_eq!(
            conform_value(VR::US, PrimitiveValue::Empty).unwrap(),
            PrimitiveValue::Empty
        );
    }

    #[test]
    fn test_conform_text_under_numeric_vr() {
        let value = conform_value(VR::US, PrimitiveValue::from("256")).unwrap();
        assert_eq!(value, PrimitiveValue::from(256_u16));
        assert!(conform_value(VR::US, PrimitiveValue::from("abc")).is_err());
        assert!(conform_value(VR::SL, PrimitiveValue::from("1.5")).is_err());
    }

    #[test]
    fn test_conform_number_under_text_vr() {
        let value = conform_value(VR::IS, PrimitiveValue::from(7_i32)).unwrap();
        assert_eq!(value.to_str(), "7");
        assert!(matches!(value, PrimitiveValue::Str(_)));
        let value = conform_value(VR::SH, PrimitiveValue::from(3_u16)).unwrap();
        assert_eq!(value, PrimitiveValue::from("3"));
    }

    #[test]
    fn test_conform_checks_decimal_strings() {
        assert!(conform_value(VR::DS, PrimitiveValue::from("0.5")).is_ok());
        assert!(conform_value(VR::DS, PrimitiveValue::from("wide")).is_err());
    }

    #[rstest]
    #[case(PrimitiveValue::from("x"))]
    #[case(PrimitiveValue::Empty)]
    #[case(PrimitiveValue::from(1_u16))]
    fn test_conform_rejects_sequence(#[case] value: PrimitiveValue) {
        assert!(matches!(
            conform_value(VR::SQ, value),
            Err(Nii2DcmError::InvalidValue(_))
        ));
    }

    #[test]
    fn test_sequence_rejected() {
        assert!(parse_text_value(VR::SQ, "x").is_err());
    }

    #[test]
    fn test_plain_string() {
        let value = parse_text_value(VR::CS, "MONOCHROME1").unwrap();
        assert_eq!(value.to_str(), "MONOCHROME1");
    }
}
