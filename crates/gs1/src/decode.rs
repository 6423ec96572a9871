//! Wire string → record decoding.

use std::sync::LazyLock;

use regex::Regex;

use crate::{error::DecodeError, record::Gs1Data};

/// Anchored four-segment GS1 pattern: the segments must appear in exactly
/// this order with no surrounding characters. The 20-character upper bound
/// on batch and serial is deliberately not re-enforced here; any run of
/// alphanumerics is accepted on the scan side.
static GS1_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    #[expect(clippy::unwrap_used, reason = "the pattern is a compile-time constant")]
    let pattern =
        Regex::new(r"^\(01\)(\d{14})\(10\)([A-Za-z0-9]+)\(17\)(\d{6})\(21\)([A-Za-z0-9]+)$")
            .unwrap();

    pattern
});

/// Serial segment on its own, for quick lookups without a full decode.
static SERIAL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    #[expect(clippy::unwrap_used, reason = "the pattern is a compile-time constant")]
    let pattern = Regex::new(r"\(21\)([A-Za-z0-9]+)").unwrap();

    pattern
});

/// Outcome of a lenient decode: a record, or a human-readable reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    /// The decoded record, `None` when the input was rejected.
    pub data: Option<Gs1Data>,

    /// The rejection reason, `None` on success.
    pub error: Option<String>,
}

/// Convert a 6-digit `YYMMDD` expiry segment back to `YYYY-MM-DD`.
///
/// The century is fixed to the 2000s: items expiring in or after 2100 are
/// outside this wire format. No calendar validation is applied beyond the
/// digit check, matching the encoder's counterpart exactly.
///
/// # Errors
///
/// Returns [`DecodeError::InvalidExpiry`] when the segment is not six
/// decimal digits.
pub fn parse_expiry(yymmdd: &str) -> Result<String, DecodeError> {
    if yymmdd.len() != 6 || !yymmdd.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DecodeError::InvalidExpiry(yymmdd.to_string()));
    }

    let (yy, rest) = yymmdd.split_at(2);
    let (mm, dd) = rest.split_at(2);

    Ok(format!("20{yy}-{mm}-{dd}"))
}

fn strip_gtin(gtin: &str) -> String {
    let stripped = gtin.trim_start_matches('0');

    if stripped.is_empty() {
        // All-zero GTIN keeps a single digit rather than vanishing.
        "0".to_string()
    } else {
        stripped.to_string()
    }
}

/// Decode a wire string into a record.
///
/// Leading zeros are stripped from the GTIN, so a GTIN whose significant
/// form carried leading zeros does not round-trip — the padding added on
/// encode and any original zeros are indistinguishable.
///
/// # Errors
///
/// Returns [`DecodeError::Empty`] for empty input and
/// [`DecodeError::InvalidFormat`] when the input does not match the
/// anchored pattern.
pub fn decode(qr_data: &str) -> Result<Gs1Data, DecodeError> {
    if qr_data.is_empty() {
        return Err(DecodeError::Empty);
    }

    let captures = GS1_PATTERN
        .captures(qr_data)
        .ok_or(DecodeError::InvalidFormat)?;
    let (_, [gtin, batch, yymmdd, serial]) = captures.extract();

    Ok(Gs1Data {
        gtin: strip_gtin(gtin),
        batch: batch.to_string(),
        expiry: parse_expiry(yymmdd)?,
        serial: serial.to_string(),
    })
}

/// Whether a string is a well-formed wire string.
#[must_use]
pub fn is_valid_format(qr_data: &str) -> bool {
    GS1_PATTERN.is_match(qr_data)
}

/// Pull just the serial number out of a wire string, if present.
///
/// Used by the scan path to look a code up by serial without decoding the
/// remaining segments.
#[must_use]
pub fn extract_serial(qr_data: &str) -> Option<&str> {
    SERIAL_PATTERN
        .captures(qr_data)
        .and_then(|captures| captures.get(1))
        .map(|segment| segment.as_str())
}

/// Decode with the failure folded into the result, for callers that render
/// the error rather than branch on it.
#[must_use]
pub fn decode_safe(qr_data: &str) -> Decoded {
    match decode(qr_data) {
        Ok(data) => Decoded {
            data: Some(data),
            error: None,
        },
        Err(error) => Decoded {
            data: None,
            error: Some(error.to_string()),
        },
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    const WIRE: &str = "(01)12345678901234(10)BATCH001(17)251231(21)SN001";

    #[test]
    fn decode_splits_segments() -> TestResult {
        let data = decode(WIRE)?;

        assert_eq!(data.gtin, "12345678901234");
        assert_eq!(data.batch, "BATCH001");
        assert_eq!(data.expiry, "2025-12-31");
        assert_eq!(data.serial, "SN001");

        Ok(())
    }

    #[test]
    fn decode_strips_leading_zeros_from_gtin() -> TestResult {
        let data = decode("(01)00123456789012(10)BATCH001(17)251231(21)SN001")?;

        assert_eq!(data.gtin, "123456789012");

        Ok(())
    }

    #[test]
    fn decode_all_zero_gtin_becomes_single_zero() -> TestResult {
        let data = decode("(01)00000000000000(10)BATCH001(17)251231(21)SN001")?;

        assert_eq!(data.gtin, "0");

        Ok(())
    }

    #[test]
    fn decode_rejects_empty_input_distinctly() {
        assert_eq!(decode(""), Err(DecodeError::Empty));
    }

    #[test]
    fn decode_rejects_garbage() {
        assert_eq!(decode("not a gs1 string"), Err(DecodeError::InvalidFormat));
    }

    #[test]
    fn decode_rejects_trailing_characters() {
        let input = format!("{WIRE} ");

        assert_eq!(decode(&input), Err(DecodeError::InvalidFormat));
    }

    #[test]
    fn decode_rejects_reordered_segments() {
        assert_eq!(
            decode("(10)BATCH001(01)12345678901234(17)251231(21)SN001"),
            Err(DecodeError::InvalidFormat)
        );
    }

    #[test]
    fn decode_rejects_short_gtin_segment() {
        assert_eq!(
            decode("(01)1234567890123(10)BATCH001(17)251231(21)SN001"),
            Err(DecodeError::InvalidFormat)
        );
    }

    #[test]
    fn decode_accepts_overlong_batch_and_serial() -> TestResult {
        let batch = "B".repeat(25);
        let serial = "S".repeat(25);
        let data = decode(&format!(
            "(01)12345678901234(10){batch}(17)251231(21){serial}"
        ))?;

        assert_eq!(data.batch, batch);
        assert_eq!(data.serial, serial);

        Ok(())
    }

    #[test]
    fn parse_expiry_fixes_century_to_2000s() -> TestResult {
        assert_eq!(parse_expiry("251231")?, "2025-12-31");
        assert_eq!(parse_expiry("990101")?, "2099-01-01");

        Ok(())
    }

    #[test]
    fn parse_expiry_rejects_wrong_length() {
        assert_eq!(
            parse_expiry("25123"),
            Err(DecodeError::InvalidExpiry("25123".to_string()))
        );
    }

    #[test]
    fn is_valid_format_is_anchored() {
        assert!(is_valid_format(WIRE), "canonical wire string should pass");
        assert!(!is_valid_format(&format!("x{WIRE}")), "prefix should fail");
        assert!(!is_valid_format(""), "empty should fail");
    }

    #[test]
    fn extract_serial_finds_the_serial_segment() {
        assert_eq!(extract_serial(WIRE), Some("SN001"));
        assert_eq!(extract_serial("no serial here"), None);
    }

    #[test]
    fn decode_safe_folds_errors_into_messages() {
        let rejected = decode_safe("not a gs1 string");

        assert_eq!(rejected.data, None);
        assert_eq!(
            rejected.error.as_deref(),
            Some("invalid GS1 format, expected (01)GTIN(10)BATCH(17)EXPIRY(21)SERIAL")
        );

        let accepted = decode_safe(WIRE);

        assert!(accepted.data.is_some(), "expected a record");
        assert_eq!(accepted.error, None);
    }
}
