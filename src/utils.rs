use radix_timer::defaults::{MAX_BASE, MIN_BASE, SLOT_COUNT};
use radix_timer::InvalidBaseError;

/// Parse one base entry from the settings form.
pub fn parse_base(slot: usize, text: &str) -> Result<u32, InvalidBaseError> {
    let trimmed = text.trim();
    let base: u32 = trimmed.parse().map_err(|_| InvalidBaseError::Unparsable {
        slot,
        input: trimmed.to_string(),
    })?;
    if !(MIN_BASE..=MAX_BASE).contains(&base) {
        return Err(InvalidBaseError::OutOfRange { slot, base });
    }
    Ok(base)
}

/// Parse the whole settings form at once.
///
/// The first bad entry fails the batch, so the caller never applies a
/// partial set of bases.
pub fn parse_base_entries(
    texts: &[String; SLOT_COUNT],
) -> Result<[u32; SLOT_COUNT], InvalidBaseError> {
    let mut bases = [0u32; SLOT_COUNT];
    for (slot, text) in texts.iter().enumerate() {
        bases[slot] = parse_base(slot, text)?;
    }
    Ok(bases)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_every_supported_base() {
        for base in MIN_BASE..=MAX_BASE {
            assert_eq!(parse_base(0, &base.to_string()), Ok(base));
        }
    }

    #[test]
    fn tolerates_surrounding_whitespace() {
        assert_eq!(parse_base(0, " 16 "), Ok(16));
    }

    #[test]
    fn rejects_out_of_range_numbers() {
        for bad in ["0", "1", "17"] {
            let err = parse_base(2, bad).unwrap_err();
            assert!(matches!(err, InvalidBaseError::OutOfRange { slot: 2, .. }));
        }
    }

    #[test]
    fn rejects_non_numeric_text() {
        for bad in ["", "ten", "8.5", "-2"] {
            let err = parse_base(1, bad).unwrap_err();
            assert!(matches!(err, InvalidBaseError::Unparsable { slot: 1, .. }));
        }
    }

    #[test]
    fn a_single_bad_entry_fails_the_whole_batch() {
        let texts = ["10".to_string(), "x".to_string(), "2".to_string()];
        let err = parse_base_entries(&texts).unwrap_err();
        assert_eq!(
            err,
            InvalidBaseError::Unparsable {
                slot: 1,
                input: "x".to_string(),
            }
        );

        let texts = ["2".to_string(), "10".to_string(), "16".to_string()];
        assert_eq!(parse_base_entries(&texts), Ok([2, 10, 16]));
    }
}
