//! Amount lists.
//!
//! An amount list is free-form text where entries are separated by commas
//! and/or newlines in any mixture. Runs of separators count as one, and
//! whitespace around an entry is ignored.
//!
//! Totals are fail-closed: if a single entry is malformed the whole list is
//! worth zero, never a partial sum.

use crate::InputError;
use alloy_primitives::U256;

/// Split raw list text into its non-empty, trimmed entries.
pub fn split_entries(raw: &str) -> Vec<&str> {
    raw.split([',', '\n'])
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .collect()
}

/// Sum of the amounts in `raw`, as shown to the user.
///
/// Returns `0.0` for empty input, and for any input where at least one entry
/// is not a finite decimal number.
pub fn compute_total(raw: &str) -> f64 {
    let mut total = 0.0;
    for entry in split_entries(raw) {
        match parse_decimal(entry) {
            Some(value) => total += value,
            None => return 0.0,
        }
    }
    total
}

/// Exact sum of the amounts in `raw`, in token base units.
///
/// Same splitting and fail-closed rule as [`compute_total`], but entries must
/// be non-negative base-10 integers that fit a `uint256`, and the sum must not
/// overflow. This is the value approved and passed as the airdrop total.
pub fn compute_total_units(raw: &str) -> U256 {
    split_entries(raw)
        .into_iter()
        .try_fold(U256::ZERO, |total, entry| {
            parse_units(entry).and_then(|value| total.checked_add(value))
        })
        .unwrap_or(U256::ZERO)
}

/// Convert amount entries into base units, reporting the first bad entry.
pub fn parse_amounts<S: AsRef<str>>(entries: &[S]) -> Result<Vec<U256>, InputError> {
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let entry = entry.as_ref();
            parse_units(entry).ok_or_else(|| InputError::InvalidAmount {
                index,
                value: entry.to_string(),
            })
        })
        .collect()
}

fn parse_decimal(entry: &str) -> Option<f64> {
    entry
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

fn parse_units(entry: &str) -> Option<U256> {
    if entry.is_empty() || !entry.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    U256::from_str_radix(entry, 10).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comma_separated() {
        assert_eq!(compute_total("100,200,300"), 600.0);
    }

    #[test]
    fn test_newline_separated() {
        assert_eq!(compute_total("100\n200\n300"), 600.0);
    }

    #[test]
    fn test_mixed_separators() {
        assert_eq!(compute_total("100\n200,300"), 600.0);
    }

    #[test]
    fn test_surrounding_whitespace() {
        assert_eq!(compute_total(" 100 , 200 \n 300 "), 600.0);
    }

    #[test]
    fn test_any_invalid_entry_zeroes_total() {
        assert_eq!(compute_total("100,abc,300"), 0.0);
        assert_eq!(compute_total("abc,def"), 0.0);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(compute_total(""), 0.0);
        assert_eq!(compute_total(" ,\n, \n\n,,"), 0.0);
    }

    #[test]
    fn test_single_value() {
        assert_eq!(compute_total("42.5"), 42.5);
    }

    #[test]
    fn test_separator_runs_are_collapsed() {
        assert_eq!(compute_total("100,,,\n\n200\n,\n300"), 600.0);
        assert_eq!(split_entries("a,,\n\nb"), vec!["a", "b"]);
    }

    #[test]
    fn test_crlf_input() {
        assert_eq!(compute_total("100\r\n200\r\n300\r\n"), 600.0);
    }

    #[test]
    fn test_non_finite_rejected() {
        assert_eq!(compute_total("100,inf"), 0.0);
        assert_eq!(compute_total("NaN"), 0.0);
    }

    #[test]
    fn test_negative_entries_are_summed() {
        assert_eq!(compute_total("100,-50"), 50.0);
        assert_eq!(compute_total_units("100,-50"), U256::ZERO);
    }

    #[test]
    fn test_deterministic() {
        let inputs = ["100,200,300", "100,abc", "", " 1 \n 2 , 3 ", "0.1,0.2"];
        for input in inputs {
            assert_eq!(compute_total(input), compute_total(input));
        }
    }

    #[test]
    fn test_separator_and_whitespace_insensitive() {
        let expected = compute_total("1,2,3,4");
        for input in ["1\n2\n3\n4", "1,2\n3,4", "  1 ,\t2\n 3\n,4  ", "1\n\n2,,3\n,4"] {
            assert_eq!(compute_total(input), expected, "input {input:?}");
        }
    }

    #[test]
    fn test_total_units() {
        assert_eq!(compute_total_units("100,200\n300"), U256::from(600));
        assert_eq!(
            compute_total_units("1000000000000000000\n2000000000000000000"),
            U256::from(3_000_000_000_000_000_000u128)
        );
    }

    #[test]
    fn test_total_units_fail_closed() {
        assert_eq!(compute_total_units(""), U256::ZERO);
        assert_eq!(compute_total_units("100,abc"), U256::ZERO);
        assert_eq!(compute_total_units("100,1.5"), U256::ZERO);
        assert_eq!(compute_total_units("+100"), U256::ZERO);
        assert_eq!(compute_total_units("1_000"), U256::ZERO);
    }

    #[test]
    fn test_total_units_overflow() {
        let max = U256::MAX.to_string();
        assert_eq!(compute_total_units(&max), U256::MAX);
        assert_eq!(compute_total_units(&format!("{max},1")), U256::ZERO);
    }

    #[test]
    fn test_parse_amounts() {
        let amounts = parse_amounts(&split_entries("100, 200\n300")).unwrap();
        assert_eq!(
            amounts,
            vec![U256::from(100), U256::from(200), U256::from(300)]
        );
    }

    #[test]
    fn test_parse_amounts_reports_entry() {
        let err = parse_amounts(&split_entries("100\n2.5\nabc")).unwrap_err();
        assert_eq!(
            err,
            InputError::InvalidAmount {
                index: 1,
                value: "2.5".to_string()
            }
        );
        assert!(err.to_string().contains("entry 2"));
    }
}
