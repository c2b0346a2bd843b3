//! Permissive numeric conversion with C `atof` semantics.
//!
//! Historical judgment and result files occasionally carry stray tokens in
//! their numeric columns. The legacy reader converted those with `atof`,
//! which parses the longest leading numeric prefix and yields `0.0` for
//! anything unparsable, and downstream scores depend on that behavior.
//! [`permissive_f64`] reproduces it rather than failing the line.

/// Convert a whitespace-free token to `f64`, `atof`-style.
///
/// Parses the longest leading prefix matching an optional sign, a decimal
/// mantissa, and an optional exponent; `inf`/`infinity`/`nan` (any case,
/// optionally signed) are also accepted. Anything else yields `0.0`.
///
/// # Example
///
/// ```
/// use trecset::numeric::permissive_f64;
///
/// assert_eq!(permissive_f64(b"1.5"), 1.5);
/// assert_eq!(permissive_f64(b"-2e3"), -2000.0);
/// assert_eq!(permissive_f64(b"3.5x"), 3.5);
/// assert_eq!(permissive_f64(b"abc"), 0.0);
/// ```
pub fn permissive_f64(token: &[u8]) -> f64 {
    let end = numeric_prefix_len(token);
    if end == 0 {
        return 0.0;
    }
    // The prefix is ASCII by construction.
    let prefix = std::str::from_utf8(&token[..end]).unwrap_or("");
    prefix.parse().unwrap_or(0.0)
}

/// Length of the longest leading prefix of `token` that forms a number.
fn numeric_prefix_len(token: &[u8]) -> usize {
    let mut i = 0;
    if i < token.len() && (token[i] == b'+' || token[i] == b'-') {
        i += 1;
    }

    for word in [&b"infinity"[..], b"inf", b"nan"] {
        if token.len() - i >= word.len()
            && token[i..i + word.len()].eq_ignore_ascii_case(word)
        {
            return i + word.len();
        }
    }

    let mut saw_digit = false;
    while i < token.len() && token[i].is_ascii_digit() {
        i += 1;
        saw_digit = true;
    }
    if i < token.len() && token[i] == b'.' {
        i += 1;
        while i < token.len() && token[i].is_ascii_digit() {
            i += 1;
            saw_digit = true;
        }
    }
    if !saw_digit {
        return 0;
    }

    // Exponent counts only if at least one digit follows the marker.
    let mantissa_end = i;
    if i < token.len() && (token[i] | 0x20) == b'e' {
        let mut j = i + 1;
        if j < token.len() && (token[j] == b'+' || token[j] == b'-') {
            j += 1;
        }
        if j < token.len() && token[j].is_ascii_digit() {
            while j < token.len() && token[j].is_ascii_digit() {
                j += 1;
            }
            return j;
        }
    }
    mantissa_end
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_decimals() {
        assert_eq!(permissive_f64(b"0"), 0.0);
        assert_eq!(permissive_f64(b"2"), 2.0);
        assert_eq!(permissive_f64(b"-1"), -1.0);
        assert_eq!(permissive_f64(b"1.25"), 1.25);
        assert_eq!(permissive_f64(b".5"), 0.5);
        assert_eq!(permissive_f64(b"5."), 5.0);
    }

    #[test]
    fn exponents() {
        assert_eq!(permissive_f64(b"1e3"), 1000.0);
        assert_eq!(permissive_f64(b"2.5E-1"), 0.25);
        // Incomplete exponent: atof keeps the mantissa.
        assert_eq!(permissive_f64(b"1e"), 1.0);
        assert_eq!(permissive_f64(b"1e+"), 1.0);
    }

    #[test]
    fn non_numeric_defaults_to_zero() {
        assert_eq!(permissive_f64(b"abc"), 0.0);
        assert_eq!(permissive_f64(b"-"), 0.0);
        assert_eq!(permissive_f64(b"."), 0.0);
        assert_eq!(permissive_f64(b""), 0.0);
        assert_eq!(permissive_f64(b"--1"), 0.0);
    }

    #[test]
    fn numeric_prefix_wins() {
        assert_eq!(permissive_f64(b"3.5rel"), 3.5);
        assert_eq!(permissive_f64(b"10,2"), 10.0);
    }

    #[test]
    fn special_values() {
        assert_eq!(permissive_f64(b"inf"), f64::INFINITY);
        assert_eq!(permissive_f64(b"-Infinity"), f64::NEG_INFINITY);
        assert!(permissive_f64(b"nan").is_nan());
        assert_eq!(permissive_f64(b"infx"), f64::INFINITY);
    }
}
