/// Parse a fixed-point decimal with exactly one fractional digit into its
/// value scaled by 10: `"12.3"` → `123`, `"-0.5"` → `-5`.
///
/// Returns `None` for anything outside `[+-]?\d+\.\d`: a missing or
/// misplaced decimal point, an empty integer part, a second fractional
/// digit, non-digit bytes, or an `i64` overflow. Runs on the hot path and
/// never allocates.
#[inline]
pub fn parse_fixed_point(bytes: &[u8]) -> Option<i64> {
    let (negative, digits) = match bytes.first()? {
        b'-' => (true, &bytes[1..]),
        b'+' => (false, &bytes[1..]),
        _ => (false, bytes),
    };

    let (integral, fractional) = match digits {
        [integral @ .., b'.', fractional] if !integral.is_empty() => (integral, *fractional),
        _ => return None,
    };
    if !fractional.is_ascii_digit() {
        return None;
    }

    let mut acc: i64 = 0;
    for &b in integral {
        if !b.is_ascii_digit() {
            return None;
        }
        acc = acc.checked_mul(10)?.checked_add(i64::from(b - b'0'))?;
    }
    let scaled = acc.checked_mul(10)?.checked_add(i64::from(fractional - b'0'))?;
    Some(if negative { -scaled } else { scaled })
}
