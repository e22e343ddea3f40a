// Integer parsing for 1-based task positions

/// Parse a whole number, returning `None` when the text is not an integer.
///
/// Every `i64` is a legitimate result (zero and negatives included), so failure
/// is never folded into a sentinel value. Range checks belong to the caller.
pub fn parse_int(text: &str) -> Option<i64> {
    text.parse::<i64>().ok()
}

/// Convert a user-supplied 1-based position into a 0-based index,
/// provided it lies within `1..=size`
pub fn to_index(position: i64, size: usize) -> Option<usize> {
    let position = usize::try_from(position).ok()?;
    (1..=size).contains(&position).then(|| position - 1)
}
