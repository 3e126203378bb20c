use unicode_segmentation::UnicodeSegmentation;

/// Trim `value` and accept it only if its length in graphemes lies within
/// `min..=max`. User-perceived characters are counted, so "José" is 4 long.
pub(crate) fn trimmed_within(
    value: &str,
    min: usize,
    max: usize,
) -> Option<String> {
    let trimmed = value.trim();
    let len = trimmed.graphemes(true).count();
    (min..=max).contains(&len).then(|| trimmed.to_string())
}
