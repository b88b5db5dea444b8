/// The character substituted for masked positions.
pub const MASK: char = '*';

/// Mask every character at an odd (zero-based) position.
///
/// Spaces and punctuation are treated like any other character, and the
/// output has exactly as many characters as the input.
///
/// ```
/// use sealbid_core::redact::redact;
///
/// assert_eq!(redact("Alice"), "A*i*e");
/// assert_eq!(redact("Bo"), "B*");
/// assert_eq!(redact(""), "");
/// ```
pub fn redact(name: &str) -> String {
    name.chars()
        .enumerate()
        .map(|(i, c)| if i % 2 == 0 { c } else { MASK })
        .collect()
}
