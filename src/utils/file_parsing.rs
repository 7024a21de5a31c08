#[inline]
pub fn strip_surrounding_quotes(s: &str) -> &str {
    let b = s.as_bytes();
    if b.len() >= 2 {
        let first = b[0];
        let last = b[b.len() - 1];
        if (first == b'\'' && last == b'\'') || (first == b'"' && last == b'"') {
            return &s[1..s.len() - 1];
        }
    }
    s
}

/// First field of a line, splitting on whitespace, commas or semicolons.
#[inline]
pub fn first_field(line: &str) -> Option<&str> {
    line.split(|c: char| c.is_whitespace() || c == ',' || c == ';')
        .find(|t| !t.is_empty())
}

/// Reads one sample from a text line.
///
/// Only the first field is considered; lines whose first field is not a
/// finite number yield `None`.
pub fn parse_sample_line(line: &str) -> Option<f64> {
    let field = strip_surrounding_quotes(first_field(line)?);
    field.parse::<f64>().ok().filter(|v| v.is_finite())
}
