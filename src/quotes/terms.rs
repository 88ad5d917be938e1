/// Split raw preference text into ordered search terms.
///
/// Terms are separated by commas or newlines, trimmed, and empty pieces are
/// dropped. Input with no usable term yields a single empty term, which the
/// quote source treats as "no preference".
pub fn parse_terms(raw: &str) -> Vec<String> {
    let terms: Vec<String> = raw
        .split([',', '\n'])
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect();

    if terms.is_empty() {
        vec![String::new()]
    } else {
        terms
    }
}
