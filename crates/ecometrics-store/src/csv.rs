// SPDX-License-Identifier: PMPL-1.0-or-later
// SPDX-FileCopyrightText: 2026 Jonathan D.A. Jewell

//! Minimal line-oriented CSV codec for the history file.
//!
//! Fields containing a comma or quote are quoted and embedded quotes
//! doubled. Rows are strictly one line each; newlines inside a field are
//! flattened to spaces on write.

/// Encode one row. Infallible: every string has a CSV representation.
pub(crate) fn encode_row(fields: &[String]) -> String {
    fields
        .iter()
        .map(|f| encode_field(f))
        .collect::<Vec<_>>()
        .join(",")
}

fn encode_field(field: &str) -> String {
    let clean = field.replace(['\r', '\n'], " ");
    if clean.contains(',') || clean.contains('"') {
        format!("\"{}\"", clean.replace('"', "\"\""))
    } else {
        clean
    }
}

/// Split one line into fields, honoring quotes. Field content comes back
/// exactly as written; whitespace is significant.
pub(crate) fn parse_row(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(std::mem::take(&mut current));
            }
            _ => current.push(c),
        }
    }
    fields.push(current);
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(fields: &[&str]) -> Vec<String> {
        fields.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_plain_fields_round_trip() {
        let fields = strings(&["Churn Model", "Data Team", "42.5"]);
        assert_eq!(parse_row(&encode_row(&fields)), fields);
    }

    #[test]
    fn test_comma_in_field_is_quoted() {
        let fields = strings(&["Acme, Inc", "ok"]);
        let line = encode_row(&fields);
        assert!(line.starts_with('"'));
        assert_eq!(parse_row(&line), fields);
    }

    #[test]
    fn test_embedded_quotes_are_doubled() {
        let fields = strings(&["the \"best\" model", "x"]);
        let line = encode_row(&fields);
        assert_eq!(line, "\"the \"\"best\"\" model\",x");
        assert_eq!(parse_row(&line), fields);
    }

    #[test]
    fn test_empty_trailing_field_survives() {
        let fields = strings(&["a", "", ""]);
        assert_eq!(parse_row(&encode_row(&fields)), fields);
    }

    #[test]
    fn test_surrounding_whitespace_is_preserved() {
        let fields = strings(&["  padded  ", "\ttabbed", "x"]);
        assert_eq!(parse_row(&encode_row(&fields)), fields);
    }

    #[test]
    fn test_newlines_are_flattened_on_write() {
        let fields = strings(&["line one\nline two"]);
        let line = encode_row(&fields);
        assert!(!line.contains('\n'));
        assert_eq!(parse_row(&line), strings(&["line one line two"]));
    }
}
