//! `$NAME` / `${NAME}` substitution in raw document text.
//!
//! Invariants:
//! - NAME is one or more ASCII letters, digits, or underscores.
//! - Unset names expand to the empty string.
//! - A `$` not followed by a name or `{`, and an unterminated `${`, are kept literally.

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn is_name(text: &str) -> bool {
    !text.is_empty() && text.chars().all(is_name_char)
}

/// Replace variable references in `text` using `lookup`.
pub fn expand_vars<F>(text: &str, mut lookup: F) -> String
where
    F: FnMut(&str) -> Option<String>,
{
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(pos) = rest.find('$') {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];

        if let Some(braced) = after.strip_prefix('{') {
            match braced.find('}') {
                Some(end) if is_name(&braced[..end]) => {
                    out.push_str(&lookup(&braced[..end]).unwrap_or_default());
                    rest = &braced[end + 1..];
                }
                Some(end) => {
                    // Not a valid name: keep `${...}` verbatim.
                    out.push_str("${");
                    out.push_str(&braced[..=end]);
                    rest = &braced[end + 1..];
                }
                None => {
                    out.push('$');
                    rest = after;
                }
            }
            continue;
        }

        let len = after
            .char_indices()
            .find(|&(_, c)| !is_name_char(c))
            .map_or(after.len(), |(i, _)| i);
        if len == 0 {
            out.push('$');
        } else {
            out.push_str(&lookup(&after[..len]).unwrap_or_default());
        }
        rest = &after[len..];
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(name: &str) -> Option<String> {
        match name {
            "HOST" => Some("db.local".to_string()),
            "PORT" => Some("5432".to_string()),
            _ => None,
        }
    }

    #[test]
    fn test_braced_and_bare_references() {
        assert_eq!(expand_vars("host: ${HOST}", vars), "host: db.local");
        assert_eq!(expand_vars("port: $PORT", vars), "port: 5432");
        assert_eq!(expand_vars("${HOST}:$PORT/x", vars), "db.local:5432/x");
    }

    #[test]
    fn test_unset_reference_expands_to_empty() {
        assert_eq!(expand_vars("password: ${DB_PASSWORD}", vars), "password: ");
        assert_eq!(expand_vars("a$MISSING-b", vars), "a-b");
    }

    #[test]
    fn test_literal_dollar_is_kept() {
        assert_eq!(expand_vars("cost: $ 5", vars), "cost: $ 5");
        assert_eq!(expand_vars("end$", vars), "end$");
        assert_eq!(expand_vars("$-x", vars), "$-x");
    }

    #[test]
    fn test_unterminated_brace_is_kept() {
        assert_eq!(expand_vars("x: ${HOST", vars), "x: ${HOST");
    }

    #[test]
    fn test_invalid_braced_name_is_kept() {
        assert_eq!(expand_vars("x: ${not valid}", vars), "x: ${not valid}");
        assert_eq!(expand_vars("x: ${}", vars), "x: ${}");
    }

    #[test]
    fn test_text_without_references_is_unchanged() {
        let text = "service:\n  name: erp\n";
        assert_eq!(expand_vars(text, vars), text);
    }
}
