//! Validation of mapping-table entries.

use miette::SourceSpan;
use moniker_engine::WellKnownTypes;

use crate::{Error, Result};

/// Check every table entry, pointing errors back at the TOML source.
pub(crate) fn validate_table(table: &WellKnownTypes, src: &str, filename: &str) -> Result<()> {
    for (type_name, name) in &table.names {
        validate_type_name(type_name, "[names]", src, filename)?;
        if let Some(reason) = validate_identifier(name) {
            return Err(Error::invalid_name(
                name,
                format!("name for '{type_name}'"),
                reason,
                src,
                filename,
                find_value_span(src, name),
            ));
        }
    }

    for (type_name, suffixes) in &table.suffixes {
        validate_type_name(type_name, "[suffixes]", src, filename)?;
        if suffixes.is_empty() {
            return Err(Error::empty_entry(
                format!("'{type_name}' maps to an empty suffix list"),
                src,
                filename,
                find_key_span(src, type_name),
            ));
        }
        for suffix in suffixes {
            if let Some(reason) = validate_identifier(suffix) {
                return Err(Error::invalid_name(
                    suffix,
                    format!("suffix for '{type_name}'"),
                    reason,
                    src,
                    filename,
                    find_value_span(src, suffix),
                ));
            }
        }
    }

    for type_name in &table.filtered {
        validate_type_name(type_name, "'filtered'", src, filename)?;
    }

    Ok(())
}

fn validate_type_name(type_name: &str, section: &str, src: &str, filename: &str) -> Result<()> {
    if type_name.trim().is_empty() {
        return Err(Error::empty_entry(
            format!("empty type name in {section}"),
            src,
            filename,
            None,
        ));
    }
    Ok(())
}

/// Check that a string is identifier-shaped. Returns a reason when not.
pub(crate) fn validate_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();
    match chars.next() {
        None => return Some("name is empty"),
        Some(c) if c.is_ascii_digit() => return Some("name starts with a digit"),
        Some(c) if !c.is_alphabetic() && c != '_' => {
            return Some("name starts with an invalid character");
        }
        _ => {}
    }
    if name.chars().any(|c| !c.is_alphanumeric() && c != '_') {
        return Some("name contains an invalid character");
    }
    None
}

/// Find the span of a quoted string value in the TOML source.
pub(crate) fn find_value_span(src: &str, value: &str) -> Option<SourceSpan> {
    let needle = format!("\"{value}\"");
    src.find(&needle)
        .map(|offset| (offset + 1, value.len()).into())
}

/// Find the span of a bare or quoted key in the TOML source.
pub(crate) fn find_key_span(src: &str, key: &str) -> Option<SourceSpan> {
    let patterns = [
        format!("{key} ="),
        format!("{key}="),
        format!("\"{key}\" ="),
    ];
    for pattern in &patterns {
        if let Some(offset) = src.find(pattern.as_str()) {
            return Some((offset, key.len()).into());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_identifier() {
        assert_eq!(validate_identifier("id"), None);
        assert_eq!(validate_identifier("FooId"), None);
        assert_eq!(validate_identifier("_count"), None);
        assert!(validate_identifier("").is_some());
        assert!(validate_identifier("1st").is_some());
        assert!(validate_identifier("foo-bar").is_some());
        assert!(validate_identifier("-foo").is_some());
    }

    #[test]
    fn test_find_value_span() {
        let src = "[names]\nGuid = \"id\"\n";
        let span = find_value_span(src, "id").unwrap();
        assert_eq!(span.offset(), src.find("id\"").unwrap());
        assert_eq!(span.len(), 2);
    }

    #[test]
    fn test_find_key_span() {
        let src = "[suffixes]\nGuid = [\"Id\"]\n";
        let span = find_key_span(src, "Guid").unwrap();
        assert_eq!(span.offset(), src.find("Guid").unwrap());
        assert_eq!(span.len(), 4);
    }
}
