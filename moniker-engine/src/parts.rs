//! Case-boundary tokenization of type names.

/// True when `name` follows the `IFoo` interface convention: an uppercase
/// `I`, another uppercase letter right after it, and at least one more
/// character. Distinguishes `IEnumerable` from ordinary capitalized words
/// starting with `I`, like `Item`.
pub fn is_interface_name(name: &str) -> bool {
    let mut chars = name.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some('I'), Some(second), Some(_)) => second.is_uppercase(),
        _ => false,
    }
}

/// Drop the leading `I` of an interface-style name, e.g. `IEnumerable`
/// becomes `Enumerable`. Non-interface names pass through unchanged.
pub fn strip_interface_prefix(name: &str) -> &str {
    if is_interface_name(name) {
        &name[1..]
    } else {
        name
    }
}

/// True when the name has two or more capitalized word parts: it starts
/// with an uppercase letter and at least one lowercase run is followed
/// later by an uppercase character. Single-capital names like `Task` and
/// camel-cased names like `intValue` do not qualify.
pub fn has_multiple_parts(name: &str) -> bool {
    if name.starts_with(char::is_lowercase) {
        return false;
    }

    let mut seen_lowercase = false;
    for c in name.chars() {
        if c.is_lowercase() {
            seen_lowercase = true;
        } else if seen_lowercase && c.is_uppercase() {
            return true;
        }
    }
    false
}

/// Split a type name into its capitalized word parts. A part boundary sits
/// at every character that is uppercase and followed by a lowercase one, so
/// acronym runs stay together: `XMLParser` splits into `XML` and `Parser`.
pub fn split_name_parts(name: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut iter = name.char_indices().peekable();
    while let Some((idx, c)) = iter.next() {
        if idx == 0 || !c.is_uppercase() {
            continue;
        }
        if let Some(&(_, next)) = iter.peek() {
            if next.is_lowercase() {
                parts.push(&name[start..idx]);
                start = idx;
            }
        }
    }
    parts.push(&name[start..]);
    parts
}

/// Concatenate every uppercase letter of the name and lower-case the
/// result, e.g. `CancellationTokenSource` becomes `cts`.
pub fn abbreviate_uppercase(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_uppercase())
        .flat_map(char::to_lowercase)
        .collect()
}
