//! Logical JSON path utilities
//!
//! A logical path addresses one location inside a JSON document: the empty
//! string is the root, object members append `.key`, array elements append
//! `[index]`. This crate owns that grammar, derives rendering-safe
//! identifiers from paths, and canonicalizes user-entered search paths into
//! the `$`-rooted form used for lookups.

/// Append an object member key to a logical path
pub fn append_key(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{path}.{key}")
    }
}

/// Append an array element index to a logical path
pub fn append_index(path: &str, index: usize) -> String {
    format!("{path}[{index}]")
}

/// Last `.`-separated segment of a path
///
/// Bracketed indices stay attached to their segment: `"a[0].b"` yields
/// `"b"`, `"items[0]"` yields `"items[0]"`.
pub fn last_segment(path: &str) -> &str {
    path.rsplit('.').next().unwrap_or(path)
}

/// Derive a rendering-safe identifier from a logical path
///
/// Every run of `.`, `[` and `]` collapses into a single `_`, so the result
/// is stable under the path grammar and usable as a key by rendering
/// libraries. Keys that themselves contain those characters can collide
/// with structurally different paths; the builder reports such collisions
/// when they happen.
pub fn normalize_id(path: &str) -> String {
    let mut id = String::with_capacity(path.len());
    let mut in_run = false;

    for c in path.chars() {
        if matches!(c, '.' | '[' | ']') {
            if !in_run {
                id.push('_');
                in_run = true;
            }
        } else {
            id.push(c);
            in_run = false;
        }
    }

    id
}

/// Canonicalize a user-entered search path into its `$`-rooted form
///
/// Whitespace is trimmed, the empty input and `"$"` both mean the root,
/// and anything not already starting with `$` gains a `$.` prefix. The
/// `[n]` index syntax is preserved unchanged. Idempotent.
pub fn canonicalize(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() || trimmed == "$" {
        return "$".to_string();
    }

    if trimmed.starts_with('$') {
        trimmed.to_string()
    } else {
        format!("$.{trimmed}")
    }
}

/// Remove the `$` root marker from a canonical path
///
/// `"$.user.city"` becomes `"user.city"`, `"$[0]"` becomes `"[0]"` and
/// `"$"` becomes the empty root path.
pub fn strip_root(canonical: &str) -> &str {
    let rest = canonical.strip_prefix('$').unwrap_or(canonical);
    rest.strip_prefix('.').unwrap_or(rest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_grow_by_key_and_index() {
        assert_eq!(append_key("", "user"), "user");
        assert_eq!(append_key("user", "name"), "user.name");
        assert_eq!(append_index("", 0), "[0]");
        assert_eq!(append_index("items", 2), "items[2]");
        assert_eq!(append_key(&append_index("items", 0), "id"), "items[0].id");
    }

    #[test]
    fn last_segment_keeps_indices_attached() {
        assert_eq!(last_segment("user.address.city"), "city");
        assert_eq!(last_segment("items[0]"), "items[0]");
        assert_eq!(last_segment("a[0].b"), "b");
        assert_eq!(last_segment("[0]"), "[0]");
        assert_eq!(last_segment("city"), "city");
    }

    #[test]
    fn identifier_runs_collapse_to_single_underscores() {
        assert_eq!(normalize_id("user.address.city"), "user_address_city");
        assert_eq!(normalize_id("a[0].b"), "a_0_b");
        assert_eq!(normalize_id("items[10]"), "items_10_");
        assert_eq!(normalize_id("[0][1]"), "_0_1_");
        assert_eq!(normalize_id("root"), "root");
    }

    #[test]
    fn canonicalization_roots_bare_paths() {
        assert_eq!(canonicalize("user.address.city"), "$.user.address.city");
        assert_eq!(canonicalize("$.items[0].name"), "$.items[0].name");
        assert_eq!(canonicalize("  spaced.out  "), "$.spaced.out");
        assert_eq!(canonicalize(""), "$");
        assert_eq!(canonicalize("$"), "$");
        assert_eq!(canonicalize("   "), "$");
    }

    #[test]
    fn canonicalization_is_idempotent() {
        for input in ["", "$", "user.name", "$.user.name", "items[3]", "  a  "] {
            let once = canonicalize(input);
            assert_eq!(canonicalize(&once), once);
        }
    }

    #[test]
    fn strip_root_inverts_canonicalization() {
        assert_eq!(strip_root("$.user.city"), "user.city");
        assert_eq!(strip_root("$[0]"), "[0]");
        assert_eq!(strip_root("$"), "");
        assert_eq!(strip_root("user.city"), "user.city");

        for raw in ["user.city", "items[0].id", "a"] {
            assert_eq!(strip_root(&canonicalize(raw)), raw);
        }
        for canonical in ["$.user.city", "$.items[0].id", "$.a"] {
            assert_eq!(canonicalize(strip_root(canonical)), canonical);
        }
    }
}
