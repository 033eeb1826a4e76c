//! Tag normalization: the single path through which tag strings enter a
//! document.
//!
//! A tag is stored trimmed and lowercased. Adding is idempotent (a duplicate
//! of an existing normalized tag is a no-op) and preserves insertion order.

/// Canonicalize a raw tag input. Returns `None` when nothing remains after
/// trimming.
pub fn normalize(raw: &str) -> Option<String> {
    let tag = raw.trim().to_lowercase();
    if tag.is_empty() { None } else { Some(tag) }
}

/// Normalize `raw` and append it to `tags` unless it is empty or already
/// present. Returns whether a tag was appended.
pub fn add_tag(tags: &mut Vec<String>, raw: &str) -> bool {
    match normalize(raw) {
        Some(tag) if !tags.contains(&tag) => {
            tags.push(tag);
            true
        }
        _ => false,
    }
}

/// Remove every entry equal to `tag`. Removing an absent tag is a no-op.
pub fn remove_tag(tags: &mut Vec<String>, tag: &str) {
    tags.retain(|t| t != tag);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_trims_and_lowercases() {
        assert_eq!(normalize("  Finance "), Some("finance".into()));
        assert_eq!(normalize("STRATÉGIE"), Some("stratégie".into()));
        assert_eq!(normalize("rh"), Some("rh".into()));
    }

    #[test]
    fn normalize_rejects_blank() {
        assert_eq!(normalize(""), None);
        assert_eq!(normalize("   "), None);
        assert_eq!(normalize("\t\n"), None);
    }

    #[test]
    fn normalize_is_idempotent() {
        for raw in ["  Finance ", "q1", "RÉUNION", "a b"] {
            let once = normalize(raw).unwrap();
            assert_eq!(normalize(&once), Some(once.clone()));
        }
    }

    #[test]
    fn add_tag_appends_normalized() {
        let mut tags = vec!["finance".to_string()];
        assert!(add_tag(&mut tags, "  Rapport "));
        assert_eq!(tags, vec!["finance", "rapport"]);
    }

    #[test]
    fn add_tag_duplicate_is_noop() {
        let mut tags = vec!["finance".to_string()];
        assert!(!add_tag(&mut tags, "Finance"));
        assert!(!add_tag(&mut tags, " finance "));
        assert_eq!(tags, vec!["finance"]);
    }

    #[test]
    fn add_tag_blank_is_noop() {
        let mut tags: Vec<String> = Vec::new();
        assert!(!add_tag(&mut tags, "   "));
        assert!(tags.is_empty());
    }

    #[test]
    fn remove_after_add_restores_sequence() {
        let mut tags = vec!["a".to_string(), "b".to_string()];
        add_tag(&mut tags, "c");
        remove_tag(&mut tags, "c");
        assert_eq!(tags, vec!["a", "b"]);
    }

    #[test]
    fn remove_absent_is_noop() {
        let mut tags = vec!["a".to_string()];
        remove_tag(&mut tags, "z");
        assert_eq!(tags, vec!["a"]);
    }
}
