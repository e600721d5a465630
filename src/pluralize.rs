//! Expansion of compact unit-synonym lists into singular and plural spellings.

/// Interleave a trailing-"s" plural after every entry from `starting_index` on.
///
/// Entries before `starting_index` are copied as-is, so short abbreviations
/// such as `"s"` or `"m"` stay unpluralized with the default index of 1.
///
/// ```
/// use parse_time::pluralize;
///
/// assert_eq!(
///     pluralize(&["s", "sec", "second"], 1),
///     vec!["s", "sec", "secs", "second", "seconds"]
/// );
/// ```
pub fn pluralize<S: AsRef<str>>(items: &[S], starting_index: usize) -> Vec<String> {
    let split = starting_index.min(items.len());
    let (kept, expanded) = items.split_at(split);

    let mut result = Vec::with_capacity(kept.len() + expanded.len() * 2);
    result.extend(kept.iter().map(|item| item.as_ref().to_string()));
    for item in expanded {
        let item = item.as_ref();
        result.push(item.to_string());
        result.push(format!("{}s", item));
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pluralize_default_index() {
        assert_eq!(
            pluralize(&["s", "sec", "second"], 1),
            vec!["s", "sec", "secs", "second", "seconds"]
        );
    }

    #[test]
    fn test_pluralize_from_zero() {
        assert_eq!(
            pluralize(&["s", "sec", "second"], 0),
            vec!["s", "ss", "sec", "secs", "second", "seconds"]
        );
    }

    #[test]
    fn test_pluralize_from_two() {
        assert_eq!(
            pluralize(&["s", "sec", "second"], 2),
            vec!["s", "sec", "second", "seconds"]
        );
    }

    #[test]
    fn test_pluralize_index_past_end() {
        assert_eq!(pluralize(&["d", "day"], 2), vec!["d", "day"]);
        assert_eq!(pluralize(&["d", "day"], 10), vec!["d", "day"]);
    }

    #[test]
    fn test_pluralize_empty() {
        let empty: [&str; 0] = [];
        assert!(pluralize(&empty, 1).is_empty());
    }

    #[test]
    fn test_pluralize_owned_strings() {
        let items = vec!["h".to_string(), "hour".to_string()];
        assert_eq!(pluralize(&items, 1), vec!["h", "hour", "hours"]);
    }
}
