// ============================================================================
// FILTER ENGINE - pure derivation of a list view
// ============================================================================
// Combines a free-text search over named fields with exact-match field
// filters. Never mutates the source collection; same inputs, same output.
// ============================================================================

/// Read access to an item's fields by name, stringified for matching.
pub trait SearchField {
    /// The stringified value of `key`, or `None` when the item has no such field.
    fn field(&self, key: &str) -> Option<String>;
}

/// Derive the filtered view of `data`.
///
/// Pass 1: if `query` is non-empty, keep items where at least one of
/// `search_keys` contains the lower-cased query as a substring (locale-naive).
/// Pass 2: every `(field, value)` entry with a non-empty value must match the
/// item's field exactly (stringified equality); empty values are no-ops.
/// Both passes are conjunctive.
pub fn apply_filters<T>(
    data: &[T],
    query: &str,
    search_keys: &[&str],
    field_filters: &[(String, String)],
) -> Vec<T>
where
    T: SearchField + Clone,
{
    let query = query.to_lowercase();

    data.iter()
        .filter(|item| {
            if query.is_empty() {
                return true;
            }
            search_keys.iter().any(|key| {
                item.field(key)
                    .map(|value| value.to_lowercase().contains(&query))
                    .unwrap_or(false)
            })
        })
        .filter(|item| {
            field_filters.iter().all(|(key, expected)| {
                if expected.is_empty() {
                    return true;
                }
                item.field(key)
                    .map(|value| value == *expected)
                    .unwrap_or(false)
            })
        })
        .cloned()
        .collect()
}

/// Distinct values of `key` across `data`, in first-seen order. Used to build
/// the options of the exact-match filter dropdowns.
pub fn distinct_values<T: SearchField>(data: &[T], key: &str) -> Vec<String> {
    let mut seen = Vec::new();
    for item in data {
        if let Some(value) = item.field(key) {
            if !seen.contains(&value) {
                seen.push(value);
            }
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug)]
    struct TestPet {
        name: &'static str,
        breed: &'static str,
        age: u32,
    }

    impl SearchField for TestPet {
        fn field(&self, key: &str) -> Option<String> {
            match key {
                "name" => Some(self.name.to_string()),
                "breed" => Some(self.breed.to_string()),
                "age" => Some(self.age.to_string()),
                _ => None,
            }
        }
    }

    const KEYS: &[&str] = &["name", "breed"];

    fn pets() -> Vec<TestPet> {
        vec![
            TestPet { name: "Buddy", breed: "Golden Retriever", age: 3 },
            TestPet { name: "Misha", breed: "Siamese", age: 2 },
            TestPet { name: "Rex", breed: "Golden Retriever", age: 5 },
        ]
    }

    #[test]
    fn empty_query_and_filters_is_identity() {
        let data = pets();
        assert_eq!(apply_filters(&data, "", KEYS, &[]), data);
    }

    #[test]
    fn absent_query_matches_nothing() {
        assert!(apply_filters(&pets(), "xyz-not-present", KEYS, &[]).is_empty());
    }

    #[test]
    fn search_is_case_insensitive_substring_over_any_key() {
        let hits = apply_filters(&pets(), "gOlDeN", KEYS, &[]);
        assert_eq!(hits.len(), 2);
        let hits = apply_filters(&pets(), "misha", KEYS, &[]);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Misha");
    }

    #[test]
    fn field_filter_is_exact_equality() {
        let filters = vec![("name".to_string(), "Buddy".to_string())];
        let hits = apply_filters(&pets(), "", KEYS, &filters);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Buddy");

        // Substring of a value must not match.
        let filters = vec![("name".to_string(), "Budd".to_string())];
        assert!(apply_filters(&pets(), "", KEYS, &filters).is_empty());
    }

    #[test]
    fn empty_filter_value_is_a_noop() {
        let filters = vec![("breed".to_string(), String::new())];
        assert_eq!(apply_filters(&pets(), "", KEYS, &filters), pets());
    }

    #[test]
    fn combined_passes_are_the_intersection() {
        let data = pets();
        let filters = vec![("breed".to_string(), "Golden Retriever".to_string())];

        let search_only = apply_filters(&data, "rex", KEYS, &[]);
        let filter_only = apply_filters(&data, "", KEYS, &filters);
        let combined = apply_filters(&data, "rex", KEYS, &filters);

        for item in &combined {
            assert!(search_only.contains(item));
            assert!(filter_only.contains(item));
        }
        assert_eq!(combined.len(), 1);
        assert_eq!(combined[0].name, "Rex");
    }

    #[test]
    fn numeric_fields_compare_stringified() {
        let filters = vec![("age".to_string(), "3".to_string())];
        let hits = apply_filters(&pets(), "", KEYS, &filters);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Buddy");
    }

    #[test]
    fn distinct_values_preserve_first_seen_order() {
        assert_eq!(
            distinct_values(&pets(), "breed"),
            vec!["Golden Retriever".to_string(), "Siamese".to_string()]
        );
    }
}
