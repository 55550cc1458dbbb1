use std::collections::HashMap;

use super::{Tuple, decode_floats};

/// Memoised decode results for one extraction pass.
///
/// Entries are keyed by a caller-chosen id and the precision list. The
/// encoded text is not part of the key: a second lookup with the same id and
/// precisions returns the first result even if the text changed. Clear the
/// cache, or use a fresh one, between passes over different data.
#[derive(Debug, Clone, Default)]
pub struct DecodeCache {
    entries: HashMap<String, Vec<Tuple>>,
}

impl DecodeCache {
    /// Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cached decode results.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Report whether nothing has been cached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Report whether a result is cached for `id` and `precisions`.
    #[must_use]
    pub fn contains(&self, id: &str, precisions: &[u32]) -> bool {
        self.entries.contains_key(&cache_key(id, precisions))
    }

    /// Drop every cached result.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Decode through `cache`, reusing the stored result for a known id.
///
/// # Examples
/// ```
/// use tabgeo_core::{DecodeCache, decode_floats_with_cache};
///
/// let mut cache = DecodeCache::new();
/// let first = decode_floats_with_cache("g1", &mut cache, "_p~iF~ps|U", &[5, 5], false).to_vec();
/// // Same id and precisions: the cached tuples come back unchanged.
/// let second = decode_floats_with_cache("g1", &mut cache, "??", &[5, 5], false);
/// assert_eq!(second, first.as_slice());
/// ```
pub fn decode_floats_with_cache<'c>(
    id: &str,
    cache: &'c mut DecodeCache,
    encoded: &str,
    precisions: &[u32],
    check_lon_lat: bool,
) -> &'c [Tuple] {
    cache
        .entries
        .entry(cache_key(id, precisions))
        .or_insert_with(|| decode_floats(encoded, precisions, check_lon_lat))
}

fn cache_key(id: &str, precisions: &[u32]) -> String {
    let rendered: Vec<String> = precisions.iter().map(u32::to_string).collect();
    format!("{id}-{}", rendered.join(","))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn cache() -> DecodeCache {
        DecodeCache::new()
    }

    #[rstest]
    fn key_joins_id_and_precisions() {
        assert_eq!(cache_key("g1", &[6, 6]), "g1-6,6");
        assert_eq!(cache_key("g1", &[]), "g1-");
    }

    #[rstest]
    fn hit_ignores_changed_text(mut cache: DecodeCache) {
        let first = decode_floats_with_cache("g1", &mut cache, "??", &[5, 5], true).to_vec();
        let second = decode_floats_with_cache("g1", &mut cache, "_p~iF~ps|U", &[5, 5], false);
        assert_eq!(second, first.as_slice());
        assert_eq!(cache.len(), 1);
    }

    #[rstest]
    fn precisions_scope_entries(mut cache: DecodeCache) {
        let coarse = decode_floats_with_cache("g1", &mut cache, "_p~iF~ps|U", &[5, 5], false)
            .to_vec();
        let fine = decode_floats_with_cache("g1", &mut cache, "_p~iF~ps|U", &[6, 6], false);
        assert_ne!(fine, coarse.as_slice());
        assert_eq!(cache.len(), 2);
        assert!(cache.contains("g1", &[6, 6]));
    }

    #[rstest]
    fn clear_forgets_results(mut cache: DecodeCache) {
        let _ = decode_floats_with_cache("g1", &mut cache, "??", &[5, 5], false);
        cache.clear();
        assert!(cache.is_empty());
        assert!(!cache.contains("g1", &[5, 5]));
    }
}
