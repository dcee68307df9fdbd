use std::collections::{HashMap, VecDeque};

/// Per-wallet bounded buffer of recently seen transaction hashes.
///
/// Each wallet keeps the `capacity` most recent ids, newest at the front.
/// Inserting beyond capacity evicts from the back, so an id that ages out of
/// the window and later reappears in the feed would be notified again. That
/// is the accepted tradeoff for a bounded memory footprint; callers wanting
/// stronger guarantees need durable state, not a larger window.
pub struct RecencyCache {
    capacity: usize,
    seen: HashMap<String, VecDeque<String>>,
}

impl RecencyCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            seen: HashMap::new(),
        }
    }

    /// Number of wallets with a seeded buffer.
    pub fn wallet_count(&self) -> usize {
        self.seen.len()
    }

    /// Whether no wallet has been seeded yet.
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    /// Whether `wallet` has been seeded yet.
    pub fn contains_wallet(&self, wallet: &str) -> bool {
        self.seen.contains_key(wallet)
    }

    /// Initialize a wallet's buffer from ids in newest-first order,
    /// truncated to capacity. Replaces any existing buffer.
    pub fn seed<I>(&mut self, wallet: &str, ids: I)
    where
        I: IntoIterator<Item = String>,
    {
        let buf: VecDeque<String> = ids.into_iter().take(self.capacity).collect();
        self.seen.insert(wallet.to_string(), buf);
    }

    /// Membership test against the wallet's current buffer. Linear scan —
    /// the buffer is at most `capacity` entries.
    pub fn is_known(&self, wallet: &str, id: &str) -> bool {
        self.seen
            .get(wallet)
            .is_some_and(|buf| buf.iter().any(|seen| seen == id))
    }

    /// Insert `id` at the front of the wallet's buffer, evicting from the
    /// back past capacity. Re-recording a known id moves it to the front.
    pub fn record(&mut self, wallet: &str, id: String) {
        let buf = self.seen.entry(wallet.to_string()).or_default();
        if let Some(pos) = buf.iter().position(|seen| *seen == id) {
            buf.remove(pos);
        }
        buf.push_front(id);
        buf.truncate(self.capacity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn seed_then_identical_batch_all_known() {
        let mut cache = RecencyCache::new(20);
        cache.seed("w1", ids(&["a", "b", "c"]));
        for id in ["a", "b", "c"] {
            assert!(cache.is_known("w1", id));
        }
    }

    #[test]
    fn unseeded_wallet_knows_nothing() {
        let cache = RecencyCache::new(20);
        assert!(!cache.contains_wallet("w1"));
        assert!(!cache.is_known("w1", "a"));
    }

    #[test]
    fn seed_truncates_to_capacity() {
        let mut cache = RecencyCache::new(2);
        cache.seed("w1", ids(&["a", "b", "c"]));
        assert!(cache.is_known("w1", "a"));
        assert!(cache.is_known("w1", "b"));
        assert!(!cache.is_known("w1", "c"));
    }

    #[test]
    fn record_evicts_oldest_past_capacity() {
        let mut cache = RecencyCache::new(3);
        cache.seed("w1", ids(&[]));
        for id in ["a", "b", "c", "d"] {
            cache.record("w1", id.to_string());
        }
        // "a" was the first inserted and should have aged out.
        assert!(!cache.is_known("w1", "a"));
        assert!(cache.is_known("w1", "b"));
        assert!(cache.is_known("w1", "c"));
        assert!(cache.is_known("w1", "d"));
    }

    #[test]
    fn record_known_id_moves_to_front() {
        let mut cache = RecencyCache::new(3);
        for id in ["a", "b", "c"] {
            cache.record("w1", id.to_string());
        }
        // Re-record "a" (currently oldest), then push one more id. "a"
        // must survive the eviction because it moved to the front.
        cache.record("w1", "a".to_string());
        cache.record("w1", "d".to_string());
        assert!(cache.is_known("w1", "a"));
        assert!(!cache.is_known("w1", "b"));
    }

    #[test]
    fn record_known_id_does_not_grow_buffer() {
        let mut cache = RecencyCache::new(3);
        for id in ["a", "b", "c"] {
            cache.record("w1", id.to_string());
        }
        cache.record("w1", "b".to_string());
        // All three still present — the rewrite was a move, not an insert.
        for id in ["a", "b", "c"] {
            assert!(cache.is_known("w1", id));
        }
    }

    #[test]
    fn wallets_are_independent() {
        let mut cache = RecencyCache::new(20);
        cache.seed("w1", ids(&["a"]));
        cache.seed("w2", ids(&["b"]));
        assert!(cache.is_known("w1", "a"));
        assert!(!cache.is_known("w2", "a"));
        assert_eq!(cache.wallet_count(), 2);
    }
}
