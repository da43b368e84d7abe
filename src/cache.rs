use std::hash::{Hash, Hasher};
use std::sync::OnceLock;

use indexmap::{Equivalent, IndexMap};
use parking_lot::Mutex;

use crate::error::Result;
use crate::flags::Flags;
use crate::pattern::{IntoPattern, Pattern};

/// Capacity of the process-wide pattern cache.
pub const MAX_CACHE: usize = 512;

#[derive(Debug, PartialEq, Eq, Hash)]
struct Key {
    raw: String,
    flags: Flags,
}

// borrowed form of `Key`; hashes the same way so lookups need no allocation
struct KeyRef<'a> {
    raw: &'a str,
    flags: Flags,
}

impl Hash for KeyRef<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
        self.flags.hash(state);
    }
}

impl Equivalent<Key> for KeyRef<'_> {
    fn equivalent(&self, key: &Key) -> bool {
        self.raw == key.raw && self.flags == key.flags
    }
}

/// Compiled patterns keyed by (text, flags).
///
/// When full, inserting evicts the oldest inserted entry. Hits do not
/// refresh an entry's position, so this is insertion order, not LRU.
#[derive(Debug)]
pub struct PatternCache {
    capacity: usize,
    entries: IndexMap<Key, Pattern>,
}

impl PatternCache {
    pub fn new() -> Self {
        PatternCache::with_capacity(MAX_CACHE)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        PatternCache {
            capacity,
            entries: IndexMap::with_capacity(capacity),
        }
    }

    /// Returns the cached pattern for `(raw, flags)`, compiling and storing
    /// it on a miss. Failed compilations are not stored.
    pub fn get_or_compile(&mut self, raw: &str, flags: Flags) -> Result<Pattern> {
        let key = KeyRef { raw, flags };
        if let Some(pattern) = self.entries.get(&key) {
            tracing::trace!(pattern = raw, "pattern cache hit");
            return Ok(pattern.clone());
        }

        let pattern = Pattern::new(raw, flags)?;
        if self.capacity == 0 {
            return Ok(pattern);
        }

        if self.entries.len() >= self.capacity {
            if let Some((evicted, _)) = self.entries.shift_remove_index(0) {
                tracing::trace!(pattern = evicted.raw.as_str(), "pattern cache eviction");
            }
        }

        tracing::trace!(pattern = raw, "pattern cache miss");
        self.entries.insert(
            Key {
                raw: raw.to_owned(),
                flags,
            },
            pattern.clone(),
        );

        Ok(pattern)
    }

    pub fn contains(&self, raw: &str, flags: Flags) -> bool {
        self.entries.contains_key(&KeyRef { raw, flags })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for PatternCache {
    fn default() -> Self {
        PatternCache::new()
    }
}

fn global() -> &'static Mutex<PatternCache> {
    static CACHE: OnceLock<Mutex<PatternCache>> = OnceLock::new();
    CACHE.get_or_init(|| Mutex::new(PatternCache::new()))
}

/// Compiles `pattern` with `flags`.
///
/// Pattern text goes through the process-wide cache. A compiled [`Pattern`]
/// is returned as is, and combining one with non-empty `flags` is an
/// [`Error::Usage`](crate::Error::Usage).
pub fn compile<P: IntoPattern>(pattern: P, flags: Flags) -> Result<Pattern> {
    pattern.into_pattern(flags)
}

pub(crate) fn compile_cached(raw: &str, flags: Flags) -> Result<Pattern> {
    global().lock().get_or_compile(raw, flags)
}

/// Empties the process-wide cache. Patterns already handed out stay valid.
pub fn purge() {
    global().lock().clear();
    tracing::trace!("pattern cache purged");
}
