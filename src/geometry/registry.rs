//! Process-wide registry of geometry type indices.
//!
//! Indices are handed out first-come, starting at 0, and never reused.

use std::collections::HashMap;
use std::sync::{Mutex, OnceLock, PoisonError};

/// Stable integer tag for a geometry type name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeIndex(pub usize);

static TYPE_INDICES: OnceLock<Mutex<HashMap<String, TypeIndex>>> = OnceLock::new();

/// Return the index registered for `type_name`, registering it if new.
pub fn index_for(type_name: &str) -> TypeIndex {
    let registry = TYPE_INDICES.get_or_init(|| Mutex::new(HashMap::new()));
    // The map is only ever inserted into, so a poisoned lock still holds valid data.
    let mut indices = registry.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(index) = indices.get(type_name) {
        return *index;
    }
    let index = TypeIndex(indices.len());
    indices.insert(type_name.to_owned(), index);
    tracing::debug!("Registered geometry type {:?} as {:?}", type_name, index);
    index
}

/// The index already registered for `type_name`, without registering it.
pub fn lookup(type_name: &str) -> Option<TypeIndex> {
    let registry = TYPE_INDICES.get()?;
    let indices = registry.lock().unwrap_or_else(PoisonError::into_inner);
    indices.get(type_name).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_lookup_is_stable() {
        let first = index_for("registry-test-stable");
        let second = index_for("registry-test-stable");
        assert_eq!(first, second);
    }

    #[test]
    fn test_lookup_does_not_register() {
        assert_eq!(lookup("registry-test-never-registered"), None);
        assert_eq!(lookup("registry-test-never-registered"), None);
        let index = index_for("registry-test-lookup");
        assert_eq!(lookup("registry-test-lookup"), Some(index));
    }

    #[test]
    fn test_distinct_names_get_distinct_indices() {
        let a = index_for("registry-test-a");
        let b = index_for("registry-test-b");
        assert_ne!(a, b);
        assert_eq!(index_for("registry-test-a"), a);
        assert_eq!(index_for("registry-test-b"), b);
    }

    #[test]
    fn test_concurrent_registration_agrees() {
        let handles: Vec<_> = (0..8)
            .map(|_| std::thread::spawn(|| index_for("registry-test-threaded")))
            .collect();
        let indices: Vec<TypeIndex> = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .collect();
        assert!(indices.iter().all(|i| *i == indices[0]));
    }
}
