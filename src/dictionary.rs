use std::{
    any::Any,
    collections::HashMap,
    sync::{Arc, RwLock},
};

use crate::{
    error::Error,
    typed::{typedkey::TypedKey, typedvalue::TypedValue},
};

/// Heterogeneous storage addressed through [`TypedKey`]s.
///
/// Each slot is keyed by the key's string identity and holds a value of
/// whatever type was last written to it; reads recover the static type via
/// the key, substituting the key's default on absence or mismatch. Cloning
/// the dictionary yields another handle to the same storage, and an internal
/// lock makes all operations safe to call from concurrent threads.
#[derive(Clone, Default)]
pub struct TypedDictionary {
    inner: Arc<DictionaryInner>,
}

#[derive(Default)]
struct DictionaryInner {
    slots: RwLock<HashMap<String, TypedValue>>,
}

impl TypedDictionary {
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Arc::new(DictionaryInner {
                slots: RwLock::new(HashMap::new()),
            }),
        }
    }

    /// Returns the value stored for `key`, falling back to the key's default.
    ///
    /// When nothing is stored under the key's identity, or the stored value
    /// is of a different type than `T`, the default is written into the slot
    /// (replacing any mismatched value) and returned. A read is therefore
    /// never a pure read: after it, the dictionary always holds a `T` under
    /// this identity, and repeated unwritten reads keep yielding the default.
    pub fn get<T>(&self, key: &TypedKey<T>) -> T
    where
        T: Any + Clone + Send + Sync,
    {
        let slots = self.inner.slots.read().unwrap();
        if let Some(value) = slots.get(key.identity()).and_then(|s| s.downcast_ref::<T>()) {
            return value.clone();
        }
        drop(slots);
        let mut slots = self.inner.slots.write().unwrap();
        // Another handle may have stored a usable value between the locks.
        if let Some(value) = slots.get(key.identity()).and_then(|s| s.downcast_ref::<T>()) {
            return value.clone();
        }
        tracing::trace!("Materializing default for key {}", key.identity());
        let default = key.default_value().clone();
        slots.insert(
            key.identity().to_owned(),
            TypedValue::from_value(default.clone()),
        );
        default
    }

    /// Stores `value` for `key`, replacing whatever the identity held before.
    pub fn set<T>(&self, key: &TypedKey<T>, value: T)
    where
        T: Any + Send + Sync,
    {
        tracing::trace!("Storing value for key {}", key.identity());
        self.inner
            .slots
            .write()
            .unwrap()
            .insert(key.identity().to_owned(), TypedValue::from_value(value));
    }

    /// Strict read: no fallback and no materialization.
    ///
    /// Unlike [`get`](Self::get) this never writes, so an absent key or a
    /// type-mismatched slot is reported instead of being papered over.
    pub fn try_get<T>(&self, key: &TypedKey<T>) -> Result<T, Error>
    where
        T: Any + Clone + Send + Sync,
    {
        let slots = self.inner.slots.read().unwrap();
        let slot = slots.get(key.identity()).ok_or(Error::KeyNotFound)?;
        slot.downcast_ref::<T>().cloned().ok_or(Error::TypeMismatch)
    }

    /// Stores `value` only when the key's identity holds nothing yet.
    ///
    /// Presence is judged by identity alone; a value of another type stored
    /// under the same identity counts as present. Returns whether the value
    /// was stored.
    pub fn set_if_absent<T>(&self, key: &TypedKey<T>, value: T) -> bool
    where
        T: Any + Send + Sync,
    {
        let mut slots = self.inner.slots.write().unwrap();
        if slots.contains_key(key.identity()) {
            return false;
        }
        tracing::trace!("Storing initial value for key {}", key.identity());
        slots.insert(key.identity().to_owned(), TypedValue::from_value(value));
        true
    }

    #[must_use]
    /// Returns whether any value, of any type, is stored under the key's identity.
    pub fn contains<T>(&self, key: &TypedKey<T>) -> bool {
        self.inner
            .slots
            .read()
            .unwrap()
            .contains_key(key.identity())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.slots.read().unwrap().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
