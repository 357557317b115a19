use crate::any_value::AnyValue;
use crate::error::StoreError;
use parking_lot::Mutex;
use std::any::{self, Any};
use std::collections::HashMap;
use std::fmt::Display;
use std::sync::Arc;

/// A thread-safe store that holds values of arbitrary type under string keys.
///
/// `TypeStore` is a heterogeneous registry: every entry remembers the exact
/// type it was stored as, and every read checks the requested type against
/// it at runtime. "Absent" and "wrong type" are distinct outcomes, surfaced
/// through [`get_e`](TypeStore::get_e); the silent accessor
/// [`get`](TypeStore::get) folds both into `T::default()` for call sites
/// that prefer ergonomics over precision.
///
/// All operations run under one lock owned by the store for its entire
/// lifetime, so concurrent readers and writers never observe a partially
/// updated entry. Cloning a `TypeStore` produces a second handle to the
/// same underlying map.
///
/// Most callers use the process-wide store through the crate-level free
/// functions instead of constructing their own instance; dedicated
/// instances exist for scoped registries and for tests.
///
/// # Examples
///
/// ```
/// use sovran_store::TypeStore;
///
/// let store = TypeStore::new();
///
/// store.set("number", 42i32);
/// store.set("text", "Hello, world!".to_string());
///
/// let number: i32 = store.get("number");
/// let text: String = store.get("text");
///
/// assert_eq!(number, 42);
/// assert_eq!(text, "Hello, world!");
///
/// // Absent or mismatched entries come back as the default value...
/// let missing: i32 = store.get("nonexistent");
/// assert_eq!(missing, 0);
///
/// // ...while get_e tells you which of the two it was.
/// assert!(store.get_e::<i32>("nonexistent").is_err());
/// ```
#[derive(Clone, Debug)]
pub struct TypeStore {
    items: Arc<Mutex<HashMap<String, AnyValue>>>,
}

impl TypeStore {
    /// Creates a new, empty store.
    pub fn new() -> Self {
        Self {
            items: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Stores `value` under `key`, inserting or overwriting unconditionally.
    ///
    /// The value's concrete type is recorded alongside it and checked on
    /// every read. Overwriting replaces the previous type association as
    /// well as the value. This operation cannot fail.
    ///
    /// # Examples
    ///
    /// ```
    /// use sovran_store::TypeStore;
    ///
    /// let store = TypeStore::new();
    /// store.set("pi", 3.14f64);
    /// assert_eq!(store.get::<f64>("pi"), 3.14);
    ///
    /// // Overwriting erases the old type association.
    /// store.set("pi", "apple".to_string());
    /// assert_eq!(store.get::<String>("pi"), "apple");
    /// assert_eq!(store.get::<f64>("pi"), 0.0);
    /// ```
    pub fn set<T>(&self, key: impl Into<String>, value: T)
    where
        T: Any + Send + Sync,
    {
        let mut items = self.items.lock();
        items.insert(key.into(), AnyValue::new(value));
    }

    /// Stores the result of `f` under `key`.
    ///
    /// The closure runs before the lock is taken, so an expensive
    /// construction never extends the critical section.
    ///
    /// # Examples
    ///
    /// ```
    /// use sovran_store::TypeStore;
    ///
    /// let store = TypeStore::new();
    /// store.set_with("squares", || (1..=5).map(|n| n * n).collect::<Vec<i32>>());
    /// assert_eq!(store.get::<Vec<i32>>("squares"), vec![1, 4, 9, 16, 25]);
    /// ```
    pub fn set_with<T, F>(&self, key: impl Into<String>, f: F)
    where
        T: Any + Send + Sync,
        F: FnOnce() -> T,
    {
        let value = f();
        self.set(key, value);
    }

    /// Returns a clone of the value stored under `key`, or `T::default()`.
    ///
    /// The default is returned both when no entry exists and when the entry
    /// was stored as some other type; callers that need to tell those apart
    /// use [`get_e`](TypeStore::get_e). Type matching is exact: a value
    /// stored as `i32` is not returned for a requested `i64`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sovran_store::TypeStore;
    ///
    /// let store = TypeStore::new();
    /// store.set("meaningoflife", 42i32);
    ///
    /// assert_eq!(store.get::<i32>("meaningoflife"), 42);
    /// assert_eq!(store.get::<String>("meaningoflife"), ""); // wrong type
    /// assert_eq!(store.get::<i32>("unset"), 0);             // absent
    /// ```
    pub fn get<T>(&self, key: &str) -> T
    where
        T: Any + Clone + Default,
    {
        let items = self.items.lock();
        items
            .get(key)
            .and_then(|entry| entry.downcast_ref::<T>())
            .cloned()
            .unwrap_or_default()
    }

    /// Returns a clone of the value stored under `key`, or an error saying
    /// why it could not be produced.
    ///
    /// This is the precise accessor: it is the only way to distinguish an
    /// absent entry from one stored as a different type.
    ///
    /// # Errors
    ///
    /// - [`StoreError::ValueNotFound`] if no entry exists for `key`
    /// - [`StoreError::WrongType`] if the entry was stored as a type other
    ///   than `T`
    ///
    /// # Examples
    ///
    /// ```
    /// use sovran_store::{StoreError, TypeStore};
    ///
    /// let store = TypeStore::new();
    /// store.set("pi", 3.14f64);
    ///
    /// assert_eq!(store.get_e::<f64>("pi"), Ok(3.14));
    /// assert!(matches!(
    ///     store.get_e::<i32>("pi"),
    ///     Err(StoreError::WrongType(_))
    /// ));
    /// assert!(matches!(
    ///     store.get_e::<f64>("tau"),
    ///     Err(StoreError::ValueNotFound(_))
    /// ));
    /// ```
    pub fn get_e<T>(&self, key: &str) -> Result<T, StoreError>
    where
        T: Any + Clone,
    {
        let items = self.items.lock();
        let entry = items
            .get(key)
            .ok_or_else(|| StoreError::ValueNotFound(key.to_owned()))?;

        if entry.is::<T>() {
            if let Some(value) = entry.downcast_ref::<T>() {
                return Ok(value.clone());
            }
        }

        Err(StoreError::WrongType(any::type_name::<T>()))
    }

    /// Stores `value` under the string rendering of `key`.
    ///
    /// Handy when keys are a custom enum rather than string literals; any
    /// `Display` type qualifies. The rendering must be deterministic, and
    /// two distinct keys that render to the same string deliberately alias
    /// the same entry; that is the caller's contract to uphold. Delegates
    /// to [`set`](TypeStore::set).
    ///
    /// # Examples
    ///
    /// ```
    /// use sovran_store::TypeStore;
    /// use std::fmt;
    ///
    /// enum Setting {
    ///     Theme,
    /// }
    ///
    /// impl fmt::Display for Setting {
    ///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    ///         match self {
    ///             Setting::Theme => write!(f, "theme"),
    ///         }
    ///     }
    /// }
    ///
    /// let store = TypeStore::new();
    /// store.stringer_set(Setting::Theme, "dark".to_string());
    /// assert_eq!(store.get::<String>("theme"), "dark");
    /// ```
    pub fn stringer_set<K, T>(&self, key: K, value: T)
    where
        K: Display,
        T: Any + Send + Sync,
    {
        self.set(key.to_string(), value);
    }

    /// Returns a clone of the value stored under the string rendering of
    /// `key`, or `T::default()`. Delegates to [`get`](TypeStore::get).
    pub fn stringer_get<K, T>(&self, key: K) -> T
    where
        K: Display,
        T: Any + Clone + Default,
    {
        self.get(&key.to_string())
    }

    /// Returns a clone of the value stored under the string rendering of
    /// `key`, or an error. Delegates to [`get_e`](TypeStore::get_e).
    ///
    /// # Errors
    ///
    /// Same as [`get_e`](TypeStore::get_e).
    pub fn stringer_get_e<K, T>(&self, key: K) -> Result<T, StoreError>
    where
        K: Display,
        T: Any + Clone,
    {
        self.get_e(&key.to_string())
    }

    /// Runs a closure with read access to the value stored under `key`.
    ///
    /// Useful for values that do not implement `Clone`, or for computing a
    /// derived result without copying. The closure runs while the store
    /// lock is held, so it must not call back into the same store.
    ///
    /// # Errors
    ///
    /// - [`StoreError::ValueNotFound`] if no entry exists for `key`
    /// - [`StoreError::WrongType`] if the entry was stored as a type other
    ///   than `T`
    ///
    /// # Examples
    ///
    /// ```
    /// use sovran_store::TypeStore;
    ///
    /// let store = TypeStore::new();
    /// store.set("numbers", vec![1, 2, 3]);
    ///
    /// let len = store.with("numbers", |v: &Vec<i32>| v.len())?;
    /// assert_eq!(len, 3);
    /// # Ok::<(), sovran_store::StoreError>(())
    /// ```
    pub fn with<T, F, R>(&self, key: &str, f: F) -> Result<R, StoreError>
    where
        T: Any,
        F: FnOnce(&T) -> R,
    {
        let items = self.items.lock();
        let entry = items
            .get(key)
            .ok_or_else(|| StoreError::ValueNotFound(key.to_owned()))?;

        match entry.downcast_ref::<T>() {
            Some(value) => Ok(f(value)),
            None => Err(StoreError::WrongType(any::type_name::<T>())),
        }
    }

    /// Runs a closure with write access to the value stored under `key`,
    /// modifying it in place.
    ///
    /// The closure runs while the store lock is held, so it must not call
    /// back into the same store.
    ///
    /// # Errors
    ///
    /// - [`StoreError::ValueNotFound`] if no entry exists for `key`
    /// - [`StoreError::WrongType`] if the entry was stored as a type other
    ///   than `T`
    ///
    /// # Examples
    ///
    /// ```
    /// use sovran_store::TypeStore;
    ///
    /// let store = TypeStore::new();
    /// store.set("visits", 0i32);
    ///
    /// store.with_mut("visits", |count: &mut i32| *count += 1)?;
    /// assert_eq!(store.get::<i32>("visits"), 1);
    /// # Ok::<(), sovran_store::StoreError>(())
    /// ```
    pub fn with_mut<T, F, R>(&self, key: &str, f: F) -> Result<R, StoreError>
    where
        T: Any,
        F: FnOnce(&mut T) -> R,
    {
        let mut items = self.items.lock();
        let entry = items
            .get_mut(key)
            .ok_or_else(|| StoreError::ValueNotFound(key.to_owned()))?;

        match entry.downcast_mut::<T>() {
            Some(value) => Ok(f(value)),
            None => Err(StoreError::WrongType(any::type_name::<T>())),
        }
    }

    /// True when an entry exists for `key`, regardless of its stored type.
    pub fn contains_key(&self, key: &str) -> bool {
        let items = self.items.lock();
        items.contains_key(key)
    }

    /// Removes the entry for `key`, returning `true` when one existed.
    pub fn remove(&self, key: &str) -> bool {
        let mut items = self.items.lock();
        items.remove(key).is_some()
    }

    /// Returns all keys currently in the store, in no particular order.
    pub fn keys(&self) -> Vec<String> {
        let items = self.items.lock();
        items.keys().cloned().collect()
    }

    /// Returns the number of entries in the store.
    pub fn len(&self) -> usize {
        let items = self.items.lock();
        items.len()
    }

    /// True when the store holds no entries.
    pub fn is_empty(&self) -> bool {
        let items = self.items.lock();
        items.is_empty()
    }
}

impl Default for TypeStore {
    fn default() -> Self {
        Self::new()
    }
}
