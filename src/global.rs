use crate::error::StoreError;
use crate::store::TypeStore;
use std::any::Any;
use std::fmt::Display;
use std::sync::OnceLock;

/// Returns the process-wide shared store.
///
/// The instance is created on first access and lives until the process
/// exits. Every free function in this crate operates on it; reach for it
/// directly when you need the instance-only operations such as
/// [`with`](TypeStore::with), [`with_mut`](TypeStore::with_mut) or
/// [`remove`](TypeStore::remove).
///
/// # Examples
///
/// ```
/// sovran_store::set("requests", 0u64);
/// sovran_store::shared().with_mut("requests", |n: &mut u64| *n += 1).unwrap();
/// assert_eq!(sovran_store::get::<u64>("requests"), 1);
/// ```
pub fn shared() -> &'static TypeStore {
    static SHARED: OnceLock<TypeStore> = OnceLock::new();
    SHARED.get_or_init(TypeStore::new)
}

/// Stores `value` under `key` in the shared store.
///
/// Inserts or overwrites unconditionally; cannot fail. Safe to call
/// concurrently from any thread.
///
/// # Examples
///
/// ```
/// sovran_store::set("pi", 3.14f64);
/// sovran_store::set("meaningoflife", 42i32);
/// ```
pub fn set<T>(key: impl Into<String>, value: T)
where
    T: Any + Send + Sync,
{
    shared().set(key, value);
}

/// Returns a clone of the value stored under `key` in the shared store,
/// or `T::default()` when the key is absent or holds another type.
///
/// Use [`get_e`] when the distinction matters.
///
/// # Examples
///
/// ```
/// sovran_store::set("greeting", "hello".to_string());
/// let greeting: String = sovran_store::get("greeting");
/// assert_eq!(greeting, "hello");
///
/// let unset: i32 = sovran_store::get("no-such-key");
/// assert_eq!(unset, 0);
/// ```
pub fn get<T>(key: &str) -> T
where
    T: Any + Clone + Default,
{
    shared().get(key)
}

/// Returns a clone of the value stored under `key` in the shared store,
/// or an error saying why it could not be produced.
///
/// # Errors
///
/// - [`StoreError::ValueNotFound`] if no entry exists for `key`
/// - [`StoreError::WrongType`] if the entry holds a type other than `T`
///
/// # Examples
///
/// ```
/// use sovran_store::StoreError;
///
/// sovran_store::set("port", 8080u16);
///
/// assert_eq!(sovran_store::get_e::<u16>("port"), Ok(8080));
/// assert!(matches!(
///     sovran_store::get_e::<String>("port"),
///     Err(StoreError::WrongType(_))
/// ));
/// ```
pub fn get_e<T>(key: &str) -> Result<T, StoreError>
where
    T: Any + Clone,
{
    shared().get_e(key)
}

/// Stores `value` under the string rendering of `key` in the shared store.
///
/// Any `Display` key qualifies, which makes enum-like key types pleasant
/// to use. Delegates to [`set`].
///
/// # Examples
///
/// ```
/// use std::fmt;
///
/// enum Flag {
///     DarkMode,
/// }
///
/// impl fmt::Display for Flag {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         match self {
///             Flag::DarkMode => write!(f, "darkmode"),
///         }
///     }
/// }
///
/// sovran_store::stringer_set(Flag::DarkMode, true);
/// assert!(sovran_store::get::<bool>("darkmode"));
/// ```
pub fn stringer_set<K, T>(key: K, value: T)
where
    K: Display,
    T: Any + Send + Sync,
{
    shared().stringer_set(key, value);
}

/// Returns a clone of the value stored under the string rendering of `key`
/// in the shared store, or `T::default()`. Delegates to [`get`].
pub fn stringer_get<K, T>(key: K) -> T
where
    K: Display,
    T: Any + Clone + Default,
{
    shared().stringer_get(key)
}

/// Returns a clone of the value stored under the string rendering of `key`
/// in the shared store, or an error. Delegates to [`get_e`].
///
/// # Errors
///
/// Same as [`get_e`].
pub fn stringer_get_e<K, T>(key: K) -> Result<T, StoreError>
where
    K: Display,
    T: Any + Clone,
{
    shared().stringer_get_e(key)
}
