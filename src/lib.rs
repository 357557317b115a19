//! # sovran-store
//!
//! A process-wide, type-safe heterogeneous key-value store.
//!
//! `sovran-store` gives a program one shared container that can hold values
//! of any type under string keys, retrievable with static type guarantees
//! at the call site. It is built for lightweight global registries such as
//! dependency injection containers, test fixtures, or feature flags, where
//! defining a bespoke container per value type is not worth the ceremony.
//!
//! ## Key Features
//!
//! - **Type-safe**: every entry remembers the exact type it was stored as,
//!   and every read checks it; no unchecked casts, no numeric widening
//! - **Thread-safe**: all operations run under a single store-wide lock;
//!   a write that completes is visible to every later read
//! - **Two accessor flavors**: [`get`] silently falls back to
//!   `T::default()`, while [`get_e`] reports whether the key was absent
//!   or held a different type
//! - **Enum-friendly keys**: any `Display` type works as a key through the
//!   stringer variants
//! - **Testable**: the shared store is just a [`TypeStore`]; independent
//!   instances can be created freely
//!
//! ## Usage Examples
//!
//! ### Basic Usage
//!
//! ```rust
//! sovran_store::set("pi", 3.14f64);
//! sovran_store::set("meaningoflife", 42i32);
//! sovran_store::set("greeting", "hello, world!".to_string());
//!
//! let pi: f64 = sovran_store::get("pi");
//! let mol: i32 = sovran_store::get("meaningoflife");
//! let greeting: String = sovran_store::get("greeting");
//!
//! assert_eq!(pi, 3.14);
//! assert_eq!(mol, 42);
//! assert_eq!(greeting, "hello, world!");
//! ```
//!
//! ### Absent vs. Wrong Type
//!
//! [`get`] cannot tell you why a lookup came back empty; [`get_e`] can.
//!
//! ```rust
//! use sovran_store::StoreError;
//!
//! sovran_store::set("port", 8080u16);
//!
//! // Silent fallback: both failure kinds collapse to the default value.
//! assert_eq!(sovran_store::get::<String>("port"), "");
//! assert_eq!(sovran_store::get::<u16>("no-such-key"), 0);
//!
//! // Precise accessor: the two kinds stay distinct.
//! match sovran_store::get_e::<String>("port") {
//!     Err(StoreError::WrongType(requested)) => {
//!         println!("port is not a {}", requested)
//!     }
//!     other => panic!("unexpected: {:?}", other),
//! }
//! match sovran_store::get_e::<u16>("no-such-key") {
//!     Err(StoreError::ValueNotFound(key)) => println!("{} was never set", key),
//!     other => panic!("unexpected: {:?}", other),
//! }
//! ```
//!
//! ### Enum Keys
//!
//! Keys do not have to be string literals scattered through the codebase.
//! Any `Display` type can serve as a key via the stringer variants, which
//! render the key and delegate to the string-keyed operations.
//!
//! ```rust
//! use std::fmt;
//!
//! enum Setting {
//!     Theme,
//!     FontSize,
//! }
//!
//! impl fmt::Display for Setting {
//!     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
//!         match self {
//!             Setting::Theme => write!(f, "setting.theme"),
//!             Setting::FontSize => write!(f, "setting.fontsize"),
//!         }
//!     }
//! }
//!
//! sovran_store::stringer_set(Setting::Theme, "dark".to_string());
//! sovran_store::stringer_set(Setting::FontSize, 14u32);
//!
//! let theme: String = sovran_store::stringer_get(Setting::Theme);
//! assert_eq!(theme, "dark");
//!
//! // The stringer variants alias the plain string key.
//! assert_eq!(sovran_store::get::<u32>("setting.fontsize"), 14);
//! ```
//!
//! ### Dedicated Stores
//!
//! The shared store is a plain [`TypeStore`]; create your own instances
//! when a registry should not be process-global, or to keep tests
//! hermetic. Cloning a store clones the handle, not the contents.
//!
//! ```rust
//! use sovran_store::TypeStore;
//! use std::thread;
//!
//! let store = TypeStore::new();
//! store.set("counter", 0i64);
//!
//! let mut handles = vec![];
//! for _ in 0..4 {
//!     let store = store.clone();
//!     handles.push(thread::spawn(move || {
//!         for _ in 0..1000 {
//!             store.with_mut("counter", |n: &mut i64| *n += 1).unwrap();
//!         }
//!     }));
//! }
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//!
//! assert_eq!(store.get::<i64>("counter"), 4000);
//! ```

mod any_value;
mod error;
mod global;
mod store;

pub use error::StoreError;
pub use global::{get, get_e, set, shared, stringer_get, stringer_get_e, stringer_set};
pub use store::TypeStore;

// Re-export std::any for convenience
pub use std::any::{Any, TypeId};
