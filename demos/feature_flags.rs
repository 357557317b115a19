//! Demonstrates enum keys via the stringer accessors.
//!
//! Feature flags are a natural fit for the shared store: one process-wide
//! registry, typed values, and an enum key type instead of string literals
//! scattered through the codebase.
//!
//! Run with: cargo run --example feature_flags

use std::fmt;

enum Flag {
    DarkMode,
    MaxUploadMb,
    Greeting,
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Flag::DarkMode => write!(f, "flag.darkmode"),
            Flag::MaxUploadMb => write!(f, "flag.maxupload_mb"),
            Flag::Greeting => write!(f, "flag.greeting"),
        }
    }
}

fn main() {
    // Flags of different types live side by side
    sovran_store::stringer_set(Flag::DarkMode, true);
    sovran_store::stringer_set(Flag::MaxUploadMb, 256u32);
    sovran_store::stringer_set(Flag::Greeting, "hello, world!".to_string());

    let dark_mode: bool = sovran_store::stringer_get(Flag::DarkMode);
    let max_upload: u32 = sovran_store::stringer_get(Flag::MaxUploadMb);
    let greeting: String = sovran_store::stringer_get(Flag::Greeting);

    println!("dark mode:  {}", dark_mode);
    println!("max upload: {} MB", max_upload);
    println!("greeting:   {}", greeting);

    // A flag nobody set reads as its type's default, which for bool is off
    let rollout: bool = sovran_store::get("flag.rollout");
    println!("rollout:    {} (never set)", rollout);

    // The stringer key is just its rendered string
    println!(
        "via string key: {}",
        sovran_store::get::<String>("flag.greeting")
    );
}
