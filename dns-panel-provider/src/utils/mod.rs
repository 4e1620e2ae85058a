//! Utility modules.

/// Log sanitization to keep tokens and large bodies out of debug logs.
pub mod log_sanitizer;
