// src/validate/mod.rs
// =============================================================================
// URL validation: the gate every URL passes before it can enter the crawl
// frontier or the visited set.
//
// Submodules:
// - checks: the checks themselves and the ValidUrl type they produce
// =============================================================================

mod checks;

pub use checks::{forbidden_char, validate_url, ValidUrl, FORBIDDEN_CHARS};
