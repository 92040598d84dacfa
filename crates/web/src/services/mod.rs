// =============================================================================
// Mobaus Web - Browser Services
// =============================================================================
// Table of Contents:
// 1. Submodules
// 2. Re-exports
// =============================================================================
//
// Browser-backed implementations of the capability traits in mobaus-common.
// Each one looks the browser object up per call and degrades quietly when it
// is missing, so the stores never hold a JS handle.
// =============================================================================

pub mod dom;
pub mod environment;
pub mod storage;

pub use dom::DocumentStyleSink;
pub use environment::NavigatorLanguage;
pub use storage::BrowserStorage;
