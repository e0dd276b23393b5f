//! glassy_core: Core utilities for the glassy compiler.
//!
//! Provides the session arena that owns every syntax tree node and the
//! source location type shared by tokens, nodes and diagnostics.

pub mod arena;
pub mod text;

// Re-export commonly used types
pub use arena::CompilerArena;
pub use text::SourceLocation;
