/// Core value types.
///
/// Defines the `Value` enum with all runtime value variants, the shared
/// boolean and null sentinels, type names used in diagnostics, and the
/// inspect rendering the driver prints.
pub mod core;

/// Name-to-value binding tables.
///
/// Defines the lexically nested `Environment` and the shared handle type
/// closures capture.
pub mod environment;
