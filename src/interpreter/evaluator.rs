/// Core evaluation loop.
///
/// Reduces an RPN sequence to a single number with an explicit value stack,
/// resolving identifiers, calls and operators against the environment.
pub mod core;

/// The factorial operator and its domain checks.
pub mod factorial;
