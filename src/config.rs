use std::time::Duration;

// =============================================================================
// Time-related constants
// =============================================================================

/// Timeout for catalog fetch operations (10 seconds)
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

// =============================================================================
// Query defaults
// =============================================================================

/// Product family queried when none is given on the command line
pub const DEFAULT_PRODUCT: &str = "openshift";
