/// Default number of results for autocomplete/search
pub const DEFAULT_SEARCH_LIMIT: usize = 10;

/// Queries shorter than this (in characters) never scan the dataset
pub const MIN_QUERY_CHARS: usize = 2;

/// Default cap on `limit` accepted by the HTTP layer
pub const DEFAULT_SEARCH_MAX_LIMIT: usize = 100;

// =============================================================================
// HIERARCHY
// =============================================================================

/// Separator between code segments ("31.71.01.1001")
pub const CODE_SEPARATOR: char = '.';
