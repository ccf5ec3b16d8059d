//! Constants shared by the list views.

/// Records per page in every directory view.
pub const DEFAULT_PAGE_SIZE: usize = 9;

/// Pages shown on each side of the current page in the page window.
pub const PAGE_WINDOW_NEIGHBORS: usize = 1;
