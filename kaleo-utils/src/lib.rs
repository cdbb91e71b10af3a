/// Shared paginated-list fetch core used by every list screen.
pub mod pagination;
/// Pure parser helpers.
pub mod parse;
