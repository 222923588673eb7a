// Career recommendation and growth-guide lookups.
// Both operations are pure reads over the immutable catalog.

pub mod catalog;
pub mod extract;
pub mod guides;
pub mod handlers;
pub mod recommend;
