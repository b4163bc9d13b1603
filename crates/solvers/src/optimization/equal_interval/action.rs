/// Actions an observer can take during equal-interval search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the search and report the midpoint of the current bracket.
    StopEarly,
}
