/// Actions an observer can take during a projected gradient search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver and return the most recently accepted point.
    StopEarly,
}
