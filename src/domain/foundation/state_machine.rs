//! State machine trait for status enums.

/// A status enum with a fixed transition graph.
///
/// Implementors list the outgoing edges of each state; the membership test
/// and terminal check come for free.
///
/// # Example
///
/// ```ignore
/// impl StateMachine for BookingStatus {
///     fn valid_transitions(&self) -> Vec<Self> {
///         match self {
///             Pending => vec![Confirmed, Cancelled],
///             Confirmed => vec![Cancelled],
///             Cancelled => vec![],
///         }
///     }
/// }
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns all valid target states from current state.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Returns true if transition from self to target is valid.
    fn can_transition_to(&self, target: &Self) -> bool {
        self.valid_transitions().contains(target)
    }

    /// True for states with no way out.
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Door {
        Open,
        Shut,
        Welded,
    }

    impl StateMachine for Door {
        fn valid_transitions(&self) -> Vec<Self> {
            match self {
                Door::Open => vec![Door::Shut],
                Door::Shut => vec![Door::Open, Door::Welded],
                Door::Welded => vec![],
            }
        }
    }

    #[test]
    fn membership_follows_the_edge_list() {
        assert!(Door::Shut.can_transition_to(&Door::Welded));
        assert!(!Door::Open.can_transition_to(&Door::Welded));
        assert!(!Door::Open.can_transition_to(&Door::Open));
    }

    #[test]
    fn only_states_without_edges_are_terminal() {
        assert!(Door::Welded.is_terminal());
        assert!(!Door::Open.is_terminal());
        assert!(!Door::Shut.is_terminal());
    }
}
