//! Tests for per-branch search state

#[cfg(test)]
mod tests {
    use crate::common::{WALL, corridor, l_shaped, lattice_of};
    use mazetrace::maze::lattice::{Direction, ENTRANCE, Position};
    use mazetrace::solver::state::SearchState;

    // Tests the root state sits on the entrance with its candidates computed
    // Verified by leaving the root candidates empty
    #[test]
    fn test_entrance_state() {
        let lattice = lattice_of(l_shaped().build());
        let state = SearchState::entrance(&lattice);

        assert_eq!(state.history(), &[ENTRANCE]);
        assert_eq!(state.current(), ENTRANCE);
        assert_eq!(state.depth(), 0);
        assert_eq!(state.candidates().iter().collect::<Vec<_>>(), vec![Direction::Right]);
        assert!(!state.is_exit());
        assert_eq!(state.palette().wall, WALL);
    }

    // Tests advancing extends a private copy of the history
    // Verified by pushing onto the parent's history
    #[test]
    fn test_advance_forks_history() {
        let lattice = lattice_of(l_shaped().build());
        let root = SearchState::entrance(&lattice);
        let child = root.advance(Direction::Right);

        assert_eq!(root.history().len(), 1);
        assert_eq!(child.history(), &[ENTRANCE, Position::of_cell(0, 1)]);
        assert_eq!(child.depth(), 1);
        assert_eq!(child.candidates().iter().collect::<Vec<_>>(), vec![Direction::Down]);
    }

    // Tests every branch reads the same bitmap
    // Verified by cloning the bitmap on advance
    #[test]
    fn test_bitmap_shared_across_branches() {
        let lattice = lattice_of(corridor(3).build());
        let root = SearchState::entrance(&lattice);
        let child = root.advance(Direction::Right);

        assert!(std::ptr::eq(root.bitmap(), lattice.bitmap().as_ref()));
        assert!(std::ptr::eq(child.bitmap(), root.bitmap()));
    }

    // Tests a taken direction is not offered again
    // Verified by peeking instead of removing
    #[test]
    fn test_take_candidate_consumes() {
        let lattice = lattice_of(corridor(2).build());
        let mut state = SearchState::entrance(&lattice);

        assert_eq!(state.take_candidate(), Some(Direction::Right));
        assert_eq!(state.take_candidate(), None);
        assert!(state.candidates().is_empty());
    }

    // Tests the exit is recognised after the last move
    // Verified by checking the exit before computing candidates
    #[test]
    fn test_exit_after_advancing() {
        let lattice = lattice_of(l_shaped().build());
        let exit = SearchState::entrance(&lattice)
            .advance(Direction::Right)
            .advance(Direction::Down);

        assert_eq!(exit.current(), Position::of_cell(1, 1));
        assert!(exit.is_exit());
    }
}
