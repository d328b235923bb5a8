//! Per-frame input edges.

/// Edge-triggered control signals for the current frame.
///
/// Each flag is true only on the frame where the key-down transition
/// happened; the harness clears both after every update/draw cycle, so a
/// held key produces exactly one edge.
#[derive(Debug, Default, Clone, Copy)]
pub struct InputState {
    /// "Previous" control edge (left arrow).
    pub previous_pressed: bool,
    /// "Next" control edge (right arrow).
    pub next_pressed: bool,
}

impl InputState {
    /// Reset both edges. Called by the harness at the end of each frame.
    pub fn clear_edges(&mut self) {
        self.previous_pressed = false;
        self.next_pressed = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_start_clear() {
        let input = InputState::default();
        assert!(!input.previous_pressed);
        assert!(!input.next_pressed);
    }

    #[test]
    fn clear_edges_resets_both() {
        let mut input = InputState {
            previous_pressed: true,
            next_pressed: true,
        };
        input.clear_edges();
        assert!(!input.previous_pressed);
        assert!(!input.next_pressed);
    }
}
