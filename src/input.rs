//! Input collaborator and per-frame sampling

use glam::Vec2;

use crate::sim::TickInput;

/// Raw input the host exposes, already in field coordinates
pub trait InputSource {
    fn pointer_down(&self) -> bool;
    fn pointer_position(&self) -> Vec2;
    fn is_left_held(&self) -> bool;
    fn is_right_held(&self) -> bool;

    /// Snapshot this frame's input for the simulation
    fn sample(&self) -> TickInput {
        TickInput {
            pointer: self.pointer_down().then(|| self.pointer_position()),
            left: self.is_left_held(),
            right: self.is_right_held(),
        }
    }
}

/// Plain input state that hosts write events into
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputState {
    pub pointer: Option<Vec2>,
    pub left: bool,
    pub right: bool,
}

impl InputState {
    pub fn press_pointer(&mut self, pos: Vec2) {
        self.pointer = Some(pos);
    }

    pub fn release_pointer(&mut self) {
        self.pointer = None;
    }
}

impl InputSource for InputState {
    fn pointer_down(&self) -> bool {
        self.pointer.is_some()
    }

    fn pointer_position(&self) -> Vec2 {
        self.pointer.unwrap_or(Vec2::ZERO)
    }

    fn is_left_held(&self) -> bool {
        self.left
    }

    fn is_right_held(&self) -> bool {
        self.right
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_pointer_only_when_down() {
        let mut input = InputState {
            left: true,
            ..Default::default()
        };
        assert_eq!(input.sample().pointer, None);
        assert!(input.sample().left);

        input.press_pointer(Vec2::new(12.0, 34.0));
        assert_eq!(input.sample().pointer, Some(Vec2::new(12.0, 34.0)));

        input.release_pointer();
        assert!(!input.pointer_down());
    }
}
