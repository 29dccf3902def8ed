//! Browser-facing bindings.
//!
//! The host page constructs a universe, then alternates `render()` and
//! `tick()` on its own schedule.

use gol_core::Position;
use wasm_bindgen::prelude::*;

/// Inclusive range `min..=max`
#[wasm_bindgen]
pub fn range(min: i32, max: i32) -> Vec<i32> {
    (min..=max).collect()
}

#[wasm_bindgen]
pub struct Universe {
    inner: gol_world::Universe,
}

#[wasm_bindgen]
impl Universe {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Universe {
        Universe {
            inner: gol_world::Universe::new(),
        }
    }

    pub fn tick(&mut self) {
        self.inner.tick();
    }

    pub fn render(&self) -> String {
        self.inner.render()
    }

    pub fn width(&self) -> u32 {
        self.inner.width()
    }

    pub fn height(&self) -> u32 {
        self.inner.height()
    }

    pub fn generation(&self) -> u64 {
        self.inner.generation()
    }

    pub fn toggle(&mut self, row: i32, col: i32) {
        self.inner.toggle(Position::new(row, col));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_is_inclusive() {
        assert_eq!(range(1, 4), vec![1, 2, 3, 4]);
        assert_eq!(range(3, 3), vec![3]);
        assert!(range(5, 1).is_empty());
    }

    #[test]
    fn test_binding_delegates() {
        let mut universe = Universe::new();
        assert_eq!((universe.width(), universe.height()), (64, 64));

        let before = universe.render();
        assert_eq!(before, universe.render());

        universe.tick();
        assert_eq!(universe.generation(), 1);
        assert_ne!(before, universe.render());

        let lines = universe.render().lines().count();
        assert_eq!(lines, 64);
    }
}
