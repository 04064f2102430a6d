use crate::{Direction, Point};

/// A trait for values that can be moved along a direction.
///
/// Line-search based solvers use this to turn a step length into the next
/// iterate: `next = current + length * direction`.
pub trait Step {
    /// The direction type the value moves along.
    type Direction;

    /// Returns the value after moving `length` along `direction`.
    #[must_use]
    fn step(&self, direction: Self::Direction, length: f64) -> Self;
}

impl Step for Point {
    type Direction = Direction;

    fn step(&self, direction: Direction, length: f64) -> Self {
        let d = direction.vector();
        Point::new(self.x + length * d.x, self.y + length * d.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::Vector;

    #[test]
    fn step_moves_against_gradient() {
        let start = Point::new(3.0, 4.0);
        let direction = Direction::steepest(Vector::new(14.0, 14.0));

        let next = start.step(direction, 0.25);

        assert_eq!(next, Point::new(-0.5, 0.5));
    }

    #[test]
    fn zero_length_step_returns_same_point() {
        let start = Point::new(-1.5, 2.0);
        let direction = Direction::steepest(Vector::new(1.0, 1.0));

        assert_eq!(start.step(direction, 0.0), start);
    }

    #[test]
    fn negative_length_steps_backwards() {
        let start = Point::new(0.0, 0.0);
        let direction = Direction::steepest(Vector::new(-1.0, 2.0));

        assert_eq!(start.step(direction, -0.5), Point::new(-0.5, 1.0));
    }
}
