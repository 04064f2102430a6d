use crate::{Direction, Objective, Point, Step, Univariate};

/// A line through an iterate: an origin and a direction.
///
/// A ray is an immutable value. Solvers build a fresh ray each iteration and
/// hand it to the line search by value, so the search never sees the outer
/// loop's state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    origin: Point,
    direction: Direction,
}

impl Ray {
    /// Creates a ray from `origin` along `direction`.
    #[must_use]
    pub fn new(origin: Point, direction: Direction) -> Self {
        Self { origin, direction }
    }

    /// Returns the point the ray starts from.
    #[must_use]
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Returns the direction of travel.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the point at step length `length` along the ray.
    #[must_use]
    pub fn at(&self, length: f64) -> Point {
        self.origin.step(self.direction, length)
    }
}

/// An objective restricted to a ray: `φ(α) = f(origin + α·direction)`.
///
/// Implements [`Univariate`] so it can be passed straight to a line search.
#[derive(Debug, Clone, Copy)]
pub struct Restriction<'a, O> {
    objective: &'a O,
    ray: Ray,
}

impl<'a, O: Objective> Restriction<'a, O> {
    /// Restricts `objective` to `ray`.
    #[must_use]
    pub fn new(objective: &'a O, ray: Ray) -> Self {
        Self { objective, ray }
    }

    /// Returns the ray the objective is restricted to.
    #[must_use]
    pub fn ray(&self) -> Ray {
        self.ray
    }
}

impl<O: Objective> Univariate for Restriction<'_, O> {
    fn value(&self, t: f64) -> f64 {
        Objective::value(self.objective, self.ray.at(t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::{Vector, from_fns};

    #[test]
    fn ray_at_zero_is_origin() {
        let ray = Ray::new(
            Point::new(3.0, 4.0),
            Direction::steepest(Vector::new(14.0, 14.0)),
        );

        assert_eq!(ray.at(0.0), ray.origin());
        assert_eq!(ray.at(1.0), Point::new(-11.0, -10.0));
    }

    #[test]
    fn restriction_evaluates_objective_along_ray() {
        // f(x, y) = (x + y)², from (3, 4) along -∇f = (-14, -14).
        let objective = from_fns(
            |p: Point| (p.x + p.y).powi(2),
            |p: Point| Vector::new(2.0 * (p.x + p.y), 2.0 * (p.x + p.y)),
        );
        let start = Point::new(3.0, 4.0);
        let ray = Ray::new(start, Direction::steepest(objective.gradient(start)));
        let phi = Restriction::new(&objective, ray);

        // φ(α) = (7 - 28α)², minimized at α = 0.25.
        assert_relative_eq!(phi.value(0.0), 49.0);
        assert_relative_eq!(phi.value(0.25), 0.0);
        assert_relative_eq!(phi.value(0.5), 49.0);
    }
}
