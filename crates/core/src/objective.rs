use crate::{Point, Vector};

/// A smooth objective of two variables with a known gradient.
///
/// Objectives must be deterministic, always producing the same value and
/// gradient for a given point. Solvers evaluate them many times per iteration
/// and assume no side effects.
pub trait Objective {
    /// Returns the objective value at `point`.
    fn value(&self, point: Point) -> f64;

    /// Returns the gradient of the objective at `point`.
    fn gradient(&self, point: Point) -> Vector;
}

impl<T: Objective + ?Sized> Objective for &T {
    fn value(&self, point: Point) -> f64 {
        (**self).value(point)
    }

    fn gradient(&self, point: Point) -> Vector {
        (**self).gradient(point)
    }
}

/// An [`Objective`] built from a value closure and a gradient closure.
///
/// Created by [`from_fns`].
#[derive(Debug, Clone, Copy)]
pub struct FnObjective<F, G> {
    value: F,
    gradient: G,
}

/// Creates an [`Objective`] from a value function and its gradient.
///
/// # Example
///
/// ```
/// use descent_core::{Objective, Point, Vector, from_fns};
///
/// let bowl = from_fns(
///     |p: Point| p.x * p.x + p.y * p.y,
///     |p: Point| Vector::new(2.0 * p.x, 2.0 * p.y),
/// );
///
/// assert_eq!(bowl.value(Point::new(1.0, 2.0)), 5.0);
/// assert_eq!(bowl.gradient(Point::new(1.0, 2.0)), Vector::new(2.0, 4.0));
/// ```
pub fn from_fns<F, G>(value: F, gradient: G) -> FnObjective<F, G>
where
    F: Fn(Point) -> f64,
    G: Fn(Point) -> Vector,
{
    FnObjective { value, gradient }
}

impl<F, G> Objective for FnObjective<F, G>
where
    F: Fn(Point) -> f64,
    G: Fn(Point) -> Vector,
{
    fn value(&self, point: Point) -> f64 {
        (self.value)(point)
    }

    fn gradient(&self, point: Point) -> Vector {
        (self.gradient)(point)
    }
}

/// A scalar function of a single real variable.
///
/// Closures of the form `Fn(f64) -> f64` implement this automatically.
pub trait Univariate {
    /// Returns the function value at `t`.
    fn value(&self, t: f64) -> f64;
}

impl<F> Univariate for F
where
    F: Fn(f64) -> f64,
{
    fn value(&self, t: f64) -> f64 {
        self(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn closures_are_univariate() {
        let parabola = |t: f64| (t - 0.3).powi(2);

        assert_relative_eq!(Univariate::value(&parabola, 0.3), 0.0);
        assert_relative_eq!(Univariate::value(&parabola, 1.3), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn references_forward_to_objective() {
        let objective = from_fns(|p: Point| p.x - p.y, |_: Point| Vector::new(1.0, -1.0));
        let by_ref = &objective;

        assert_eq!(Objective::value(&by_ref, Point::new(2.0, 0.5)), 1.5);
        assert_eq!(by_ref.gradient(Point::new(2.0, 0.5)), Vector::new(1.0, -1.0));
    }
}
