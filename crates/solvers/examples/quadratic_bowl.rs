//! Minimizes f(x, y) = x² + y² + 2xy from (3, 4) and prints the outcome.
//!
//! ```text
//! cargo run -p descent-solvers --example quadratic_bowl
//! ```

use descent_core::{Point, Vector, from_fns};
use descent_solvers::descent::steepest::{self, Config};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let objective = from_fns(
        |p: Point| p.x.powi(2) + p.y.powi(2) + 2.0 * p.x * p.y,
        |p: Point| Vector::new(2.0 * p.x + 2.0 * p.y, 2.0 * p.y + 2.0 * p.x),
    );

    let config = Config::new(1e-6, 1000)?;
    let solution = steepest::minimize_unobserved(&objective, Point::new(3.0, 4.0), &config)?;

    println!("{solution}");
    println!("f = {:e}, |grad f| = {:e}", solution.objective, solution.gradient_norm);

    Ok(())
}
