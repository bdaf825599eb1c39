use crate::core::data::complex::Complex;

/// Iteration bound; reaching it classifies the point as inside the set.
pub const MAX_ITERATIONS: u32 = 1000;

/// Squared escape radius. Once `|z| > 2` the orbit provably diverges.
const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Escape time of `cx + cy·i` under `z ← z² + c`, in `0..=MAX_ITERATIONS`.
#[must_use]
pub fn classify(cx: f64, cy: f64) -> u32 {
    escape_time(Complex::new(cx, cy), MAX_ITERATIONS)
}

/// Number of iterations before `|z|² > 4`, or `max_iterations` if the orbit stays bounded.
///
/// Total over every `f64` input. A NaN magnitude never compares greater than the radius,
/// so non-finite orbits run out the bound and come back as `max_iterations`.
#[must_use]
pub fn escape_time(c: Complex, max_iterations: u32) -> u32 {
    let mut z = Complex::ZERO;

    for iteration in 0..max_iterations {
        if z.magnitude_squared() > ESCAPE_RADIUS_SQUARED {
            return iteration;
        }
        z = z.square() + c;
    }

    max_iterations
}
