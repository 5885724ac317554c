/// A point is declared "not a member" as soon as its orbit leaves the
/// circle of radius two around the origin.
pub const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// The periodicity checkpoint lags the orbit and is refreshed every
/// this many steps.
const CHECKPOINT_INTERVAL: u32 = 20;

/**
 * Data structure for storing the internal state of the membership test
 * for a single sample point. Tracks the orbit of Z := Z*Z + C in separate
 * real/imaginary scalars, with cached squares to reduce the floating
 * point operation count, plus a lagging checkpoint used for periodicity
 * detection.
 */
pub struct OrbitSequence {
    pub x0: f64,
    pub y0: f64,
    pub x: f64,
    pub y: f64,
    pub x_sqr: f64,
    pub y_sqr: f64,
    x_old: f64,
    y_old: f64,
    period: u32,
}

impl OrbitSequence {
    /// Starts the orbit at the sample point itself, which is one step of
    /// Z := Z*Z + C ahead of the conventional Z = 0 seed. The checkpoint
    /// starts at the same point.
    fn new(x0: f64, y0: f64) -> OrbitSequence {
        OrbitSequence {
            x0,
            y0,
            x: x0,
            y: y0,
            x_sqr: x0 * x0,
            y_sqr: y0 * y0,
            x_old: x0,
            y_old: y0,
            period: 0,
        }
    }

    fn radius_squared(&self) -> f64 {
        self.x_sqr + self.y_sqr
    }

    // Z = Z*Z + C
    // The cached squares reproduce `x*x - y*y + x0` and `(x+x)*y + y0`
    // bit-for-bit; downstream equality checks rely on that.
    fn step(&mut self) {
        self.y = (self.x + self.x) * self.y + self.y0;
        self.x = self.x_sqr - self.y_sqr + self.x0;
        self.x_sqr = self.x * self.x;
        self.y_sqr = self.y * self.y;
    }

    /// Exact (not tolerance-based) comparison against the lagging
    /// checkpoint. A hit means the orbit revisited a previous iterate, so
    /// it is periodic and bounded.
    fn matches_checkpoint(&self) -> bool {
        self.x == self.x_old && self.y == self.y_old
    }

    fn refresh_checkpoint(&mut self) {
        self.period += 1;
        if self.period == CHECKPOINT_INTERVAL {
            self.period = 0;
            self.x_old = self.x;
            self.y_old = self.y;
        }
    }

    /// Run up to `checks` iterations; escape means "not a member", a
    /// periodicity hit means "member". Exhausting the budget without
    /// escaping defaults to "member" after one last escape check, so
    /// slow-escaping points can be misclassified when the budget is small.
    fn test_membership(&mut self, checks: u32) -> bool {
        for _ in 0..checks {
            if self.radius_squared() > ESCAPE_RADIUS_SQUARED {
                return false;
            }
            self.step();
            if self.matches_checkpoint() {
                return true;
            }
            self.refresh_checkpoint();
        }
        self.radius_squared() <= ESCAPE_RADIUS_SQUARED
    }
}

/// Closed-form fast path covering (approximately) the main cardioid and
/// the period-2 bulb, where the escape iteration is slowest. This is a
/// superset test, not an exact boundary: points it accepts are reported
/// as members without running any iteration.
pub fn in_cardioid_or_bulb(x0: f64, y0: f64) -> bool {
    let p = (x0 - 0.25) * (x0 - 0.25) + y0 * y0;
    let theta = y0.atan2(x0 - 0.25);
    let pc = 0.5 - 0.5 * theta.cos();
    pc * pc > p
}

/// Test whether a point is in the mandelbrot set.
/// @param x0: real part of the sample point
/// @param y0: imaginary part of the sample point
/// @param checks: iteration budget; caps the worst-case work per point.
///                `checks = 0` still applies a single escape check.
/// @return: true if the point is judged a member of the set.
///
/// Total over all finite inputs; there is no failure mode.
pub fn is_mandelbrot(x0: f64, y0: f64, checks: u32) -> bool {
    if in_cardioid_or_bulb(x0, y0) {
        return true;
    }
    OrbitSequence::new(x0, y0).test_membership(checks)
}
