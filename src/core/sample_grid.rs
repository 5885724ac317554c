use rayon::iter::{IntoParallelIterator, ParallelIterator};

use crate::core::membership::is_mandelbrot;

/**
 * Maps a sample index onto a coordinate: `x0 + index * (x1 - x0) / (n - 1)`,
 * spanning [x0, x1] inclusive of both endpoints.
 *
 * A single-sample axis (`n = 1`) collapses onto `x0`; the slope is forced
 * to zero rather than dividing by zero.
 */
#[derive(Clone, Debug)]
pub struct LinearSampleMap {
    offset: f64,
    slope: f64,
}

impl LinearSampleMap {
    /**
     * @param n: number of samples spanned by [x0, x1]
     * @param x0: output of the map at 0
     * @param x1: output of the map at n-1
     */
    pub fn new(n: u32, x0: f64, x1: f64) -> LinearSampleMap {
        assert!(n > 0);
        let slope = if n > 1 {
            (x1 - x0) / ((n - 1) as f64)
        } else {
            0.0
        };
        LinearSampleMap { offset: x0, slope }
    }

    // Map from sample (integer) to coordinate (float)
    pub fn map(&self, index: u32) -> f64 {
        self.offset + self.slope * (index as f64)
    }

    // Maps from coordinate back to the nearest lower sample index.
    // Used by the renderer to place markers; not part of the sampler.
    pub fn inverse_map(&self, point: f64) -> i32 {
        ((point - self.offset) / self.slope) as i32
    }
}

/**
 * A square viewing window in the complex plane: `side` is the width and
 * height, `center` its midpoint. Bounds are derived as center ± side/2.
 */
#[derive(Clone, Copy, Debug)]
pub struct SampleRegion {
    pub side: f64,
    pub center: nalgebra::Vector2<f64>,
}

impl SampleRegion {
    /// `side` must be positive and finite so that the derived bounds
    /// satisfy `x_max > x_min` and `y_max > y_min`.
    pub fn new(side: f64, center: nalgebra::Vector2<f64>) -> Result<SampleRegion, SampleError> {
        if !side.is_finite() || side <= 0.0 {
            return Err(SampleError::InvalidArgument(format!(
                "`side` must be positive and finite, got: {}",
                side
            )));
        }
        Ok(SampleRegion { side, center })
    }

    pub fn x_min(&self) -> f64 {
        self.center[0] - 0.5 * self.side
    }

    pub fn x_max(&self) -> f64 {
        self.center[0] + 0.5 * self.side
    }

    pub fn y_min(&self) -> f64 {
        self.center[1] - 0.5 * self.side
    }

    pub fn y_max(&self) -> f64 {
        self.center[1] + 0.5 * self.side
    }
}

/**
 * Two parallel columns of coordinates, one entry per sample point judged
 * a member. Index `i` in both columns together forms one point.
 */
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MemberList {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl MemberList {
    pub fn new() -> MemberList {
        MemberList::default()
    }

    pub fn with_capacity(capacity: usize) -> MemberList {
        MemberList {
            x: Vec::with_capacity(capacity),
            y: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, x: f64, y: f64) {
        self.x.push(x);
        self.y.push(y);
    }

    /// Moves all points out of `other`, preserving order.
    pub fn append(&mut self, other: &mut MemberList) {
        self.x.append(&mut other.x);
        self.y.append(&mut other.y);
    }

    pub fn len(&self) -> usize {
        debug_assert_eq!(self.x.len(), self.y.len());
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

#[derive(Debug)]
pub enum SampleError {
    /// Degenerate request: non-positive `side`, `dens < 1`, `workers < 1`.
    InvalidArgument(String),
    /// The fixed-size worker pool could not be created. Fatal for the
    /// whole computation; partial results are not meaningful here.
    WorkerPool(rayon::ThreadPoolBuildError),
}

impl std::fmt::Display for SampleError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SampleError::InvalidArgument(message) => {
                write!(formatter, "invalid argument: {}", message)
            }
            SampleError::WorkerPool(error) => {
                write!(formatter, "unable to create worker pool: {}", error)
            }
        }
    }
}

impl std::error::Error for SampleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SampleError::WorkerPool(error) => Some(error),
            SampleError::InvalidArgument(_) => None,
        }
    }
}

fn check_sample_count(dens: u32) -> Result<(), SampleError> {
    if dens < 1 {
        return Err(SampleError::InvalidArgument(format!(
            "`dens` must be at least 1, got: {}",
            dens
        )));
    }
    Ok(())
}

/// Sweep one row (fixed `y`) across `dens` evenly spaced samples of
/// [x_min, x_max], collecting the points judged members, in ascending-x
/// order. Pure; this is the unit of parallel dispatch.
pub fn find_members_in_row(
    y: f64,
    x_min: f64,
    x_max: f64,
    dens: u32,
    checks: u32,
) -> MemberList {
    let x_map = LinearSampleMap::new(dens, x_min, x_max);
    let mut members = MemberList::with_capacity(dens as usize);
    for i in 0..dens {
        let x = x_map.map(i);
        if is_mandelbrot(x, y, checks) {
            members.push(x, y);
        }
    }
    members
}

/**
 * Classify every point of a `dens` x `dens` grid over the square region,
 * row by row in increasing-y order.
 *
 * @param side: width and height of the square viewing window
 * @param center: midpoint of the viewing window
 * @param dens: samples per axis, endpoints included
 * @param checks: iteration budget per sample point
 * @return: the member coordinates, row-major.
 */
pub fn find_members(
    side: f64,
    center: &nalgebra::Vector2<f64>,
    dens: u32,
    checks: u32,
) -> Result<MemberList, SampleError> {
    let region = SampleRegion::new(side, *center)?;
    check_sample_count(dens)?;

    let y_map = LinearSampleMap::new(dens, region.y_min(), region.y_max());
    let mut members = MemberList::with_capacity((dens as usize) * (dens as usize));
    for j in 0..dens {
        let mut row = find_members_in_row(y_map.map(j), region.x_min(), region.x_max(), dens, checks);
        members.append(&mut row);
    }
    Ok(members)
}

/**
 * Same contract and same output as `find_members`, computed by dispatching
 * rows across a fixed pool of `workers` threads. Rows are independent, so
 * no synchronization is needed; the indexed collect keeps them in
 * submission order regardless of completion order. The pool lives only
 * for the duration of this call.
 */
pub fn find_members_parallel(
    side: f64,
    center: &nalgebra::Vector2<f64>,
    dens: u32,
    checks: u32,
    workers: usize,
) -> Result<MemberList, SampleError> {
    let region = SampleRegion::new(side, *center)?;
    check_sample_count(dens)?;
    if workers < 1 {
        return Err(SampleError::InvalidArgument(format!(
            "`workers` must be at least 1, got: {}",
            workers
        )));
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .build()
        .map_err(SampleError::WorkerPool)?;

    let y_map = LinearSampleMap::new(dens, region.y_min(), region.y_max());
    let rows: Vec<MemberList> = pool.install(|| {
        (0..dens)
            .into_par_iter()
            .map(|j| {
                find_members_in_row(y_map.map(j), region.x_min(), region.x_max(), dens, checks)
            })
            .collect()
    });
    drop(pool); // pool is scoped to this call; release it before assembling output

    let mut members = MemberList::with_capacity((dens as usize) * (dens as usize));
    for mut row in rows {
        members.append(&mut row);
    }
    Ok(members)
}
