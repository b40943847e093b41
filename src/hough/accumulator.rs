use crate::detector::DetectorError;
use crate::geometry::round_to_i32;
use crate::types::PixelPoint;
use std::f64::consts::{FRAC_PI_2, PI};

/// Default θ quantization step in radians (≈0.57°).
///
/// Tightening this grows the accumulator quadratically and the vote counts
/// roughly linearly; the harvest thresholds are tuned against this value.
pub const DEFAULT_DTHETA: f64 = 0.01;

/// One accumulator cell: a candidate segment in (ρ, θ) space.
#[derive(Clone, Copy, Debug, Default)]
pub struct Candidate {
    pub votes: u32,
    /// Lexicographically smallest (x, then y) pixel that voted here.
    /// Undefined while `votes == 0`.
    pub endpoint_a: PixelPoint,
    /// Lexicographically largest (x, then y) pixel that voted here.
    pub endpoint_b: PixelPoint,
    /// Set by the harvester so aliasing quantizations never emit twice.
    pub recorded: bool,
}

impl Candidate {
    #[inline]
    fn record_vote(&mut self, p: PixelPoint) {
        if self.votes == 0 {
            self.endpoint_a = p;
            self.endpoint_b = p;
        } else {
            if p < self.endpoint_a {
                self.endpoint_a = p;
            }
            if p > self.endpoint_b {
                self.endpoint_b = p;
            }
        }
        self.votes += 1;
    }
}

/// Dense vote grid over quantized (ρ, θ).
///
/// θ spans [−π/2, π/2) in `dtheta` steps; ρ spans [−ρ_max, ρ_max] in unit
/// steps with `ρ_max = ⌈√(W² + H²)⌉`, the image diagonal. Rows are ρ, with θ
/// as the inner stride, matching the harvester's scan order.
pub struct Accumulator {
    dtheta: f64,
    rho_max: f64,
    n_theta: usize,
    n_rho: usize,
    cells: Vec<Candidate>,
}

impl Accumulator {
    /// Allocate a zeroed grid sized for a `w × h` pixel region.
    ///
    /// Allocation failure surfaces immediately as `OutOfMemory`; the grid is
    /// by far the largest allocation of a detection pass.
    pub fn new(w: usize, h: usize, dtheta: f64) -> Result<Self, DetectorError> {
        let diag = ((w * w + h * h) as f64).sqrt().ceil();
        let rho_max = diag.max(1.0);
        let n_theta = (PI / dtheta) as usize;
        let n_rho = 2 * rho_max as usize + 1;

        let n_cells = n_rho
            .checked_mul(n_theta)
            .ok_or(DetectorError::OutOfMemory { cells: usize::MAX })?;
        let mut cells: Vec<Candidate> = Vec::new();
        cells
            .try_reserve_exact(n_cells)
            .map_err(|_| DetectorError::OutOfMemory { cells: n_cells })?;
        cells.resize(n_cells, Candidate::default());

        Ok(Self {
            dtheta,
            rho_max,
            n_theta,
            n_rho,
            cells,
        })
    }

    #[inline]
    pub fn dtheta(&self) -> f64 {
        self.dtheta
    }

    #[inline]
    pub fn theta_min(&self) -> f64 {
        -FRAC_PI_2
    }

    #[inline]
    pub fn theta_max(&self) -> f64 {
        FRAC_PI_2
    }

    #[inline]
    pub fn rho_max(&self) -> f64 {
        self.rho_max
    }

    #[inline]
    pub fn n_theta(&self) -> usize {
        self.n_theta
    }

    #[inline]
    pub fn n_rho(&self) -> usize {
        self.n_rho
    }

    /// Quantize (ρ, θ) to a cell index. Both axes clamp to their endpoints,
    /// so any value a clamping voter produces maps to a valid cell.
    #[inline]
    pub fn cell_index(&self, rho: f64, theta: f64) -> usize {
        let theta_idx = round_to_i32((theta - self.theta_min()) / self.dtheta)
            .clamp(0, self.n_theta as i32 - 1) as usize;
        let rho_idx = round_to_i32(rho + self.rho_max).clamp(0, self.n_rho as i32 - 1) as usize;
        let index = rho_idx * self.n_theta + theta_idx;
        debug_assert!(index < self.cells.len());
        index
    }

    /// Mutable access to the candidate cell for (ρ, θ). Never panics for any
    /// input the voter can produce.
    #[inline]
    pub fn cell_at_mut(&mut self, rho: f64, theta: f64) -> &mut Candidate {
        let index = self.cell_index(rho, theta);
        &mut self.cells[index]
    }

    /// Register one vote from `pixel` for the line (ρ, θ).
    #[inline]
    pub fn vote(&mut self, rho: f64, theta: f64, pixel: PixelPoint) {
        self.cell_at_mut(rho, theta).record_vote(pixel);
    }

    /// Cell by integer grid position, for the harvester scan.
    #[inline]
    pub(super) fn cell_mut(&mut self, rho_idx: usize, theta_idx: usize) -> &mut Candidate {
        &mut self.cells[rho_idx * self.n_theta + theta_idx]
    }
}
