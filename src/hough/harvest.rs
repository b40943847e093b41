use super::accumulator::{Accumulator, Candidate};

/// Counters produced by a harvest scan.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HarvestStats {
    /// Cells examined (the whole grid).
    pub num_possible_lines: usize,
    /// Cells that cleared the vote threshold and were emitted.
    pub num_lines_with_min_votes: usize,
}

/// Scan the accumulator and emit every candidate above the vote threshold.
///
/// The scan order is θ outer, ρ inner; the merger's behavior depends on the
/// order candidates arrive in, so this order is part of the contract.
/// `recorded` is flipped before emission: adjacent (ρ, θ) quantizations can
/// alias to one cell, and the flag keeps an aliased cell from emitting twice.
pub fn harvest_candidates(
    acc: &mut Accumulator,
    min_votes: u32,
    mut emit: impl FnMut(&Candidate),
) -> HarvestStats {
    let mut stats = HarvestStats::default();
    for theta_idx in 0..acc.n_theta() {
        for rho_idx in 0..acc.n_rho() {
            stats.num_possible_lines += 1;
            let cell = acc.cell_mut(rho_idx, theta_idx);
            if cell.votes >= min_votes && !cell.recorded {
                cell.recorded = true;
                stats.num_lines_with_min_votes += 1;
                emit(&*cell);
            }
        }
    }
    stats
}
