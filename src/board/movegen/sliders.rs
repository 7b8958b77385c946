use crate::board::attack_tables::{AttackTables, Direction};
use crate::board::{Bitboard, Square};

/// Cut each of the slider's rays at the first occupied square.
///
/// The blocking square itself stays in the set so it can be captured;
/// dropping own pieces is left to `filter_own_occupancy`.
#[must_use]
pub fn filter_sliding(
    tables: &AttackTables,
    sq: Square,
    pseudo: Bitboard,
    occupied: Bitboard,
) -> Bitboard {
    let mut reachable = Bitboard::EMPTY;
    for dir in Direction::ALL {
        let ray = tables.ray(dir, sq);
        if (ray & pseudo).is_empty() {
            continue;
        }
        let blockers = ray & occupied;
        // Nearest blocker: lowest index on rising rays, highest on falling ones
        let nearest = if dir.is_increasing() {
            blockers.lsb()
        } else {
            blockers.msb()
        };
        reachable |= match nearest {
            Some(blocker) => ray & !tables.ray(dir, blocker),
            None => ray,
        };
    }
    pseudo & reachable
}
