use crate::common::SlotId;
use crate::domain::PieceArena;
use crate::grid::Grid;

use super::body::Player;

/// What one ground pass did
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GroundReport {
    pub on_ground: bool,
    /// Pixels lifted in total
    pub lifted: u32,
    /// Hit tests performed, including lift iterations
    pub hit_tests: u32,
    /// Resolution gave up with the player still overlapping a placed hit box
    pub capped: bool,
}

/// Lift the player out of every placed hit box it overlaps.
///
/// Slots are scanned column by column. Each overlap lifts the player one pixel at a time until
/// clear, bounded by the combined heights of the two boxes. The scan repeats while it keeps
/// lifting, since clearing a later box can push the player back into an earlier one. A box the
/// player was lifted out of stays clear from then on, so every lifting pass clears at
/// least one box and `placed + 1` passes always suffice. Resting contact (box exactly touching a
/// surface below) is sensed with a one pixel probe.
pub fn resolve_ground(player: &mut Player, grid: &Grid, pieces: &PieceArena) -> GroundReport {
    let mut report = GroundReport::default();
    let max_passes = grid.placed_hit_boxes(pieces).count() + 1;

    for _ in 0..max_passes {
        let lifted_before = report.lifted;
        scan(player, grid, pieces, &mut report);
        if report.lifted == lifted_before {
            break;
        }
    }

    if report.lifted > 0 {
        report.hit_tests += 1;
        if grid.any_hit(pieces, player.hit_box().rect()) {
            log::error!(
                "ground resolution invariant violation: still overlapping after {} passes at {:?}",
                max_passes,
                player.position()
            );
            report.capped = true;
        }
    }

    if !report.on_ground {
        let mut probe = *player.hit_box().rect();
        probe.translate(0.0, 1.0);
        report.hit_tests += 1;
        report.on_ground = grid.any_hit(pieces, &probe);
    }
    report
}

fn scan(player: &mut Player, grid: &Grid, pieces: &PieceArena, report: &mut GroundReport) {
    for x in 0..grid.columns() {
        for y in 0..grid.rows() {
            let slot = SlotId(grid.index(x, y));
            let Some(piece) = grid.slot(slot).and_then(|s| s.piece()).and_then(|id| pieces.get(id)) else {
                continue;
            };

            for hb in piece.hit_boxes() {
                report.hit_tests += 1;
                if !hb.hit_test(player.hit_box()) {
                    continue;
                }
                report.on_ground = true;

                let (min, max) = hb.rect().bounds();
                let cap = (max.y - min.y).ceil() as u32 + player.config().height.max(0) as u32 + 1;
                let mut lifted = 0;
                while hb.hit_test(player.hit_box()) {
                    if lifted >= cap {
                        log::debug!("lift capped at {} px in slot ({}, {})", cap, x, y);
                        break;
                    }
                    player.move_by(0, -1);
                    lifted += 1;
                    report.hit_tests += 1;
                }
                report.lifted += lifted;
            }
        }
    }
}
