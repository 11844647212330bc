use super::buttons::buttons_compatibility;
use super::control::control_compatibility;
use super::types::{
    AvailablePools, ControlAllocationRound, ControlCompatibility, ControlSetCompatibility,
};
use crate::control_defs::ControlDefRegistry;
use crate::error::PfResult;
use crate::game::GameControlSet;
use crate::panel::{CPConfiguration, CPControlSet, ControlId};
use crate::score::Score;
use crate::status::{ControlsStatus, StatusLattice};
use std::cmp::Ordering;

/// Allocate one CP control set's resources to one game control set.
///
/// Round-based greedy matching: each round ranks every still-unallocated
/// requirement by its best-scoring candidate from a snapshot of the set's
/// available controls, then commits assignments in that priority order. A
/// requirement whose chosen control was claimed earlier in the same round
/// rolls into the next round against the reduced pool. A requirement with no
/// type-compatible candidate commits the absence candidate immediately, so
/// every round makes progress.
pub fn control_set_compatibility(
    defs: &ControlDefRegistry,
    panel: &CPConfiguration,
    cp_set: &CPControlSet,
    cp_set_index: usize,
    avail: &AvailablePools,
    game_set: &GameControlSet,
    game_set_index: usize,
) -> PfResult<ControlSetCompatibility> {
    // Controls of this set that are unclaimed and on the required screen
    // side. Side mismatches make a control ineligible, not merely penalized.
    let mut set_avail_controls: Vec<ControlId> = cp_set
        .control_ids
        .iter()
        .copied()
        .filter(|&id| {
            avail.has_control(id)
                && panel.control(id).is_on_opposite_screen_side
                    == game_set.is_on_opposite_screen_side
        })
        .collect();

    let avail_cluster = cp_set.button_cluster.filter(|&id| {
        avail.has_cluster(id)
            && panel.cluster(id).is_on_opposite_screen_side == game_set.is_on_opposite_screen_side
    });

    let mut rounds: Vec<ControlAllocationRound> = Vec::new();
    let mut control_comps: Vec<ControlCompatibility> = Vec::new();
    let mut remaining: Vec<usize> = (0..game_set.controls.len()).collect();

    while !remaining.is_empty() {
        let round_avail = set_avail_controls.clone();

        // For each unallocated requirement, the best candidate in the round
        // snapshot. Ties keep the earliest pool entry.
        let mut opts: Vec<ControlCompatibility> = Vec::with_capacity(remaining.len());
        for &req_index in &remaining {
            let game_control = &game_set.controls[req_index];

            let mut best: Option<ControlCompatibility> = None;
            for &cp_id in &round_avail {
                let comp = control_compatibility(defs, panel, Some(cp_id), game_control, req_index)?;
                let better = match &best {
                    Some(b) => comp.score.compare(&b.score) == Ordering::Greater,
                    None => true,
                };
                if better {
                    best = Some(comp);
                }
            }

            // A control is never assigned purely to satisfy button count: if
            // the type fit alone is unsupported, fall back to leaving the
            // requirement unmet.
            let best = match best {
                Some(b) if b.control_status > ControlsStatus::Unsupported => b,
                _ => control_compatibility(defs, panel, None, game_control, req_index)?,
            };
            opts.push(best);
        }

        // Allocation priority within the round: best-scoring requirements
        // first (stable, so ties keep requirement order).
        opts.sort_by(|a, b| b.score.compare(&a.score));

        let mut allocated_game_controls = Vec::new();
        let mut unresolved = Vec::new();
        for comp in opts {
            match comp.cp_control {
                Some(id) if !set_avail_controls.contains(&id) => {
                    // claimed by a higher-priority requirement this round
                    unresolved.push(comp.game_control);
                }
                cp_control => {
                    if let Some(id) = cp_control {
                        set_avail_controls.retain(|c| *c != id);
                    }
                    allocated_game_controls.push(comp.game_control);
                    control_comps.push(comp);
                }
            }
        }

        remaining = unresolved;
        rounds.push(ControlAllocationRound {
            avail_controls: round_avail,
            allocated_game_controls,
        });
    }

    let buttons_comp = buttons_compatibility(panel, avail_cluster, &game_set.control_panel_buttons);

    let status = ControlsStatus::min_of(
        control_comps
            .iter()
            .map(|c| c.status)
            .chain([buttons_comp.status]),
    );

    let control_score_sum = Score::sum(control_comps.iter().map(|c| &c.score))?;
    let score = Score::of([
        ("controlSet.status", status.into()),
        ("controlSet.controlScoreSum", control_score_sum.into()),
        ("controlSet.buttonsScore", buttons_comp.score.clone().into()),
    ]);

    Ok(ControlSetCompatibility {
        game_control_set: game_set_index,
        cp_control_set: cp_set_index,
        control_comps,
        buttons_comp,
        status,
        score,
        rounds,
    })
}
