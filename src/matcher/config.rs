use super::control_set::control_set_compatibility;
use super::types::{
    AvailablePools, ControlConfigCompatibility, ControlSetCompatibility, SetAllocationRound,
};
use crate::control_defs::ControlDefRegistry;
use crate::error::PfResult;
use crate::game::GameControlConfiguration;
use crate::panel::{CPConfiguration, CPControlSet};
use crate::score::Score;
use crate::status::{ControlsStatus, StatusLattice};
use std::cmp::Ordering;

/// Allocate whole CP control sets to every game control set of one
/// configuration.
///
/// The same round structure as the per-set allocator, one level up: each
/// round pairs every unallocated game control set with its best-fitting CP
/// control set (evaluated against a snapshot of the configuration-wide
/// pools), ranks the pairings, and commits them in priority order while the
/// concrete controls and cluster each pairing selected are still free. A
/// pairing invalidated by a higher-priority commit is recomputed next round
/// against the reduced pool, never reused stale.
pub fn control_config_compatibility(
    defs: &ControlDefRegistry,
    panel: &CPConfiguration,
    game_config: &GameControlConfiguration,
    config_index: usize,
) -> PfResult<ControlConfigCompatibility> {
    let mut avail = AvailablePools {
        controls: panel.control_ids().collect(),
        clusters: panel.cluster_ids().collect(),
    };

    // A panel without explicit stations still matches: synthesize a single
    // empty one so every game control set gets an (absence-only) pairing.
    let implicit_set = [CPControlSet::default()];
    let cp_sets: Vec<&CPControlSet> = if panel.control_sets.is_empty() {
        implicit_set.iter().collect()
    } else {
        panel.control_sets.iter().collect()
    };

    let mut rounds: Vec<SetAllocationRound> = Vec::new();
    let mut control_set_comps: Vec<ControlSetCompatibility> = Vec::new();
    let mut remaining: Vec<usize> = (0..game_config.control_sets.len()).collect();

    while !remaining.is_empty() {
        let round_avail = avail.clone();

        // Best CP control set pairing for each unallocated game control set.
        let mut opts: Vec<ControlSetCompatibility> = Vec::with_capacity(remaining.len());
        for &set_index in &remaining {
            let game_set = &game_config.control_sets[set_index];

            let mut best = control_set_compatibility(
                defs,
                panel,
                cp_sets[0],
                0,
                &round_avail,
                game_set,
                set_index,
            )?;
            for (cp_index, cp_set) in cp_sets.iter().enumerate().skip(1) {
                let comp = control_set_compatibility(
                    defs,
                    panel,
                    cp_set,
                    cp_index,
                    &round_avail,
                    game_set,
                    set_index,
                )?;
                if comp.score.compare(&best.score) == Ordering::Greater {
                    best = comp;
                }
            }
            opts.push(best);
        }

        opts.sort_by(|a, b| b.score.compare(&a.score));

        let mut allocated_game_control_sets = Vec::new();
        for comp in opts {
            let controls_free = comp
                .control_comps
                .iter()
                .all(|c| c.cp_control.is_none_or(|id| avail.has_control(id)));
            let cluster_free = comp
                .buttons_comp
                .cp_button_cluster
                .is_none_or(|id| avail.has_cluster(id));

            if !controls_free || !cluster_free {
                continue;
            }

            for c in &comp.control_comps {
                if let Some(id) = c.cp_control {
                    avail.take_control(id);
                }
            }
            if let Some(id) = comp.buttons_comp.cp_button_cluster {
                avail.take_cluster(id);
            }

            remaining.retain(|&s| s != comp.game_control_set);
            allocated_game_control_sets.push(comp.game_control_set);
            control_set_comps.push(comp);
        }

        rounds.push(SetAllocationRound {
            avail_controls: round_avail.controls,
            avail_clusters: round_avail.clusters,
            allocated_game_control_sets,
        });
    }

    // Optional sets contribute to the score but never drag the status down.
    let required = |comp: &&ControlSetCompatibility| {
        game_config.control_sets[comp.game_control_set].is_required
    };
    let status = ControlsStatus::min_of(
        control_set_comps
            .iter()
            .filter(required)
            .map(|comp| comp.status),
    );

    let required_sum = Score::sum(
        control_set_comps
            .iter()
            .filter(required)
            .map(|comp| &comp.score),
    )?;
    let optional_sum = Score::sum(
        control_set_comps
            .iter()
            .filter(|comp| !game_config.control_sets[comp.game_control_set].is_required)
            .map(|comp| &comp.score),
    )?;

    let score = Score::of([
        ("controlConfig.status", status.into()),
        ("controlConfig.requiredScoreSum", required_sum.into()),
        ("controlConfig.optionalScoreSum", optional_sum.into()),
    ]);

    // TODO: match game_config.menu_buttons against leftover panel buttons

    Ok(ControlConfigCompatibility {
        game_control_config: config_index,
        control_set_comps,
        status,
        score,
        rounds,
    })
}
