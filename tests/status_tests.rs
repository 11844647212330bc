use panelfit::status::{
    ControlsStatus, EmulationStatus, OverallStatus, StatusLattice, VideoStatus,
};

#[test]
fn lattice_order_matches_ranks() {
    assert!(ControlsStatus::Unknown < ControlsStatus::Unsupported);
    assert!(ControlsStatus::Unsupported < ControlsStatus::Bad);
    assert!(ControlsStatus::Bad < ControlsStatus::Ok);
    assert!(ControlsStatus::Ok < ControlsStatus::Good);
    assert!(ControlsStatus::Good < ControlsStatus::Native);

    assert_eq!(ControlsStatus::Unknown.rank(), -1);
    assert_eq!(ControlsStatus::Native.rank(), 4);
}

#[test]
fn min_picks_worst_and_max_picks_best() {
    let statuses = [
        ControlsStatus::Good,
        ControlsStatus::Bad,
        ControlsStatus::Native,
    ];
    assert_eq!(ControlsStatus::min_of(statuses), ControlsStatus::Bad);
    assert_eq!(ControlsStatus::max_of(statuses), ControlsStatus::Native);
}

#[test]
fn empty_reductions_yield_unknown() {
    assert_eq!(ControlsStatus::min_of([]), ControlsStatus::Unknown);
    assert_eq!(ControlsStatus::max_of([]), ControlsStatus::Unknown);
    assert_eq!(VideoStatus::max_of([]), VideoStatus::Unknown);
}

#[test]
fn unknown_always_wins_min_and_never_max() {
    let statuses = [ControlsStatus::Unknown, ControlsStatus::Unsupported];
    assert_eq!(ControlsStatus::min_of(statuses), ControlsStatus::Unknown);
    assert_eq!(ControlsStatus::max_of(statuses), ControlsStatus::Unsupported);
}

#[test]
fn known_min_filters_the_sentinel() {
    let statuses = [
        OverallStatus::Unknown,
        OverallStatus::Good,
        OverallStatus::Ok,
    ];
    assert_eq!(OverallStatus::known_min(statuses), OverallStatus::Ok);
    assert_eq!(
        OverallStatus::known_min([OverallStatus::Unknown]),
        OverallStatus::Unknown
    );
}

#[test]
fn score_rank_clamps_unknown_to_zero() {
    assert_eq!(ControlsStatus::Unknown.score_rank(), 0);
    assert_eq!(ControlsStatus::Unsupported.score_rank(), 0);
    assert_eq!(ControlsStatus::Native.score_rank(), 4);
}

#[test]
fn emulation_maps_to_overall() {
    assert_eq!(
        OverallStatus::from(EmulationStatus::Unknown),
        OverallStatus::Unknown
    );
    assert_eq!(
        OverallStatus::from(EmulationStatus::Preliminary),
        OverallStatus::Bad
    );
    assert_eq!(
        OverallStatus::from(EmulationStatus::Imperfect),
        OverallStatus::Ok
    );
    assert_eq!(
        OverallStatus::from(EmulationStatus::Good),
        OverallStatus::Native
    );
}

#[test]
fn video_maps_to_overall() {
    assert_eq!(
        OverallStatus::from(VideoStatus::VfreqSlightlyOff),
        OverallStatus::Ok
    );
    assert_eq!(
        OverallStatus::from(VideoStatus::IntScale),
        OverallStatus::Good
    );
    assert_eq!(
        OverallStatus::from(VideoStatus::Unsupported),
        OverallStatus::Unsupported
    );
}

#[test]
fn controls_maps_to_overall_one_to_one() {
    assert_eq!(
        OverallStatus::from(ControlsStatus::Bad),
        OverallStatus::Bad
    );
    assert_eq!(
        OverallStatus::from(ControlsStatus::Native),
        OverallStatus::Native
    );
}
