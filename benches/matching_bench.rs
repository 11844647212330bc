use criterion::{criterion_group, criterion_main, Criterion};
use panelfit::control_defs::{ControlDefRegistry, ControlType};
use panelfit::game::{
    CabinetType, GameButton, GameControl, GameControlConfiguration, GameControlInfo,
    GameControlSet,
};
use panelfit::matcher::{check_controls, control_config_compatibility};
use panelfit::panel::{CPButtonCluster, CPConfiguration, CPControl, CPControlSet, ClusterId, ControlId};
use std::hint::black_box;

fn setup_panel() -> CPConfiguration {
    let types = [
        ControlType::Joy8Way,
        ControlType::Joy8Way,
        ControlType::Joy4Way,
        ControlType::Spinner,
        ControlType::Trackball,
        ControlType::JoyAnalog,
        ControlType::Paddle,
        ControlType::Lightgun,
    ];

    let controls: Vec<CPControl> = types
        .iter()
        .enumerate()
        .map(|(i, &control_type)| CPControl {
            name: format!("cp-{i}"),
            control_type,
            num_buttons: (i % 4) as u32,
            is_on_opposite_screen_side: false,
        })
        .collect();

    let button_clusters = vec![
        CPButtonCluster {
            name: "p1".to_string(),
            num_buttons: 6,
            is_on_opposite_screen_side: false,
        },
        CPButtonCluster {
            name: "p2".to_string(),
            num_buttons: 4,
            is_on_opposite_screen_side: false,
        },
    ];

    let control_sets = vec![
        CPControlSet {
            control_ids: (0..4).map(ControlId).collect(),
            button_cluster: Some(ClusterId(0)),
        },
        CPControlSet {
            control_ids: (4..8).map(ControlId).collect(),
            button_cluster: Some(ClusterId(1)),
        },
    ];

    CPConfiguration {
        controls,
        button_clusters,
        control_sets,
    }
}

fn game_set(controls: Vec<GameControl>, panel_buttons: usize) -> GameControlSet {
    GameControlSet {
        supported_player_nums: vec![1],
        is_required: true,
        is_on_opposite_screen_side: false,
        controls,
        control_panel_buttons: (0..panel_buttons).map(|_| GameButton::default()).collect(),
    }
}

fn game_control(control_type: ControlType, num_buttons: usize) -> GameControl {
    GameControl {
        control_type,
        descriptor: None,
        buttons: (0..num_buttons).map(|_| GameButton::default()).collect(),
    }
}

fn setup_info() -> GameControlInfo {
    let upright = GameControlConfiguration {
        target_cabinet_type: CabinetType::Upright,
        control_sets: vec![
            game_set(
                vec![
                    game_control(ControlType::Joy8Way, 3),
                    game_control(ControlType::Spinner, 0),
                ],
                3,
            ),
            game_set(vec![game_control(ControlType::Joy8Way, 3)], 3),
            game_set(vec![game_control(ControlType::Trackball, 1)], 0),
        ],
        menu_buttons: Vec::new(),
    };

    let mut cocktail = upright.clone();
    cocktail.target_cabinet_type = CabinetType::Cocktail;

    GameControlInfo {
        num_players: 2,
        alternates_turns: false,
        control_configs: vec![upright, cocktail],
    }
}

fn bench_config_allocation(c: &mut Criterion) {
    let defs = ControlDefRegistry::builtin();
    let panel = setup_panel();
    let info = setup_info();

    c.bench_function("config_allocation", |b| {
        b.iter(|| {
            control_config_compatibility(
                black_box(&defs),
                black_box(&panel),
                black_box(&info.control_configs[0]),
                0,
            )
            .unwrap()
        })
    });
}

fn bench_config_selection(c: &mut Criterion) {
    let defs = ControlDefRegistry::builtin();
    let panel = setup_panel();
    let info = setup_info();

    c.bench_function("config_selection", |b| {
        b.iter(|| check_controls(black_box(&defs), black_box(&panel), Some(black_box(&info))).unwrap())
    });
}

criterion_group!(benches, bench_config_allocation, bench_config_selection);
criterion_main!(benches);
