use panelfit::control_defs::ControlType;
use panelfit::matcher::{check_controls, control_config_compatibility};

mod common;
use common::{
    cocktail, control_info, defs, game_config, game_control, game_set, optional, PanelBuilder,
};

fn busy_panel() -> panelfit::panel::CPConfiguration {
    PanelBuilder::new()
        .control("p1-joy", ControlType::Joy8Way, 3)
        .control("p2-joy", ControlType::Joy8Way, 3)
        .control("p1-spin", ControlType::Spinner, 0)
        .control("track", ControlType::Trackball, 2)
        .cluster("p1-buttons", 4)
        .cluster("p2-buttons", 2)
        .set(&["p1-joy", "p1-spin", "track"], Some("p1-buttons"))
        .set(&["p2-joy", "track"], Some("p2-buttons"))
        .build()
}

fn busy_info() -> panelfit::game::GameControlInfo {
    control_info(vec![
        game_config(vec![
            game_set(vec![game_control(ControlType::Joy8Way, 2)], 2),
            game_set(vec![game_control(ControlType::Joy8Way, 2)], 2),
            optional(game_set(vec![game_control(ControlType::Spinner, 1)], 0)),
        ]),
        cocktail(game_config(vec![
            game_set(
                vec![
                    game_control(ControlType::Trackball, 1),
                    game_control(ControlType::Joy4Way, 0),
                ],
                3,
            ),
            game_set(vec![game_control(ControlType::Paddle, 0)], 1),
        ])),
    ])
}

#[test]
fn repeated_config_allocation_is_identical() {
    let defs = defs();
    let panel = busy_panel();
    let info = busy_info();

    let first =
        control_config_compatibility(&defs, &panel, &info.control_configs[0], 0).unwrap();
    let second =
        control_config_compatibility(&defs, &panel, &info.control_configs[0], 0).unwrap();

    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn repeated_selection_is_identical() {
    let defs = defs();
    let panel = busy_panel();
    let info = busy_info();

    let first = check_controls(&defs, &panel, Some(&info)).unwrap();
    let second = check_controls(&defs, &panel, Some(&info)).unwrap();

    assert_eq!(first.status, second.status);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}
