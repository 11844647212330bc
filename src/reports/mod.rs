use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, ContentArrangement, Table};
use panelfit::check::GameCompatibility;
use panelfit::control_defs::ControlDefRegistry;
use panelfit::game::GameDb;
use panelfit::panel::CPConfiguration;
use panelfit::status::{StatusLattice, VideoStatus};

fn status_cell<S: StatusLattice + std::fmt::Display>(status: S) -> Cell {
    use comfy_table::Color;

    let color = match status.rank() {
        -1 => Color::DarkGrey,
        0 => Color::Red,
        1 => Color::DarkYellow,
        2 => Color::Yellow,
        3 => Color::DarkGreen,
        _ => Color::Green,
    };
    Cell::new(status.to_string()).fg(color)
}

fn header(titles: &[&str]) -> Vec<Cell> {
    titles
        .iter()
        .map(|t| Cell::new(t).add_attribute(Attribute::Bold))
        .collect()
}

pub fn print_check_report(comps: &[GameCompatibility]) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header(&[
            "Title", "Emulation", "Video", "Controls", "Overall", "Known",
        ]));

    for comp in comps {
        let best_video = VideoStatus::max_of(comp.video_comps.iter().map(|v| v.status));
        table.add_row(vec![
            Cell::new(comp.game_name.as_deref().unwrap_or(&comp.name_input)),
            status_cell(comp.emu_comp.status),
            status_cell(best_video),
            status_cell(comp.controls_comp.status),
            status_cell(comp.overall_status),
            status_cell(comp.known_overall_status),
        ]);
    }

    println!("{table}");
}

/// The best configuration's control assignments for one title.
pub fn print_title_detail(comp: &GameCompatibility, db: &GameDb, panel: &CPConfiguration) {
    let Some(game) = comp.game_name.as_deref().and_then(|name| db.get(name)) else {
        println!("\n{}: unknown title", comp.name_input);
        return;
    };
    let Some(info) = db.control_info_for(game) else {
        println!("\n{}: no control data", game.name);
        return;
    };
    let Some(best) = comp.controls_comp.best() else {
        println!("\n{}: no control configurations", game.name);
        return;
    };

    let game_config = &info.control_configs[best.game_control_config];

    println!(
        "\n{} — {} cabinet configuration",
        game.name, game_config.target_cabinet_type
    );

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header(&["Players", "Requirement", "Assigned", "Status"]));

    for set_comp in &best.control_set_comps {
        let game_set = &game_config.control_sets[set_comp.game_control_set];
        let players = game_set
            .supported_player_nums
            .iter()
            .map(|p| format!("P{p}"))
            .collect::<Vec<_>>()
            .join("/");

        for control_comp in &set_comp.control_comps {
            let game_control = &game_set.controls[control_comp.game_control];
            let assigned = control_comp
                .cp_control
                .map(|id| panel.control(id).name.clone())
                .unwrap_or_else(|| "—".to_string());

            table.add_row(vec![
                Cell::new(&players),
                Cell::new(game_control.control_type.to_string()),
                Cell::new(assigned),
                status_cell(control_comp.status),
            ]);
        }

        if !game_set.control_panel_buttons.is_empty() {
            let assigned = set_comp
                .buttons_comp
                .cp_button_cluster
                .map(|id| panel.cluster(id).name.clone())
                .unwrap_or_else(|| "—".to_string());

            table.add_row(vec![
                Cell::new(&players),
                Cell::new(format!(
                    "{} panel button(s)",
                    game_set.control_panel_buttons.len()
                )),
                Cell::new(assigned),
                status_cell(set_comp.buttons_comp.status),
            ]);
        }
    }

    println!("{table}");
}

pub fn print_panel_report(panel: &CPConfiguration) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(header(&["Control", "Type", "Buttons", "Screen side"]));

    for control in &panel.controls {
        table.add_row(vec![
            Cell::new(&control.name),
            Cell::new(control.control_type.to_string()),
            Cell::new(control.num_buttons.to_string()),
            Cell::new(if control.is_on_opposite_screen_side {
                "opposite"
            } else {
                "normal"
            }),
        ]);
    }

    for cluster in &panel.button_clusters {
        table.add_row(vec![
            Cell::new(&cluster.name),
            Cell::new("button cluster"),
            Cell::new(cluster.num_buttons.to_string()),
            Cell::new(if cluster.is_on_opposite_screen_side {
                "opposite"
            } else {
                "normal"
            }),
        ]);
    }

    println!("{table}");

    println!(
        "{} control set(s), {} control(s), {} button cluster(s)",
        panel.control_sets.len(),
        panel.controls.len(),
        panel.button_clusters.len()
    );
}

/// What each panel control can stand in for, straight from the definitions.
pub fn print_fallback_report(defs: &ControlDefRegistry, panel: &CPConfiguration) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header(&["Required type", "Substitute", "Level"]));

    for def in defs.defs() {
        let usable = def.fallbacks.iter().any(|fb| {
            panel
                .controls
                .iter()
                .any(|c| c.control_type == fb.control_type)
        });
        if !usable {
            continue;
        }

        for fallback in &def.fallbacks {
            if panel
                .controls
                .iter()
                .any(|c| c.control_type == fallback.control_type)
            {
                table.add_row(vec![
                    Cell::new(def.control_type.to_string()),
                    Cell::new(fallback.control_type.to_string()),
                    Cell::new(fallback.level.to_string()),
                ]);
            }
        }
    }

    println!("{table}");
}
