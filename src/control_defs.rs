use crate::error::{PanelFitError, PfResult};
use crate::status::ControlsStatus;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};
use tracing::info;

/// Control categories from the controls.dat database. The wire names are the
/// kebab-case strings controls.dat uses.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, Serialize, Deserialize,
)]
pub enum ControlType {
    #[strum(serialize = "joy-2way-horizontal")]
    #[serde(rename = "joy-2way-horizontal")]
    Joy2WayHorizontal,
    #[strum(serialize = "joy-2way-vertical")]
    #[serde(rename = "joy-2way-vertical")]
    Joy2WayVertical,
    #[strum(serialize = "joy-2way-vertical-trigger")]
    #[serde(rename = "joy-2way-vertical-trigger")]
    Joy2WayVerticalTrigger,
    #[strum(serialize = "joy-4way")]
    #[serde(rename = "joy-4way")]
    Joy4Way,
    #[strum(serialize = "joy-4way-diagonal")]
    #[serde(rename = "joy-4way-diagonal")]
    Joy4WayDiagonal,
    #[strum(serialize = "joy-4way-trigger")]
    #[serde(rename = "joy-4way-trigger")]
    Joy4WayTrigger,
    #[strum(serialize = "joy-8way")]
    #[serde(rename = "joy-8way")]
    Joy8Way,
    #[strum(serialize = "joy-8way-trigger")]
    #[serde(rename = "joy-8way-trigger")]
    Joy8WayTrigger,
    #[strum(serialize = "joy-8way-topfire")]
    #[serde(rename = "joy-8way-topfire")]
    Joy8WayTopfire,
    #[strum(serialize = "joy-8way-rotary-optical")]
    #[serde(rename = "joy-8way-rotary-optical")]
    Joy8WayRotaryOptical,
    #[strum(serialize = "joy-8way-rotary-mechanical")]
    #[serde(rename = "joy-8way-rotary-mechanical")]
    Joy8WayRotaryMechanical,
    #[strum(serialize = "joy-49way")]
    #[serde(rename = "joy-49way")]
    Joy49Way,
    #[strum(serialize = "joy-analog")]
    #[serde(rename = "joy-analog")]
    JoyAnalog,
    #[strum(serialize = "joy-analog-flightstick")]
    #[serde(rename = "joy-analog-flightstick")]
    JoyAnalogFlightstick,
    #[strum(serialize = "joy-analog-yoke")]
    #[serde(rename = "joy-analog-yoke")]
    JoyAnalogYoke,
    #[strum(serialize = "directionalbuttons-2way-horizontal")]
    #[serde(rename = "directionalbuttons-2way-horizontal")]
    DirectionalButtons2WayHorizontal,
    #[strum(serialize = "directionalbuttons-2way-vertical")]
    #[serde(rename = "directionalbuttons-2way-vertical")]
    DirectionalButtons2WayVertical,
    #[strum(serialize = "directionalbuttons-4way")]
    #[serde(rename = "directionalbuttons-4way")]
    DirectionalButtons4Way,
    #[strum(serialize = "throttle")]
    #[serde(rename = "throttle")]
    Throttle,
    #[strum(serialize = "trackball")]
    #[serde(rename = "trackball")]
    Trackball,
    #[strum(serialize = "roller-horizontal")]
    #[serde(rename = "roller-horizontal")]
    RollerHorizontal,
    #[strum(serialize = "roller-vertical")]
    #[serde(rename = "roller-vertical")]
    RollerVertical,
    #[strum(serialize = "spinner")]
    #[serde(rename = "spinner")]
    Spinner,
    #[strum(serialize = "spinner-pushpull")]
    #[serde(rename = "spinner-pushpull")]
    SpinnerPushpull,
    #[strum(serialize = "paddle")]
    #[serde(rename = "paddle")]
    Paddle,
    #[strum(serialize = "steeringwheel-360")]
    #[serde(rename = "steeringwheel-360")]
    SteeringWheel360,
    #[strum(serialize = "steeringwheel-270")]
    #[serde(rename = "steeringwheel-270")]
    SteeringWheel270,
    #[strum(serialize = "pedal-digital")]
    #[serde(rename = "pedal-digital")]
    PedalDigital,
    #[strum(serialize = "pedal-analog")]
    #[serde(rename = "pedal-analog")]
    PedalAnalog,
    #[strum(serialize = "shifter-highlow")]
    #[serde(rename = "shifter-highlow")]
    ShifterHighLow,
    #[strum(serialize = "shifter-updown")]
    #[serde(rename = "shifter-updown")]
    ShifterUpDown,
    #[strum(serialize = "shifter-4gear")]
    #[serde(rename = "shifter-4gear")]
    Shifter4Gear,
    #[strum(serialize = "lightgun")]
    #[serde(rename = "lightgun")]
    Lightgun,
    #[strum(serialize = "lightgun-analog")]
    #[serde(rename = "lightgun-analog")]
    LightgunAnalog,
    #[strum(serialize = "handlebars")]
    #[serde(rename = "handlebars")]
    Handlebars,
    #[strum(serialize = "turntable")]
    #[serde(rename = "turntable")]
    Turntable,
    #[strum(serialize = "baseballpitcher")]
    #[serde(rename = "baseballpitcher")]
    BaseballPitcher,
    #[strum(serialize = "battercontrol")]
    #[serde(rename = "battercontrol")]
    BatterControl,
    #[strum(serialize = "footballkicker")]
    #[serde(rename = "footballkicker")]
    FootballKicker,
    #[strum(serialize = "triviabuttons")]
    #[serde(rename = "triviabuttons")]
    TriviaButtons,
    #[strum(serialize = "mahjongcp")]
    #[serde(rename = "mahjongcp")]
    MahjongCp,
    #[strum(serialize = "misc")]
    #[serde(rename = "misc")]
    Misc,
}

/// How well one control type can stand in for another.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum FallbackLevel {
    Good,
    Ok,
    Bad,
}

impl FallbackLevel {
    pub fn to_status(self) -> ControlsStatus {
        match self {
            FallbackLevel::Good => ControlsStatus::Good,
            FallbackLevel::Ok => ControlsStatus::Ok,
            FallbackLevel::Bad => ControlsStatus::Bad,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlFallback {
    pub control_type: ControlType,
    pub level: FallbackLevel,
}

/// One logical axis or sensor a control produces.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlOutput {
    #[serde(default)]
    pub is_analog: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub neg_default_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pos_default_label: Option<String>,
}

/// Immutable reference data describing one control type: the outputs it
/// produces and the asymmetric substitution table. Absence of a fallback
/// entry means no substitution is possible.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlDef {
    #[serde(rename = "type")]
    pub control_type: ControlType,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub output_map: BTreeMap<String, ControlOutput>,
    #[serde(default)]
    pub fallbacks: Vec<ControlFallback>,
}

impl ControlDef {
    pub fn fallback_for(&self, offered: ControlType) -> Option<FallbackLevel> {
        self.fallbacks
            .iter()
            .find(|fb| fb.control_type == offered)
            .map(|fb| fb.level)
    }
}

/// Lookup table from [`ControlType`] to its [`ControlDef`], loaded once and
/// never mutated. Construction guarantees an entry exists for every type and
/// that every fallback references a known type.
#[derive(Debug, Clone)]
pub struct ControlDefRegistry {
    map: HashMap<ControlType, ControlDef>,
}

impl ControlDefRegistry {
    pub fn from_defs(defs: Vec<ControlDef>) -> PfResult<Self> {
        let mut map = HashMap::with_capacity(defs.len());
        for def in defs {
            for (i, fallback) in def.fallbacks.iter().enumerate() {
                if fallback.control_type == def.control_type
                    || def.fallbacks[..i]
                        .iter()
                        .any(|fb| fb.control_type == fallback.control_type)
                {
                    return Err(PanelFitError::Validation(format!(
                        "control definition '{}' has a redundant fallback entry for '{}'",
                        def.control_type, fallback.control_type
                    )));
                }
            }
            let control_type = def.control_type;
            if map.insert(control_type, def).is_some() {
                return Err(PanelFitError::Validation(format!(
                    "duplicate control definition for '{}'",
                    control_type
                )));
            }
        }

        for control_type in ControlType::iter() {
            if !map.contains_key(&control_type) {
                return Err(PanelFitError::MissingControlDef(control_type));
            }
        }

        Ok(Self { map })
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> PfResult<Self> {
        let content = fs::read_to_string(&path)?;
        let defs: Vec<ControlDef> = serde_json::from_str(&content)?;
        info!(
            "Loaded {} control definitions from {}",
            defs.len(),
            path.as_ref().display()
        );
        Self::from_defs(defs)
    }

    pub fn get(&self, control_type: ControlType) -> PfResult<&ControlDef> {
        self.map
            .get(&control_type)
            .ok_or(PanelFitError::MissingControlDef(control_type))
    }

    pub fn defs(&self) -> impl Iterator<Item = &ControlDef> {
        self.map.values()
    }

    /// The compiled-in controls.dat definition table.
    pub fn builtin() -> Self {
        Self::from_defs(builtin_defs()).expect("builtin control definitions are complete")
    }
}

fn def(
    control_type: ControlType,
    name: &str,
    description: &str,
    outputs: &[(&str, bool)],
    fallbacks: &[(ControlType, FallbackLevel)],
) -> ControlDef {
    ControlDef {
        control_type,
        name: name.to_string(),
        description: description.to_string(),
        output_map: outputs
            .iter()
            .map(|&(output, is_analog)| {
                (
                    output.to_string(),
                    ControlOutput {
                        is_analog,
                        ..ControlOutput::default()
                    },
                )
            })
            .collect(),
        fallbacks: fallbacks
            .iter()
            .map(|&(control_type, level)| ControlFallback {
                control_type,
                level,
            })
            .collect(),
    }
}

#[rustfmt::skip]
fn builtin_defs() -> Vec<ControlDef> {
    use ControlType::*;
    use FallbackLevel::{Bad, Good, Ok as Okay};

    let dir2h: &[(&str, bool)] = &[("left", false), ("right", false)];
    let dir2v: &[(&str, bool)] = &[("up", false), ("down", false)];
    let dir4: &[(&str, bool)] = &[("up", false), ("down", false), ("left", false), ("right", false)];
    let xy: &[(&str, bool)] = &[("x", true), ("y", true)];

    vec![
        def(Joy2WayHorizontal, "2-Way Joystick (Horizontal)",
            "Digital joystick restricted to left/right movement.", dir2h,
            &[(DirectionalButtons2WayHorizontal, Good), (Joy4Way, Good), (Joy8Way, Good),
              (DirectionalButtons4Way, Good), (Joy4WayDiagonal, Okay), (Joy49Way, Okay),
              (JoyAnalog, Okay)]),
        def(Joy2WayVertical, "2-Way Joystick (Vertical)",
            "Digital joystick restricted to up/down movement.", dir2v,
            &[(DirectionalButtons2WayVertical, Good), (Joy4Way, Good), (Joy8Way, Good),
              (DirectionalButtons4Way, Good), (Joy49Way, Okay), (JoyAnalog, Okay)]),
        def(Joy2WayVerticalTrigger, "2-Way Vertical Joystick with Trigger",
            "Up/down joystick with a trigger on the grip.", dir2v,
            &[(Joy2WayVertical, Good), (Joy4WayTrigger, Good), (Joy8WayTrigger, Good),
              (Joy4Way, Okay), (Joy8Way, Okay)]),
        def(Joy4Way, "4-Way Joystick",
            "Digital joystick restricted to the four cardinal directions.", dir4,
            &[(DirectionalButtons4Way, Good), (Joy8Way, Okay), (Joy49Way, Okay),
              (Joy4WayDiagonal, Okay), (JoyAnalog, Okay)]),
        def(Joy4WayDiagonal, "4-Way Diagonal Joystick",
            "Digital joystick restricted to the four diagonal directions.", dir4,
            &[(Joy4Way, Okay), (Joy8Way, Okay), (DirectionalButtons4Way, Okay)]),
        def(Joy4WayTrigger, "4-Way Joystick with Trigger",
            "Four-direction joystick with a trigger on the grip.", dir4,
            &[(Joy8WayTrigger, Good), (Joy4Way, Okay), (Joy8Way, Okay)]),
        def(Joy8Way, "8-Way Joystick",
            "Digital joystick allowing all eight directions.", dir4,
            &[(Joy8WayTrigger, Good), (Joy8WayTopfire, Good), (Joy49Way, Good),
              (JoyAnalog, Okay), (DirectionalButtons4Way, Okay), (Joy4Way, Bad)]),
        def(Joy8WayTrigger, "8-Way Joystick with Trigger",
            "Eight-direction joystick with a trigger on the grip.", dir4,
            &[(Joy8Way, Good), (Joy8WayTopfire, Good), (Joy4WayTrigger, Bad)]),
        def(Joy8WayTopfire, "8-Way Joystick with Top-Fire Button",
            "Eight-direction joystick with a fire button on top of the grip.", dir4,
            &[(Joy8WayTrigger, Good), (Joy8Way, Good)]),
        def(Joy8WayRotaryOptical, "8-Way Rotary Joystick (Optical)",
            "Eight-direction joystick whose grip twists through an optical encoder.", dir4,
            &[(Joy8WayRotaryMechanical, Good)]),
        def(Joy8WayRotaryMechanical, "8-Way Rotary Joystick (Mechanical)",
            "Eight-direction joystick whose grip twists between detented positions.", dir4,
            &[(Joy8WayRotaryOptical, Good)]),
        def(Joy49Way, "49-Way Joystick",
            "Joystick reporting a 7x7 grid of positions.", xy,
            &[(JoyAnalog, Good), (Joy8Way, Okay), (Joy4Way, Bad)]),
        def(JoyAnalog, "Analog Joystick",
            "Joystick reporting continuous X/Y deflection.", xy,
            &[(Joy49Way, Good), (JoyAnalogFlightstick, Good), (Joy8Way, Okay),
              (Joy4Way, Bad)]),
        def(JoyAnalogFlightstick, "Analog Flightstick",
            "Full-grip analog stick, typically with trigger and thumb buttons.", xy,
            &[(JoyAnalog, Okay), (Joy8WayTrigger, Bad), (Joy8Way, Bad)]),
        def(JoyAnalogYoke, "Analog Yoke",
            "Two-handed aircraft-style yoke with analog X/Y.", xy,
            &[(JoyAnalogFlightstick, Okay), (JoyAnalog, Okay), (SteeringWheel270, Bad)]),
        def(DirectionalButtons2WayHorizontal, "Directional Buttons (2-Way Horizontal)",
            "Left and right buttons used for movement.", dir2h,
            &[(Joy2WayHorizontal, Good), (Joy4Way, Good), (Joy8Way, Good),
              (DirectionalButtons4Way, Good)]),
        def(DirectionalButtons2WayVertical, "Directional Buttons (2-Way Vertical)",
            "Up and down buttons used for movement.", dir2v,
            &[(Joy2WayVertical, Good), (Joy4Way, Good), (Joy8Way, Good),
              (DirectionalButtons4Way, Good)]),
        def(DirectionalButtons4Way, "Directional Buttons (4-Way)",
            "Four buttons arranged as a directional pad.", dir4,
            &[(Joy4Way, Good), (Joy8Way, Good)]),
        def(Throttle, "Throttle",
            "Lever reporting a continuous forward/back position.", &[("position", true)],
            &[(PedalAnalog, Okay), (JoyAnalog, Okay), (ShifterUpDown, Bad)]),
        def(Trackball, "Trackball",
            "Free-spinning ball reporting relative X/Y motion.", xy,
            &[(JoyAnalog, Okay), (Joy8Way, Bad), (Spinner, Bad)]),
        def(RollerHorizontal, "Roller (Horizontal)",
            "Single-axis roller mounted for left/right motion.", &[("x", true)],
            &[(Trackball, Good), (Spinner, Good), (JoyAnalog, Bad)]),
        def(RollerVertical, "Roller (Vertical)",
            "Single-axis roller mounted for up/down motion.", &[("y", true)],
            &[(Trackball, Good), (Spinner, Okay), (JoyAnalog, Bad)]),
        def(Spinner, "Spinner",
            "Knob spinning freely around one axis, reporting relative rotation.", &[("rotate", true)],
            &[(RollerHorizontal, Good), (Paddle, Good), (SteeringWheel360, Okay),
              (Trackball, Okay), (Turntable, Okay)]),
        def(SpinnerPushpull, "Push/Pull Spinner",
            "Spinner whose shaft also slides in and out.", &[("rotate", true), ("push", true)],
            &[(Spinner, Okay)]),
        def(Paddle, "Paddle",
            "Knob with end stops reporting an absolute rotary position.", &[("position", true)],
            &[(Spinner, Good), (SteeringWheel270, Okay), (JoyAnalog, Okay),
              (Trackball, Bad)]),
        def(SteeringWheel360, "Steering Wheel (360)",
            "Steering wheel spinning freely through full revolutions.", &[("rotate", true)],
            &[(Spinner, Okay), (SteeringWheel270, Bad), (Trackball, Bad)]),
        def(SteeringWheel270, "Steering Wheel (270)",
            "Steering wheel with end stops covering roughly 270 degrees.", &[("position", true)],
            &[(Paddle, Okay), (JoyAnalog, Okay), (SteeringWheel360, Bad)]),
        def(PedalDigital, "Pedal (Digital)",
            "Foot pedal acting as an on/off switch.", &[("pedal", false)],
            &[(PedalAnalog, Good)]),
        def(PedalAnalog, "Pedal (Analog)",
            "Foot pedal reporting continuous travel.", &[("pedal", true)],
            &[(Throttle, Okay), (PedalDigital, Bad)]),
        def(ShifterHighLow, "Shifter (High/Low)",
            "Two-position gear shifter.", &[("gear", false)],
            &[(ShifterUpDown, Good), (Joy2WayVertical, Okay)]),
        def(ShifterUpDown, "Shifter (Up/Down)",
            "Sequential gear shifter.", &[("gear", false)],
            &[(ShifterHighLow, Good), (Joy2WayVertical, Okay)]),
        def(Shifter4Gear, "Shifter (4-Gear)",
            "Gated four-position gear shifter.", &[("gear", false)],
            &[(ShifterUpDown, Bad), (Joy4Way, Bad)]),
        def(Lightgun, "Lightgun",
            "Positional gun registering hits on the screen.", xy,
            &[(LightgunAnalog, Good)]),
        def(LightgunAnalog, "Lightgun (Analog)",
            "Gun-shaped controller reporting absolute analog X/Y aim.", xy,
            &[(Lightgun, Good), (Trackball, Bad), (JoyAnalog, Bad)]),
        def(Handlebars, "Handlebars",
            "Motorcycle-style handlebars reporting steering and twist.", &[("steer", true), ("twist", true)],
            &[(JoyAnalog, Okay), (SteeringWheel270, Okay), (Joy8Way, Bad)]),
        def(Turntable, "Turntable",
            "Record-player style platter reporting relative rotation.", &[("rotate", true)],
            &[(Spinner, Okay), (Trackball, Bad)]),
        def(BaseballPitcher, "Baseball Pitcher Control",
            "Dedicated pitching mechanism from baseball cabinets.", &[("pitch", true)], &[]),
        def(BatterControl, "Batter Control",
            "Dedicated batting mechanism from baseball cabinets.", &[("swing", true)], &[]),
        def(FootballKicker, "Football Kicker",
            "Dedicated kicking mechanism from football cabinets.", &[("kick", true)],
            &[(Trackball, Bad)]),
        def(TriviaButtons, "Trivia Buttons",
            "Answer-button bank from quiz cabinets.", &[], &[]),
        def(MahjongCp, "Mahjong Control Panel",
            "Dedicated tile-selection button matrix.", &[], &[]),
        def(Misc, "Miscellaneous",
            "Control hardware with no standard category.", &[], &[]),
    ]
}
