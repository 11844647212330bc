pub mod buttons;
pub mod config;
pub mod control;
pub mod control_set;
pub mod select;
pub mod types;

pub use self::buttons::buttons_compatibility;
pub use self::config::control_config_compatibility;
pub use self::control::control_compatibility;
pub use self::control_set::control_set_compatibility;
pub use self::select::check_controls;
pub use self::types::{
    AvailablePools, ButtonsCompatibility, ControlAllocationRound, ControlCompatibility,
    ControlConfigCompatibility, ControlSetCompatibility, ControlsCompatibility,
    SetAllocationRound,
};
