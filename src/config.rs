/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use std::fs;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Deserialize, Clone)]
pub struct Config {
    pub hardware: HardwareConfig,
    pub elevator: ElevatorConfig,
    pub motor: MotorConfig,
}

#[derive(Deserialize, Clone)]
pub struct HardwareConfig {
    pub n_floors: u8,
    pub tick_period_ms: u64,
}

#[derive(Deserialize, Clone)]
pub struct ElevatorConfig {
    pub n_floors: u8,
    pub capacity: u8,
    pub door_dwell_ms: u64,
    pub settle_ms: u64,
    pub sensor_poll_ms: u64,
    pub idle_poll_ms: u64,
}

#[derive(Deserialize, Clone)]
pub struct MotorConfig {
    pub travel_pulse_ms: u64,
    pub brake_pulse_ms: u64,
}

/***************************************/
/*             Public API              */
/***************************************/
pub fn load_config(path: &str) -> Result<Config, String> {
    let config_str =
        fs::read_to_string(path).map_err(|e| format!("Failed to read {}: {}", path, e))?;
    toml::from_str(&config_str).map_err(|e| format!("Failed to parse {}: {}", path, e))
}
