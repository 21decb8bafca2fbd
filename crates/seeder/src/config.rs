use persistence::db::DatabaseConfig;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub database: DatabaseConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub generation: GenerationConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

/// Knobs of the generation run. Every probability lives here rather than
/// inline in a generator, so tests can pin them alongside a fixed `seed`.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerationConfig {
    /// Number of buildings to create.
    #[serde(default = "default_buildings")]
    pub buildings: usize,

    /// Number of owner accounts to create.
    #[serde(default = "default_owners")]
    pub owners: usize,

    /// Floor count sampled uniformly from this range, per building.
    #[serde(default = "default_floors_min")]
    pub floors_min: i32,

    #[serde(default = "default_floors_max")]
    pub floors_max: i32,

    /// Units on every floor.
    #[serde(default = "default_units_per_floor")]
    pub units_per_floor: i32,

    /// Room area sampled uniformly from this range, in square metres.
    #[serde(default = "default_area_min")]
    pub area_min: f64,

    #[serde(default = "default_area_max")]
    pub area_max: f64,

    /// Parking spaces per generated room.
    #[serde(default = "default_parking_ratio")]
    pub parking_ratio: f64,

    /// Staff headcount floor and the rooms-per-staff-member divisor.
    #[serde(default = "default_staff_min")]
    pub staff_min: usize,

    #[serde(default = "default_rooms_per_staff")]
    pub rooms_per_staff: usize,

    /// Number of service records to create.
    #[serde(default = "default_service_records")]
    pub service_records: usize,

    /// How many recent billing months to cover.
    #[serde(default = "default_months")]
    pub months: usize,

    /// Probability that a room has an owner attached.
    #[serde(default = "default_room_owner_rate")]
    pub room_owner_rate: f64,

    /// Probability that a parking space has an owner attached.
    #[serde(default = "default_parking_owner_rate")]
    pub parking_owner_rate: f64,

    /// Probability that a service record targets a building rather than a
    /// room.
    #[serde(default = "default_building_target_rate")]
    pub building_target_rate: f64,

    /// Weights for service-record status {pending, in-progress, done}.
    #[serde(default = "default_service_status_weights")]
    pub service_status_weights: [f64; 3],

    /// Weights for transaction status {unpaid, paid, overdue}.
    #[serde(default = "default_payment_status_weights")]
    pub payment_status_weights: [f64; 3],

    /// Fixed RNG seed for reproducible runs; entropy-seeded when unset.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(config::Environment::with_prefix("PMS").separator("__"))
            .build()?;

        let cfg: Self = config.try_deserialize()?;
        cfg.generation
            .validate()
            .map_err(config::ConfigError::Message)?;
        Ok(cfg)
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            buildings: default_buildings(),
            owners: default_owners(),
            floors_min: default_floors_min(),
            floors_max: default_floors_max(),
            units_per_floor: default_units_per_floor(),
            area_min: default_area_min(),
            area_max: default_area_max(),
            parking_ratio: default_parking_ratio(),
            staff_min: default_staff_min(),
            rooms_per_staff: default_rooms_per_staff(),
            service_records: default_service_records(),
            months: default_months(),
            room_owner_rate: default_room_owner_rate(),
            parking_owner_rate: default_parking_owner_rate(),
            building_target_rate: default_building_target_rate(),
            service_status_weights: default_service_status_weights(),
            payment_status_weights: default_payment_status_weights(),
            seed: None,
        }
    }
}

impl GenerationConfig {
    /// Rejects configurations the samplers cannot honor.
    pub fn validate(&self) -> Result<(), String> {
        if self.floors_min < 1 || self.floors_max < self.floors_min {
            return Err(format!(
                "invalid floor range [{}, {}]",
                self.floors_min, self.floors_max
            ));
        }
        if self.units_per_floor < 1 {
            return Err("units_per_floor must be at least 1".to_string());
        }
        if !(self.area_min > 0.0 && self.area_max >= self.area_min) {
            return Err(format!(
                "invalid area range [{}, {}]",
                self.area_min, self.area_max
            ));
        }
        if !(0.0..).contains(&self.parking_ratio) {
            return Err("parking_ratio must be non-negative".to_string());
        }
        if self.rooms_per_staff < 1 {
            return Err("rooms_per_staff must be at least 1".to_string());
        }
        for (name, rate) in [
            ("room_owner_rate", self.room_owner_rate),
            ("parking_owner_rate", self.parking_owner_rate),
            ("building_target_rate", self.building_target_rate),
        ] {
            if !(0.0..=1.0).contains(&rate) {
                return Err(format!("{} must be within [0, 1], got {}", name, rate));
            }
        }
        for (name, weights) in [
            ("service_status_weights", &self.service_status_weights),
            ("payment_status_weights", &self.payment_status_weights),
        ] {
            if weights.iter().any(|w| *w < 0.0) || weights.iter().sum::<f64>() <= 0.0 {
                return Err(format!("{} must be non-negative and sum above 0", name));
            }
        }
        Ok(())
    }
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}
fn default_log_format() -> String {
    "pretty".to_string()
}
fn default_buildings() -> usize {
    6
}
fn default_owners() -> usize {
    200
}
fn default_floors_min() -> i32 {
    18
}
fn default_floors_max() -> i32 {
    33
}
fn default_units_per_floor() -> i32 {
    8
}
fn default_area_min() -> f64 {
    70.0
}
fn default_area_max() -> f64 {
    150.0
}
fn default_parking_ratio() -> f64 {
    0.6
}
fn default_staff_min() -> usize {
    15
}
fn default_rooms_per_staff() -> usize {
    60
}
fn default_service_records() -> usize {
    500
}
fn default_months() -> usize {
    6
}
fn default_room_owner_rate() -> f64 {
    0.75
}
fn default_parking_owner_rate() -> f64 {
    0.60
}
fn default_building_target_rate() -> f64 {
    0.30
}
fn default_service_status_weights() -> [f64; 3] {
    [0.1, 0.2, 0.7]
}
fn default_payment_status_weights() -> [f64; 3] {
    [0.1, 0.8, 0.1]
}
