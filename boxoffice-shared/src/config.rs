use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub venue: VenueConfig,
}

/// Tunables for a single venue. The interactive front end constructs one of
/// these (or loads it via [`Config::load`]) and hands it to the engine.
#[derive(Debug, Deserialize, Clone)]
pub struct VenueConfig {
    #[serde(default = "default_capacity")]
    pub capacity: u32,
    #[serde(default = "default_hold_timeout")]
    pub hold_timeout_seconds: i64,
    #[serde(default = "default_hold_id_digits")]
    pub hold_id_digits: u32,
    #[serde(default = "default_code_length")]
    pub confirmation_code_length: usize,
    #[serde(default)]
    pub messages: Messages,
}

/// User-facing strings rendered by the presentation layer. The engine itself
/// reports failures as typed errors; these exist so the front end can show
/// consistent wording without hardcoding it.
#[derive(Debug, Deserialize, Clone)]
pub struct Messages {
    #[serde(default = "default_reservation_success")]
    pub reservation_success: String,
    #[serde(default = "default_not_enough_seats")]
    pub not_enough_seats: String,
    #[serde(default = "default_hold_not_found")]
    pub hold_not_found: String,
    #[serde(default = "default_hold_expired")]
    pub hold_expired: String,
}

fn default_capacity() -> u32 {
    50
}

fn default_hold_timeout() -> i64 {
    45
}

fn default_hold_id_digits() -> u32 {
    6
}

fn default_code_length() -> usize {
    8
}

fn default_reservation_success() -> String {
    "Reservation completed successfully!!".to_string()
}

fn default_not_enough_seats() -> String {
    "Sorry, we don't have as many seats available as you have requested".to_string()
}

fn default_hold_not_found() -> String {
    "Couldn't find a hold with the hold ID provided".to_string()
}

fn default_hold_expired() -> String {
    "Sorry, your hold has expired. Please initiate a new reservation.".to_string()
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            reservation_success: default_reservation_success(),
            not_enough_seats: default_not_enough_seats(),
            hold_not_found: default_hold_not_found(),
            hold_expired: default_hold_expired(),
        }
    }
}

impl Default for VenueConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
            hold_timeout_seconds: default_hold_timeout(),
            hold_id_digits: default_hold_id_digits(),
            confirmation_code_length: default_code_length(),
            messages: Messages::default(),
        }
    }
}

impl VenueConfig {
    /// Rejects values the engine cannot honor. Hold IDs are u32, so the
    /// digit length is capped at 9.
    pub fn validate(&self) -> Result<(), config::ConfigError> {
        if self.capacity == 0 {
            return Err(config::ConfigError::Message(
                "venue capacity must be greater than zero".into(),
            ));
        }
        if self.hold_id_digits == 0 || self.hold_id_digits > 9 {
            return Err(config::ConfigError::Message(format!(
                "hold_id_digits must be between 1 and 9, got {}",
                self.hold_id_digits
            )));
        }
        if self.confirmation_code_length == 0 {
            return Err(config::ConfigError::Message(
                "confirmation_code_length must be greater than zero".into(),
            ));
        }
        if self.hold_timeout_seconds < 0 {
            return Err(config::ConfigError::Message(
                "hold_timeout_seconds must not be negative".into(),
            ));
        }
        Ok(())
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            // Start off by merging in the "default" configuration file
            .add_source(config::File::with_name("config/default").required(false))
            // Add in the current environment file, optional
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local overrides, not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // Eg. `BOXOFFICE__VENUE__CAPACITY=200` sets `venue.capacity`
            .add_source(config::Environment::with_prefix("BOXOFFICE").separator("__"))
            .build()?;

        let cfg: Config = s.try_deserialize()?;
        cfg.venue.validate()?;
        Ok(cfg)
    }
}
