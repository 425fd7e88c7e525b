/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

//! Build-time settings.
//!
//! These are read at compile time, rebuild after changing them.

use log::LevelFilter;

use crate::errors::ConfigError;

pub const DEFAULT_NAV_OFFSET_PX: f64 = 100.0;
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

const LOG_LEVEL_ENV: Option<&str> = option_env!("FOODMUNCH_LOG_LEVEL");
const NAV_OFFSET_ENV: Option<&str> = option_env!("FOODMUNCH_NAV_OFFSET_PX");

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SiteConfig {
    pub log_level: LevelFilter,
    /// Distance below the viewport top that decides which section is active.
    pub nav_offset_px: f64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL,
            nav_offset_px: DEFAULT_NAV_OFFSET_PX,
        }
    }
}

impl SiteConfig {
    /// Returns the settings together with any values that were rejected.
    pub fn from_build_env() -> (Self, Vec<ConfigError>) {
        Self::from_values(LOG_LEVEL_ENV, NAV_OFFSET_ENV)
    }

    /// Settings that fail to parse fall back to their defaults.
    pub fn from_values(
        log_level: Option<&str>,
        nav_offset: Option<&str>,
    ) -> (Self, Vec<ConfigError>) {
        let mut config = Self::default();
        let mut rejected = Vec::new();

        match log_level.map(parse_log_level).transpose() {
            Ok(Some(level)) => config.log_level = level,
            Ok(None) => {}
            Err(e) => rejected.push(e),
        }
        match nav_offset.map(parse_nav_offset).transpose() {
            Ok(Some(px)) => config.nav_offset_px = px,
            Ok(None) => {}
            Err(e) => rejected.push(e),
        }
        (config, rejected)
    }
}

pub fn parse_log_level(s: &str) -> Result<LevelFilter, ConfigError> {
    s.trim()
        .parse::<LevelFilter>()
        .map_err(|_| ConfigError::InvalidLogLevel(s.to_string()))
}

pub fn parse_nav_offset(s: &str) -> Result<f64, ConfigError> {
    let trimmed = s.trim();
    let trimmed = trimmed.strip_suffix("px").unwrap_or(trimmed);
    match trimmed.parse::<f64>() {
        Ok(px) if px.is_finite() && px >= 0.0 => Ok(px),
        _ => Err(ConfigError::InvalidOffset(s.to_string())),
    }
}
