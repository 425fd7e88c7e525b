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

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid nav offset {0:?}: expected a non-negative number of pixels")]
    InvalidOffset(String),
    #[error("invalid log level {0:?}")]
    InvalidLogLevel(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SectionError {
    #[error("no page section with anchor {0:?}")]
    Unknown(String),
}

#[derive(Debug, Error)]
#[error("couldn't initialize logging: {0}")]
pub struct LoggingError(#[from] pub log::SetLoggerError);
