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

use cfg_if::cfg_if;
use log::LevelFilter;

use crate::errors::LoggingError;

/// Installs the global logger: the browser console on wasm, stdout elsewhere.
pub fn init(level: LevelFilter) -> Result<(), LoggingError> {
    let Some(level) = level.to_level() else {
        log::set_max_level(LevelFilter::Off);
        return Ok(());
    };

    cfg_if! {
        if #[cfg(target_arch = "wasm32")] {
            console_log::init_with_level(level)?;
        } else {
            simple_logger::init_with_level(level)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn installs_once() {
        assert!(init(LevelFilter::Off).is_ok());
        assert!(init(LevelFilter::Debug).is_ok());
        assert_eq!(log::max_level(), LevelFilter::Debug);

        let err = init(LevelFilter::Info).unwrap_err();
        assert!(err.to_string().starts_with("couldn't initialize logging"));
    }
}
