use std::error::Error;
use std::fs;
use std::path::Path;

use uft_core::Mode;
use uft_validate::Policy;

pub mod derive;
pub mod schemes;
pub mod validate;

pub fn load_policy(path: Option<&Path>) -> Result<Policy, Box<dyn Error>> {
    match path {
        Some(path) => {
            let bytes = fs::read(path)?;
            Ok(serde_yaml::from_slice(&bytes)?)
        }
        None => Ok(Policy::default()),
    }
}

pub fn mode_from_flag(approximate: bool) -> Mode {
    if approximate {
        Mode::Approximate
    } else {
        Mode::Strict
    }
}
