use std::env;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

use crate::CellSize;

pub type Rgb = (u8, u8, u8);

const DEFAULT_CELL_SIZE: CellSize = CellSize::new(3).unwrap();

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Screen of {width}x{height} can't hold a single {cell_size}px cell")]
    EmptyGrid {
        width: u32,
        height: u32,
        cell_size: CellSize,
    },

    #[error("Frame rate must be positive")]
    ZeroFps,

    #[error("Failed to convert {var}=\"{value}\"")]
    InvalidVar { var: &'static str, value: String },
}

/// Everything needed to run a simulation. Built once, then only read.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Width of the screen in pixels
    pub screen_width: u32,

    /// Height of the screen in pixels
    pub screen_height: u32,

    /// Side length of a cell in pixels
    pub cell_size: CellSize,

    /// Percent chance for a cell to start alive. Values outside `[0, 100]` are kept as-is: anything
    /// `<= 0` gives an empty world and anything `> 100` a full one. Exactly 100 can still leave a
    /// few cells dead, see [`crate::init::initialize`].
    pub live_chance: i32,

    pub fps: u32,

    /// Seeds the initial population. `None` draws from entropy.
    pub seed: Option<u64>,

    pub background: Rgb,
    pub foreground: Rgb,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            screen_width: 600,
            screen_height: 600,
            cell_size: DEFAULT_CELL_SIZE,
            live_chance: 20,
            fps: 10,
            seed: None,
            background: (128, 0, 128),
            foreground: (255, 255, 0),
        }
    }
}

impl Config {
    /// Check that the config describes a non-empty grid that can be stepped through.
    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.grid_width() == 0 || self.grid_height() == 0 {
            return Err(ConfigError::EmptyGrid {
                width: self.screen_width,
                height: self.screen_height,
                cell_size: self.cell_size,
            });
        }

        if self.fps == 0 {
            return Err(ConfigError::ZeroFps);
        }

        Ok(self)
    }

    /// Overlay `LIFE_*` environment variables on the defaults. A cell size of 0 doesn't parse and is
    /// reported as [`ConfigError::InvalidVar`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Like `from_env`, but reads variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let mut config = Self::default();

        read_var(&lookup, "LIFE_SCREEN_WIDTH", &mut config.screen_width)?;
        read_var(&lookup, "LIFE_SCREEN_HEIGHT", &mut config.screen_height)?;
        read_var(&lookup, "LIFE_CELL_SIZE", &mut config.cell_size)?;
        read_var(&lookup, "LIFE_FPS", &mut config.fps)?;
        read_var(&lookup, "LIFE_CHANCE", &mut config.live_chance)?;

        let mut seed = 0u64;
        if read_var(&lookup, "LIFE_SEED", &mut seed)? {
            config.seed = Some(seed);
        }

        config.validate()
    }

    /// Width of the grid in cells
    pub fn grid_width(&self) -> u32 {
        self.screen_width / self.cell_size
    }

    /// Height of the grid in cells
    pub fn grid_height(&self) -> u32 {
        self.screen_height / self.cell_size
    }

    pub fn frame_time(&self) -> Duration {
        Duration::from_secs(1) / self.fps.max(1)
    }
}

/// Parse variable `var` into `slot` if it is set. Returns whether `slot` was written.
fn read_var<T, F>(lookup: &F, var: &'static str, slot: &mut T) -> Result<bool, ConfigError>
where
    T: FromStr,
    F: Fn(&'static str) -> Option<String>,
{
    let Some(value) = lookup(var) else {
        return Ok(false);
    };

    let Ok(res) = value.trim().parse::<T>() else {
        return Err(ConfigError::InvalidVar { var, value });
    };

    *slot = res;

    Ok(true)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_in(vars: &[(&'static str, &str)]) -> impl Fn(&'static str) -> Option<String> {
        let vars: HashMap<_, _> = vars.iter().map(|&(k, v)| (k, v.to_string())).collect();

        move |var| vars.get(var).cloned()
    }

    #[test]
    fn test_default_is_valid() {
        let config = Config::default().validate().unwrap();

        assert_eq!(config.grid_width(), 200);
        assert_eq!(config.grid_height(), 200);
        assert_eq!(config.frame_time(), Duration::from_millis(100));
    }

    #[test]
    fn test_screen_smaller_than_cell() {
        let config = Config {
            screen_width: 2,
            cell_size: CellSize::new(3).unwrap(),
            ..Config::default()
        };

        assert!(matches!(
            config.validate(),
            Err(ConfigError::EmptyGrid { width: 2, .. })
        ));
    }

    #[test]
    fn test_zero_fps() {
        let config = Config {
            fps: 0,
            ..Config::default()
        };

        assert_eq!(config.validate(), Err(ConfigError::ZeroFps));
    }

    #[test]
    fn test_chance_is_not_validated() {
        for live_chance in [-5, 0, 100, 250] {
            let config = Config {
                live_chance,
                ..Config::default()
            };

            assert!(config.validate().is_ok());
        }
    }

    #[test]
    fn test_lookup_overrides() {
        let config = Config::from_lookup(lookup_in(&[
            ("LIFE_SCREEN_WIDTH", "80"),
            ("LIFE_SCREEN_HEIGHT", " 40 "),
            ("LIFE_CELL_SIZE", "2"),
            ("LIFE_CHANCE", "-1"),
            ("LIFE_SEED", "42"),
        ]))
        .unwrap();

        assert_eq!(config.grid_width(), 40);
        assert_eq!(config.grid_height(), 20);
        assert_eq!(config.live_chance, -1);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.fps, 10);
    }

    #[test]
    fn test_lookup_rejects_garbage() {
        let err = Config::from_lookup(lookup_in(&[("LIFE_FPS", "fast")])).unwrap_err();

        assert_eq!(
            err,
            ConfigError::InvalidVar {
                var: "LIFE_FPS",
                value: "fast".to_string(),
            }
        );
    }

    #[test]
    fn test_lookup_rejects_zero_cell_size() {
        let err = Config::from_lookup(lookup_in(&[("LIFE_CELL_SIZE", "0")])).unwrap_err();

        assert_eq!(
            err,
            ConfigError::InvalidVar {
                var: "LIFE_CELL_SIZE",
                value: "0".to_string(),
            }
        );
    }

    #[test]
    fn test_lookup_validates() {
        let err = Config::from_lookup(lookup_in(&[("LIFE_SCREEN_HEIGHT", "1")])).unwrap_err();

        assert!(matches!(err, ConfigError::EmptyGrid { height: 1, .. }));
    }
}
