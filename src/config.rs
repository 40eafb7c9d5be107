use crate::consts;
use crate::game::Grid;
use crate::view::cell_dimensions;
use log::LevelFilter;
use serde::Deserialize;
use std::num::{NonZeroU16, NonZeroU64};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Deserialize, Debug, Default, Eq, PartialEq)]
pub(crate) struct Config {
    /// Size of the playing field
    #[serde(default)]
    pub(crate) grid: GridConfig,

    /// Gameplay settings
    #[serde(default)]
    pub(crate) game: GameConfig,

    /// Where & how much to log
    #[serde(default)]
    pub(crate) log: LogConfig,
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("gridsnake").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist and
    /// `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read, if the file's contents
    /// could not be deserialized, or if the configured grid is too small.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        let config = toml::from_str::<Config>(&content)?;
        config.grid.validate()?;
        Ok(config)
    }
}

#[derive(Clone, Copy, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct GridConfig {
    width: u16,
    height: u16,
    /// Width of a cell in terminal columns
    cell_size: NonZeroU16,
}

impl GridConfig {
    pub(crate) fn grid(self) -> Grid {
        Grid {
            width: self.width,
            height: self.height,
            cell_size: self.cell_size.get(),
        }
    }

    /// Width of the grid in terminal columns, or `None` if it exceeds
    /// `u16::MAX`
    fn drawn_width(self) -> Option<u16> {
        let (cell_width, _) = cell_dimensions(self.grid());
        self.width.checked_mul(cell_width)
    }

    fn drawn_height(self) -> Option<u16> {
        let (_, cell_height) = cell_dimensions(self.grid());
        self.height.checked_mul(cell_height)
    }

    fn validate(self) -> Result<(), ConfigError> {
        if self.width < consts::MIN_GRID_SIDE || self.height < consts::MIN_GRID_SIDE {
            Err(ConfigError::GridTooSmall {
                width: self.width,
                height: self.height,
            })
        } else if self.drawn_width().is_none() || self.drawn_height().is_none() {
            Err(ConfigError::GridTooLarge {
                width: self.width,
                height: self.height,
                cell_size: self.cell_size.get(),
            })
        } else {
            Ok(())
        }
    }
}

impl Default for GridConfig {
    fn default() -> GridConfig {
        let grid = Grid::default();
        GridConfig {
            width: grid.width,
            height: grid.height,
            cell_size: NonZeroU16::new(grid.cell_size).unwrap_or(NonZeroU16::MIN),
        }
    }
}

#[derive(Clone, Copy, Deserialize, Debug, Default, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct GameConfig {
    /// Milliseconds between ticks
    tick_ms: Option<NonZeroU64>,

    /// Fixed seed for food placement
    pub(crate) seed: Option<u64>,
}

impl GameConfig {
    pub(crate) fn tick_period(self) -> Duration {
        self.tick_ms
            .map_or(consts::TICK_PERIOD, |ms| Duration::from_millis(ms.get()))
    }
}

#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(try_from = "RawLogConfig")]
pub(crate) struct LogConfig {
    /// File to write log messages to; nothing is logged if unset
    pub(crate) file: Option<PathBuf>,

    pub(crate) level: LevelFilter,
}

impl Default for LogConfig {
    fn default() -> LogConfig {
        LogConfig {
            file: None,
            level: LevelFilter::Info,
        }
    }
}

#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
struct RawLogConfig {
    file: Option<String>,
    level: LevelFilter,
}

impl Default for RawLogConfig {
    fn default() -> RawLogConfig {
        RawLogConfig {
            file: None,
            level: LevelFilter::Info,
        }
    }
}

impl TryFrom<RawLogConfig> for LogConfig {
    type Error = std::io::Error;

    fn try_from(value: RawLogConfig) -> Result<LogConfig, std::io::Error> {
        Ok(LogConfig {
            file: value.file.map(expanduser::expanduser).transpose()?,
            level: value.level,
        })
    }
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
    #[error(
        "grid is {width}x{height} cells, but it must be at least {min}x{min}",
        min = consts::MIN_GRID_SIDE
    )]
    GridTooSmall { width: u16, height: u16 },
    #[error("grid of {width}x{height} cells of size {cell_size} is too large to draw")]
    GridTooLarge {
        width: u16,
        height: u16,
        cell_size: u16,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn load_str(src: &str) -> Result<Config, ConfigError> {
        let mut file = NamedTempFile::new().expect("should create temporary file");
        file.write_all(src.as_bytes())
            .expect("should write temporary file");
        Config::load(file.path(), false)
    }

    #[test]
    fn empty_file() {
        let config = load_str("").expect("empty config should parse");
        assert_eq!(config, Config::default());
        assert_eq!(config.grid.grid(), Grid::default());
        assert_eq!(config.game.tick_period(), consts::TICK_PERIOD);
        assert_eq!(config.game.seed, None);
        assert_eq!(config.log.level, LevelFilter::Info);
    }

    #[test]
    fn full_file() {
        let config = load_str(concat!(
            "[grid]\n",
            "width = 40\n",
            "height = 20\n",
            "cell-size = 1\n",
            "\n",
            "[game]\n",
            "tick-ms = 150\n",
            "seed = 42\n",
            "\n",
            "[log]\n",
            "file = \"/tmp/gridsnake.log\"\n",
            "level = \"debug\"\n",
        ))
        .expect("config should parse");
        assert_eq!(
            config.grid.grid(),
            Grid {
                width: 40,
                height: 20,
                cell_size: 1,
            }
        );
        assert_eq!(config.game.tick_period(), Duration::from_millis(150));
        assert_eq!(config.game.seed, Some(42));
        assert_eq!(config.log.file, Some(PathBuf::from("/tmp/gridsnake.log")));
        assert_eq!(config.log.level, LevelFilter::Debug);
    }

    #[test]
    fn grid_too_small() {
        let r = load_str("[grid]\nwidth = 5\n");
        assert!(
            matches!(
                r,
                Err(ConfigError::GridTooSmall {
                    width: 5,
                    height: 24
                })
            ),
            "expected GridTooSmall, got {r:?}"
        );
    }

    #[test]
    fn grid_too_large() {
        let r = load_str("[grid]\nwidth = 40000\nheight = 6\ncell-size = 60000\n");
        assert!(
            matches!(
                r,
                Err(ConfigError::GridTooLarge {
                    width: 40000,
                    height: 6,
                    cell_size: 60000,
                })
            ),
            "expected GridTooLarge, got {r:?}"
        );
    }

    #[rstest]
    #[case(32767, 6, 2, true)]
    #[case(32768, 6, 2, false)]
    #[case(6, 65535, 2, true)]
    #[case(6, 32768, 4, false)]
    fn drawn_size_limit(
        #[case] width: u16,
        #[case] height: u16,
        #[case] cell_size: u16,
        #[case] ok: bool,
    ) {
        let r = load_str(&format!(
            "[grid]\nwidth = {width}\nheight = {height}\ncell-size = {cell_size}\n"
        ));
        assert_eq!(r.is_ok(), ok, "unexpected result {r:?}");
    }

    #[test]
    fn zero_tick() {
        let r = load_str("[game]\ntick-ms = 0\n");
        assert!(
            matches!(r, Err(ConfigError::Parse(_))),
            "expected parse error, got {r:?}"
        );
    }

    #[test]
    fn missing_allowed() {
        let dir = tempfile::tempdir().expect("should create temporary directory");
        let path = dir.path().join("config.toml");
        assert_eq!(
            Config::load(&path, true).expect("missing file should be allowed"),
            Config::default()
        );
        assert!(
            matches!(Config::load(&path, false), Err(ConfigError::Read(_))),
            "missing file should be an error"
        );
    }
}
