use crate::config::Config;
use crate::consts;
use crate::highscores::HighScores;
use crate::options::Options;
use anyhow::Context;
use enum_map::Enum;
use ratatui::layout::{Flex, Layout, Rect, Size};
use std::path::PathBuf;

/// State shared by all screens of the application and threaded from one
/// screen to the next
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct Globals {
    /// The configuration read at startup
    pub(crate) config: Config,

    /// The currently-selected gameplay options
    pub(crate) options: Options,

    /// Best scores achieved so far, by option combination
    pub(crate) scores: HighScores,
}

impl Globals {
    /// Assemble the application state at startup: read the configuration file
    /// (the one at `config_path`, if given, which must then exist) and the
    /// high scores file, if enabled.
    pub(crate) fn load(config_path: Option<PathBuf>) -> anyhow::Result<Globals> {
        let config = match config_path {
            Some(path) => Config::load(&path, false)
                .with_context(|| format!("failed to load configuration from {}", path.display()))?,
            None => {
                let path = Config::default_path().context("failed to locate configuration file")?;
                Config::load(&path, true)
                    .with_context(|| format!("failed to load configuration from {}", path.display()))?
            }
        };
        let scores = match config.scores_file().filter(|_| config.save_scores()) {
            Some(path) => HighScores::load(&path)?,
            None => HighScores::default(),
        };
        let options = config.options;
        Ok(Globals {
            config,
            options,
            scores,
        })
    }
}

/// Extra navigation methods for types deriving [`enum_map::Enum`]
pub(crate) trait EnumExt: Enum {
    fn min() -> Self {
        Self::from_usize(0)
    }

    fn max() -> Self {
        Self::from_usize(Self::LENGTH - 1)
    }

    fn next(self) -> Option<Self> {
        let i = self.into_usize().checked_add(1)?;
        (i < Self::LENGTH).then(|| Self::from_usize(i))
    }

    fn prev(self) -> Option<Self> {
        Some(Self::from_usize(self.into_usize().checked_sub(1)?))
    }

    fn iter() -> impl Iterator<Item = Self> {
        (0..Self::LENGTH).map(Self::from_usize)
    }
}

impl<T: Enum> EnumExt for T {}

/// Return a rectangle of [`consts::DISPLAY_SIZE`] (or as much of it as fits)
/// centered in `buffer_area`
pub(crate) fn get_display_area(buffer_area: Rect) -> Rect {
    center_rect(buffer_area, consts::DISPLAY_SIZE)
}

/// Return a rectangle of the given size (or as much of it as fits) centered
/// in `area`
pub(crate) fn center_rect(area: Rect, size: Size) -> Rect {
    let [area] = Layout::horizontal([size.width])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::vertical([size.height])
        .flex(Flex::Center)
        .areas(area);
    area
}
