//! Shared handler state.

use crate::config::ServerConfig;
use crate::{ColorConverter, PaletteGenerator, RandomColorGenerator};

/// Immutable state shared by every request; the core is stateless, so
/// nothing here needs locking.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: ServerConfig,
    pub converter: ColorConverter,
    pub palettes: PaletteGenerator,
    pub random: RandomColorGenerator,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        let converter = ColorConverter::new();
        Self {
            config,
            converter,
            palettes: PaletteGenerator::with_converter(converter),
            random: RandomColorGenerator::with_converter(converter),
        }
    }
}
