/// Display configuration, font resolution and sprite loading.
///
/// Everything here runs once at startup. The result is a fixed set of named
/// handles (`FontRole` → `FontFace`, `SpriteId` → `SpriteArt`) that the
/// terminal canvas uses for the rest of the process.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{info, warn};

use crate::canvas::{FontRole, SpriteId};
use crate::constants::WINDOW_TITLE;
use crate::error::AssetError;

const EMBEDDED_CONFIG: &str = include_str!("../assets/display.toml");

// ── Configuration ─────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct DisplayConfig {
    pub title: String,
    pub fonts: FontConfig,
    pub sprites: SpriteConfig,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            title: WINDOW_TITLE.into(),
            fonts: FontConfig::default(),
            sprites: SpriteConfig::default(),
        }
    }
}

/// Ordered candidate face names per role; the first supported one wins.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct FontConfig {
    pub title: Vec<String>,
    pub score: Vec<String>,
    pub ui: Vec<String>,
    pub small: Vec<String>,
}

impl Default for FontConfig {
    fn default() -> Self {
        let names = |xs: &[&str]| xs.iter().map(|s| s.to_string()).collect();
        Self {
            title: names(&["orbitron", "arial", "wide"]),
            score: names(&["consolas", "courier", "bold"]),
            ui: names(&["arial", "regular"]),
            small: names(&["arial", "dim"]),
        }
    }
}

impl FontConfig {
    pub fn candidates(&self, role: FontRole) -> &[String] {
        match role {
            FontRole::Title => &self.title,
            FontRole::Score => &self.score,
            FontRole::Ui => &self.ui,
            FontRole::Small => &self.small,
        }
    }
}

/// Paths to sprite art, relative to the asset root.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SpriteConfig {
    pub player: PathBuf,
    pub enemy: PathBuf,
}

impl Default for SpriteConfig {
    fn default() -> Self {
        Self {
            player: PathBuf::from("assets/player.txt"),
            enemy: PathBuf::from("assets/enemy.txt"),
        }
    }
}

impl DisplayConfig {
    pub fn parse(raw: &str) -> Result<Self, AssetError> {
        toml::from_str(raw).map_err(|e| AssetError::Config {
            message: e.to_string(),
        })
    }

    /// The configuration compiled into the binary.
    pub fn embedded() -> Result<Self, AssetError> {
        Self::parse(EMBEDDED_CONFIG)
    }
}

// ── Fonts ─────────────────────────────────────────────────────────────────────

/// Text faces a character terminal can actually produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FontFace {
    /// Letter-spaced and bold; used for banners.
    Wide,
    Bold,
    Regular,
    Dim,
}

impl FontFace {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "wide" => Some(FontFace::Wide),
            "bold" => Some(FontFace::Bold),
            "regular" => Some(FontFace::Regular),
            "dim" => Some(FontFace::Dim),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResolvedFonts {
    pub title: FontFace,
    pub score: FontFace,
    pub ui: FontFace,
    pub small: FontFace,
}

impl ResolvedFonts {
    pub fn face(&self, role: FontRole) -> FontFace {
        match role {
            FontRole::Title => self.title,
            FontRole::Score => self.score,
            FontRole::Ui => self.ui,
            FontRole::Small => self.small,
        }
    }
}

/// First supported candidate, or the regular face if none is.
pub fn resolve_font(role: FontRole, candidates: &[String]) -> Result<FontFace, AssetError> {
    if candidates.is_empty() {
        return Err(AssetError::NoFontCandidates { role });
    }
    for name in candidates {
        if let Some(face) = FontFace::from_name(name) {
            info!(?role, font = %name, "font resolved");
            return Ok(face);
        }
    }
    warn!(?role, ?candidates, "no candidate font available, using regular");
    Ok(FontFace::Regular)
}

pub fn resolve_fonts(config: &FontConfig) -> Result<ResolvedFonts, AssetError> {
    Ok(ResolvedFonts {
        title: resolve_font(FontRole::Title, config.candidates(FontRole::Title))?,
        score: resolve_font(FontRole::Score, config.candidates(FontRole::Score))?,
        ui: resolve_font(FontRole::Ui, config.candidates(FontRole::Ui))?,
        small: resolve_font(FontRole::Small, config.candidates(FontRole::Small))?,
    })
}

// ── Sprites ───────────────────────────────────────────────────────────────────

/// Character art for one sprite, one string per terminal row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpriteArt {
    pub rows: Vec<String>,
}

impl SpriteArt {
    /// Solid block used when a sprite file has no usable art.
    pub fn placeholder(cols: usize, rows: usize) -> Self {
        SpriteArt {
            rows: vec!["█".repeat(cols.max(1)); rows.max(1)],
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        let rows: Vec<String> = raw
            .lines()
            .map(|l| l.trim_end().to_string())
            .filter(|l| !l.is_empty())
            .collect();
        if rows.is_empty() {
            None
        } else {
            Some(SpriteArt { rows })
        }
    }

    pub fn width(&self) -> usize {
        self.rows.iter().map(|r| r.chars().count()).max().unwrap_or(0)
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }
}

/// Read sprite art from `path`. A missing file is an error; a file with no
/// art in it is replaced with a placeholder of the given size.
pub fn load_sprite(path: &Path, cols: usize, rows: usize) -> Result<SpriteArt, AssetError> {
    let raw = fs::read_to_string(path).map_err(|source| AssetError::Missing {
        path: path.to_path_buf(),
        source,
    })?;
    match SpriteArt::parse(&raw) {
        Some(art) => Ok(art),
        None => {
            warn!(path = %path.display(), "sprite file is empty, using placeholder");
            Ok(SpriteArt::placeholder(cols, rows))
        }
    }
}

// ── Bundle ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Assets {
    pub title: String,
    pub fonts: ResolvedFonts,
    pub player: SpriteArt,
    pub enemy: SpriteArt,
}

impl Assets {
    /// Resolve fonts and load sprites, with sprite paths taken relative to `root`.
    pub fn load(config: &DisplayConfig, root: &Path) -> Result<Self, AssetError> {
        let fonts = resolve_fonts(&config.fonts)?;
        let player = load_sprite(&root.join(&config.sprites.player), 5, 2)?;
        let enemy = load_sprite(&root.join(&config.sprites.enemy), 4, 2)?;
        info!(
            player = %config.sprites.player.display(),
            enemy = %config.sprites.enemy.display(),
            "sprites loaded"
        );
        Ok(Assets {
            title: config.title.clone(),
            fonts,
            player,
            enemy,
        })
    }

    pub fn sprite(&self, id: SpriteId) -> &SpriteArt {
        match id {
            SpriteId::Player => &self.player,
            SpriteId::Enemy => &self.enemy,
        }
    }
}
