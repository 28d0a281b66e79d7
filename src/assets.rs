//! Sprite images, loaded once at startup and scaled to their on-screen size.

use std::path::Path;

use image::{imageops::FilterType, Rgba, RgbaImage};

use crate::config::GameConfig;
use crate::display::Rgb;
use crate::entities::SpriteKind;
use crate::error::GameError;

/// Pixels at or below this alpha are treated as transparent.
const ALPHA_CUTOFF: u8 = 127;

/// An RGBA image at exactly the size of the rectangle it is drawn into.
#[derive(Clone, Debug)]
pub struct Sprite {
    image: RgbaImage,
}

impl Sprite {
    /// Decode the image at `path` and stretch it to `width`×`height`.
    pub fn load(path: &Path, width: u32, height: u32) -> Result<Self, GameError> {
        let img = image::open(path).map_err(|source| GameError::Asset {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!(
            "loaded sprite {} ({}x{} -> {}x{})",
            path.display(),
            img.width(),
            img.height(),
            width,
            height
        );
        let image = img
            .resize_exact(width, height, FilterType::Nearest)
            .to_rgba8();
        Ok(Self { image })
    }

    /// A fully opaque single-colour sprite.
    pub fn solid(width: u32, height: u32, color: Rgb) -> Self {
        let Rgb(r, g, b) = color;
        Self {
            image: RgbaImage::from_pixel(width, height, Rgba([r, g, b, 255])),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Colour at sprite-local `(x, y)`, or `None` if outside or transparent.
    pub fn sample(&self, x: i32, y: i32) -> Option<Rgb> {
        if x < 0 || y < 0 || x as u32 >= self.width() || y as u32 >= self.height() {
            return None;
        }
        let Rgba([r, g, b, a]) = *self.image.get_pixel(x as u32, y as u32);
        (a > ALPHA_CUTOFF).then_some(Rgb(r, g, b))
    }
}

/// The two images the game draws with.
#[derive(Clone, Debug)]
pub struct Sprites {
    pub player: Sprite,
    pub clam: Sprite,
}

impl Sprites {
    /// Load both sprites from the paths in `config`, sized to the player and
    /// clam rectangles.
    pub fn load(config: &GameConfig) -> Result<Self, GameError> {
        let p = config.player_size as u32;
        let c = config.clam_size as u32;
        Ok(Self {
            player: Sprite::load(&config.player_asset, p, p)?,
            clam: Sprite::load(&config.clam_asset, c, c)?,
        })
    }

    pub fn get(&self, kind: SpriteKind) -> &Sprite {
        match kind {
            SpriteKind::Player => &self.player,
            SpriteKind::Clam => &self.clam,
        }
    }
}
