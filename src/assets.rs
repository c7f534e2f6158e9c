use crate::game::constants::FOOD_VARIANTS;
use crate::game::types::Sound;
use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct SpriteDimensions {
  pub width: u32,
  pub height: u32,
}

impl SpriteDimensions {
  pub fn size(&self) -> f64 {
    self.width.max(self.height) as f64
  }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpriteManifest {
  pub ant: SpriteDimensions,
  pub food: Vec<SpriteDimensions>,
  pub poison: SpriteDimensions,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct SoundManifest {
  pub die_ms: i64,
  pub game_over_ms: i64,
  pub eat_ms: i64,
  pub soundtrack_ms: i64,
}

impl SoundManifest {
  pub fn duration_ms(&self, sound: Sound) -> i64 {
    match sound {
      Sound::Die => self.die_ms,
      Sound::GameOver => self.game_over_ms,
      Sound::Eat => self.eat_ms,
      Sound::Soundtrack => self.soundtrack_ms,
    }
  }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AssetCatalog {
  pub sprites: SpriteManifest,
  pub sounds: SoundManifest,
}

pub fn load(dir: &Path) -> Result<AssetCatalog> {
  let path = dir.join("manifest.json");
  let raw = fs::read_to_string(&path)
    .with_context(|| format!("reading asset manifest {}", path.display()))?;
  let catalog: AssetCatalog = serde_json::from_str(&raw)
    .with_context(|| format!("parsing asset manifest {}", path.display()))?;
  validate(&catalog).with_context(|| format!("validating asset manifest {}", path.display()))?;
  Ok(catalog)
}

fn validate(catalog: &AssetCatalog) -> Result<()> {
  if catalog.sprites.food.len() != FOOD_VARIANTS {
    bail!(
      "expected {} food sprites, found {}",
      FOOD_VARIANTS,
      catalog.sprites.food.len()
    );
  }

  let mut sprites = vec![catalog.sprites.ant, catalog.sprites.poison];
  sprites.extend(catalog.sprites.food.iter().copied());
  for sprite in sprites {
    if sprite.width == 0 || sprite.height == 0 {
      bail!("sprite dimensions must be positive, found {}x{}", sprite.width, sprite.height);
    }
  }

  let durations = [
    catalog.sounds.die_ms,
    catalog.sounds.game_over_ms,
    catalog.sounds.eat_ms,
    catalog.sounds.soundtrack_ms,
  ];
  if durations.iter().any(|duration| *duration <= 0) {
    bail!("sound durations must be positive");
  }

  Ok(())
}
