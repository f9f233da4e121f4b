//! Asset catalog — interns model/texture paths into opaque handles.
//!
//! Stands in for the rendering collaborator's loader. Paths with a
//! format the loader does not recognize fail entity construction
//! outright; nothing downstream ever sees a bad handle.

use std::collections::HashMap;

use thiserror::Error;

use nova_core::components::{ModelHandle, TextureHandle};

/// Model formats the loader accepts.
const MODEL_FORMATS: [&str; 5] = ["obj", "x", "egg", "gltf", "glb"];

/// Texture formats the loader accepts.
const TEXTURE_FORMATS: [&str; 3] = ["jpg", "jpeg", "png"];

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("loader did not return a model for '{path}': unsupported format")]
    UnsupportedModelFormat { path: String },
    #[error("loader did not return a texture for '{path}': unsupported format")]
    UnsupportedTextureFormat { path: String },
}

/// Path-interning catalog. Loading the same path twice returns the
/// same handle.
#[derive(Debug, Default)]
pub struct AssetCatalog {
    models: HashMap<String, ModelHandle>,
    textures: HashMap<String, TextureHandle>,
}

impl AssetCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load_model(&mut self, path: &str) -> Result<ModelHandle, AssetError> {
        if let Some(handle) = self.models.get(path) {
            return Ok(*handle);
        }
        if !has_extension(path, &MODEL_FORMATS) {
            return Err(AssetError::UnsupportedModelFormat {
                path: path.to_string(),
            });
        }
        let handle = ModelHandle(self.models.len() as u32);
        self.models.insert(path.to_string(), handle);
        log::debug!("loaded model '{path}' as {handle:?}");
        Ok(handle)
    }

    pub fn load_texture(&mut self, path: &str) -> Result<TextureHandle, AssetError> {
        if let Some(handle) = self.textures.get(path) {
            return Ok(*handle);
        }
        if !has_extension(path, &TEXTURE_FORMATS) {
            return Err(AssetError::UnsupportedTextureFormat {
                path: path.to_string(),
            });
        }
        let handle = TextureHandle(self.textures.len() as u32);
        self.textures.insert(path.to_string(), handle);
        log::debug!("loaded texture '{path}' as {handle:?}");
        Ok(handle)
    }

    pub fn model_count(&self) -> usize {
        self.models.len()
    }

    pub fn texture_count(&self) -> usize {
        self.textures.len()
    }
}

fn has_extension(path: &str, formats: &[&str]) -> bool {
    match path.rsplit_once('.') {
        Some((stem, ext)) => !stem.is_empty() && formats.contains(&ext.to_lowercase().as_str()),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_model_interns_paths() {
        let mut catalog = AssetCatalog::new();
        let a = catalog.load_model("Assets/Phaser/phaser.egg").unwrap();
        let b = catalog.load_model("Assets/Phaser/phaser.egg").unwrap();
        assert_eq!(a, b);
        assert_eq!(catalog.model_count(), 1);
    }

    #[test]
    fn test_unknown_model_format_is_fatal() {
        let mut catalog = AssetCatalog::new();
        let err = catalog.load_model("Assets/Hud/Reticle3b.txt").unwrap_err();
        assert!(err.to_string().contains("Reticle3b.txt"));
    }

    #[test]
    fn test_texture_formats() {
        let mut catalog = AssetCatalog::new();
        assert!(catalog.load_texture("Assets/Planets/Mars.jpg").is_ok());
        assert!(catalog.load_texture("Assets/Planets/Purple.png").is_ok());
        assert!(catalog.load_texture("Assets/Planets/model.obj").is_err());
    }
}
