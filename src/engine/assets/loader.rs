// Frame loading from disk

use super::store::FrameImage;
use super::AssetError;
use std::path::{Path, PathBuf};

/// Upper bound on frames scanned in one sequence directory
const MAX_SEQUENCE_LEN: usize = 256;

/// Asset loader responsible for finding and decoding image files
pub struct AssetLoader {
    base_path: PathBuf,
}

impl AssetLoader {
    /// Create a new asset loader with the given base path
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Get the full path for an asset relative to the base path
    pub fn resolve_path<P: AsRef<Path>>(&self, relative: P) -> PathBuf {
        self.base_path.join(relative)
    }

    /// Path of the `index`-th frame inside a sequence directory
    pub fn frame_path(&self, directory: &str, index: usize) -> PathBuf {
        self.resolve_path(Path::new(directory).join(format!("{}.png", index)))
    }

    /// Load asset bytes from disk
    pub fn load_bytes(&self, path: &Path) -> Result<Vec<u8>, AssetError> {
        if !path.exists() {
            return Err(AssetError::NotFound(path.display().to_string()));
        }

        Ok(std::fs::read(path)?)
    }

    /// Decode an image file, optionally mirroring it around the vertical axis
    pub fn load_image(&self, path: &Path, mirrored: bool) -> Result<FrameImage, AssetError> {
        let bytes = self.load_bytes(path)?;
        let decoded = image::load_from_memory(&bytes).map_err(|e| AssetError::Decode {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        let mut rgba = decoded.to_rgba8();
        if mirrored {
            rgba = image::imageops::flip_horizontal(&rgba);
        }

        let (width, height) = rgba.dimensions();
        Ok(FrameImage::new(width, height, rgba.into_raw()))
    }

    /// Collect `0.png`, `1.png`, ... from a directory, stopping at the first gap
    pub fn sequence_paths(&self, directory: &str) -> Result<Vec<PathBuf>, AssetError> {
        let paths: Vec<PathBuf> = (0..MAX_SEQUENCE_LEN)
            .map(|index| self.frame_path(directory, index))
            .take_while(|path| path.is_file())
            .collect();

        if paths.is_empty() {
            return Err(AssetError::EmptySequence(
                self.resolve_path(directory).display().to_string(),
            ));
        }

        Ok(paths)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loader_path_resolution() {
        let loader = AssetLoader::new("/game/assets");
        let path = loader.frame_path("images/walk", 3);

        assert_eq!(path, PathBuf::from("/game/assets/images/walk/3.png"));
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let loader = AssetLoader::new("/definitely/not/here");
        let path = loader.frame_path("images/stand", 0);

        let err = loader.load_image(&path, false).unwrap_err();
        assert!(matches!(err, AssetError::NotFound(_)));
    }

    #[test]
    fn test_empty_sequence_directory() {
        let loader = AssetLoader::new("/definitely/not/here");
        let err = loader.sequence_paths("images/jump").unwrap_err();
        assert!(matches!(err, AssetError::EmptySequence(_)));
    }

    #[test]
    fn test_decode_and_mirror() {
        let dir = std::env::temp_dir().join(format!("scroll-animator-loader-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("0.png");

        // 2x1 image: red pixel on the left, blue on the right
        let mut img = image::RgbaImage::new(2, 1);
        img.put_pixel(0, 0, image::Rgba([255, 0, 0, 255]));
        img.put_pixel(1, 0, image::Rgba([0, 0, 255, 255]));
        img.save(&path).unwrap();

        let loader = AssetLoader::new(&dir);
        let plain = loader.load_image(&path, false).unwrap();
        let mirrored = loader.load_image(&path, true).unwrap();

        assert_eq!((plain.width, plain.height), (2, 1));
        assert_eq!(&plain.rgba[0..4], &[255, 0, 0, 255]);
        assert_eq!(&mirrored.rgba[0..4], &[0, 0, 255, 255]);

        assert_eq!(loader.sequence_paths(".").unwrap().len(), 1);

        std::fs::remove_dir_all(&dir).ok();
    }
}
