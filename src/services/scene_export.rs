// src/services/scene_export.rs
//
// Export of finished renders: the PNG captured from the render texture and
// a JSON description of the scene next to it, so a cloud can be rendered
// again from its seed.

use log::info;
use nannou::image::{ImageFormat, RgbaImage};
use std::fs::{self, create_dir_all};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::models::SceneInfo;

const FILE_PREFIX: &str = "cloud";

pub struct SceneExporter {
    output_dir: PathBuf,
}

impl SceneExporter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Result<Self> {
        let output_dir = output_dir.into();
        create_dir_all(&output_dir).map_err(|e| {
            Error::Export(format!("cannot create {}: {}", output_dir.display(), e))
        })?;
        Ok(Self { output_dir })
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn png_path(&self, info: &SceneInfo) -> PathBuf {
        self.output_dir.join(format!("{}.png", Self::file_stem(info)))
    }

    pub fn info_path(&self, info: &SceneInfo) -> PathBuf {
        self.output_dir.join(format!("{}.json", Self::file_stem(info)))
    }

    /// Writes the scene description and returns where it went.
    pub fn write_scene_info(&self, info: &SceneInfo) -> Result<PathBuf> {
        let path = self.info_path(info);
        let json = serde_json::to_string_pretty(info)?;
        fs::write(&path, json)?;
        info!("Wrote scene description {}", path.display());
        Ok(path)
    }

    pub fn read_scene_info(path: &Path) -> Result<SceneInfo> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    // cloud_00042_cirrus
    fn file_stem(info: &SceneInfo) -> String {
        format!("{}_{:05}_{}", FILE_PREFIX, info.seed, info.kind().name())
    }
}

pub fn save_png(image: &RgbaImage, path: &Path) -> Result<()> {
    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|e| Error::Export(format!("cannot save {}: {}", path.display(), e)))?;
    info!("Saved {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CloudParams, CumulusParams};

    fn info() -> SceneInfo {
        SceneInfo {
            seed: 42,
            canvas_width: 960.0,
            canvas_height: 640.0,
            origin: [480.0, 250.0],
            show_origin: false,
            params: CloudParams::Cumulus(CumulusParams {
                width: 400.0,
                height: 180.0,
            }),
        }
    }

    #[test]
    fn test_paths_use_seed_and_kind() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = SceneExporter::new(dir.path()).unwrap();
        assert_eq!(
            exporter.png_path(&info()),
            dir.path().join("cloud_00042_cumulus.png")
        );
        assert_eq!(
            exporter.info_path(&info()),
            dir.path().join("cloud_00042_cumulus.json")
        );
    }

    #[test]
    fn test_creates_missing_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let exporter = SceneExporter::new(&nested).unwrap();
        assert!(nested.is_dir());
        assert_eq!(exporter.output_dir(), nested.as_path());
    }

    #[test]
    fn test_scene_info_written_and_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = SceneExporter::new(dir.path()).unwrap();
        let path = exporter.write_scene_info(&info()).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("\"kind\": \"cumulus\""));
        assert_eq!(SceneExporter::read_scene_info(&path).unwrap(), info());
    }

    #[test]
    fn test_save_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tiny.png");
        let image = RgbaImage::from_pixel(4, 3, nannou::image::Rgba([160, 205, 255, 255]));
        save_png(&image, &path).unwrap();

        let loaded = nannou::image::open(&path).unwrap().to_rgba8();
        assert_eq!(loaded.dimensions(), (4, 3));
        assert_eq!(loaded.get_pixel(2, 1).0, [160, 205, 255, 255]);
    }

    #[test]
    fn test_save_png_into_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope").join("tiny.png");
        let image = RgbaImage::new(2, 2);
        assert!(matches!(save_png(&image, &path), Err(Error::Export(_))));
    }
}
