use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{HuffvisError, HuffvisResult};
use crate::foundation::math::unpremultiply_in_place;
use crate::render::cpu::FrameRGBA;
use std::path::{Path, PathBuf};

/// Writes each frame to `{dir}/{base_name}{index:05}.png`.
#[derive(Debug, Clone)]
pub struct PngSequenceSink {
    dir: PathBuf,
    base_name: String,
    written: u64,
}

impl PngSequenceSink {
    /// Create a sink writing into `dir`; the directory is created in `begin`.
    pub fn new(dir: impl Into<PathBuf>, base_name: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            base_name: base_name.into(),
            written: 0,
        }
    }

    /// Output path for frame `idx`.
    pub fn path_for(&self, idx: FrameIndex) -> PathBuf {
        self.dir.join(frame_file_name(&self.base_name, idx))
    }

    /// Output directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Frames written successfully since `begin`.
    pub fn written(&self) -> u64 {
        self.written
    }
}

/// `{base}{index:05}.png`
pub fn frame_file_name(base_name: &str, idx: FrameIndex) -> String {
    format!("{base_name}{:05}.png", idx.0)
}

impl FrameSink for PngSequenceSink {
    fn begin(&mut self, _cfg: SinkConfig) -> HuffvisResult<()> {
        std::fs::create_dir_all(&self.dir).map_err(|e| {
            HuffvisError::encode(format!("create output dir '{}': {e}", self.dir.display()))
        })?;
        self.written = 0;
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> HuffvisResult<()> {
        let mut straight = frame.data.clone();
        if frame.premultiplied {
            unpremultiply_in_place(&mut straight);
        }
        let img = image::RgbaImage::from_raw(frame.width, frame.height, straight)
            .ok_or_else(|| HuffvisError::encode("frame buffer does not match its dimensions"))?;
        let path = self.path_for(idx);
        img.save(&path)
            .map_err(|e| HuffvisError::encode(format!("write '{}': {e}", path.display())))?;
        tracing::trace!(path = %path.display(), "wrote frame");
        self.written += 1;
        Ok(())
    }

    fn end(&mut self) -> HuffvisResult<()> {
        tracing::debug!(written = self.written, dir = %self.dir.display(), "png sequence done");
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png.rs"]
mod tests;
