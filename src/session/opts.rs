use crate::foundation::core::{Canvas, Fps, Rgba8};
use crate::foundation::error::{HuffvisError, HuffvisResult};
use crate::scene::layer::LayerStyle;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Settings for a full three-layer visualization.
///
/// Every field has a default, so a JSON config only needs the fields it overrides.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VisualizationOpts {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Output frame rate.
    pub fps: Fps,
    /// Frames per layer.
    pub frame_count: u64,
    /// Seconds shared by all leaf emergences.
    pub leaf_secs: f64,
    /// Time budget the edge duration is derived from.
    pub internal_secs: f64,
    /// Slots `internal_secs` is divided into; one edge lasts `internal_secs / edge_slots`.
    pub edge_slots: u32,
    /// Leaf circle radius in pixels.
    pub node_radius: f64,
    /// Background fill.
    pub background: Rgba8,
    /// Leaf circle color.
    pub node_color: Rgba8,
    /// Edge stroke color.
    pub edge_color: Rgba8,
    /// Label glyph color.
    pub label_color: Rgba8,
    /// Stroke and font settings shared by all layers.
    pub style: LayerStyle,
    /// TTF/OTF file used for leaf labels. Labels are skipped when unset.
    pub label_font: Option<PathBuf>,
}

impl Default for VisualizationOpts {
    fn default() -> Self {
        Self {
            width: 400,
            height: 300,
            fps: Fps { num: 10, den: 1 },
            frame_count: 200,
            leaf_secs: 10.0,
            internal_secs: 10.0,
            edge_slots: 30,
            node_radius: 10.0,
            background: Rgba8::BLACK,
            node_color: Rgba8::rgb(64, 255, 64),
            edge_color: Rgba8::WHITE,
            label_color: Rgba8::BLACK,
            style: LayerStyle::default(),
            label_font: None,
        }
    }
}

impl VisualizationOpts {
    /// Parse options from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> HuffvisResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| HuffvisError::validation(format!("parse visualization options: {e}")))
    }

    /// Parse options from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> HuffvisResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            HuffvisError::validation(format!("open options JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check the options and return the validated canvas.
    pub fn validate(&self) -> HuffvisResult<Canvas> {
        let canvas = Canvas::new(self.width, self.height)?;
        Fps::new(self.fps.num, self.fps.den)?;
        if self.frame_count == 0 {
            return Err(HuffvisError::validation("frame_count must be > 0"));
        }
        for (name, secs) in [
            ("leaf_secs", self.leaf_secs),
            ("internal_secs", self.internal_secs),
        ] {
            if !secs.is_finite() || secs < 0.0 {
                return Err(HuffvisError::validation(format!(
                    "{name} must be finite and >= 0"
                )));
            }
        }
        if self.edge_slots == 0 {
            return Err(HuffvisError::validation("edge_slots must be > 0"));
        }
        if !self.node_radius.is_finite() || self.node_radius < 0.0 {
            return Err(HuffvisError::validation(
                "node_radius must be finite and >= 0",
            ));
        }
        Ok(canvas)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/opts.rs"]
mod tests;
