use crate::foundation::core::Rgba8;
use crate::foundation::error::{HuffvisError, HuffvisResult};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// RGBA8 brush color used by Parley text layout.
pub(crate) struct TextBrushRgba8 {
    pub(crate) r: u8,
    pub(crate) g: u8,
    pub(crate) b: u8,
    pub(crate) a: u8,
}

impl From<Rgba8> for TextBrushRgba8 {
    fn from(c: Rgba8) -> Self {
        Self {
            r: c.r,
            g: c.g,
            b: c.b,
            a: c.a,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct LabelKey {
    text: String,
    size_bits: u32,
    color: [u8; 4],
}

/// Shapes node labels with one registered font and caches the results per label.
pub(crate) struct LabelShaper {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrushRgba8>,
    family_name: String,
    font: vello_cpu::peniko::FontData,
    cache: HashMap<LabelKey, Arc<parley::Layout<TextBrushRgba8>>>,
}

impl LabelShaper {
    /// Register `font_bytes` (TTF/OTF) as the label font.
    pub(crate) fn from_bytes(font_bytes: Vec<u8>) -> HuffvisResult<Self> {
        let mut font_ctx = parley::FontContext::default();
        let families = font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font_bytes.clone()), None);
        let family_id = families.first().map(|(id, _)| *id).ok_or_else(|| {
            HuffvisError::validation("no font families registered from font bytes")
        })?;
        let family_name = font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| HuffvisError::validation("registered font family has no name"))?
            .to_string();

        let font = vello_cpu::peniko::FontData::new(vello_cpu::peniko::Blob::from(font_bytes), 0);
        Ok(Self {
            font_ctx,
            layout_ctx: parley::LayoutContext::new(),
            family_name,
            font,
            cache: HashMap::new(),
        })
    }

    /// Read and register a font file.
    pub(crate) fn from_path(path: &Path) -> HuffvisResult<Self> {
        let bytes = std::fs::read(path).map_err(|e| {
            HuffvisError::validation(format!("read label font '{}': {e}", path.display()))
        })?;
        Self::from_bytes(bytes)
    }

    pub(crate) fn font(&self) -> &vello_cpu::peniko::FontData {
        &self.font
    }

    /// Shaped single-line layout for `text`.
    pub(crate) fn layout(
        &mut self,
        text: &str,
        size_px: f32,
        color: Rgba8,
    ) -> Arc<parley::Layout<TextBrushRgba8>> {
        let key = LabelKey {
            text: text.to_owned(),
            size_bits: size_px.to_bits(),
            color: [color.r, color.g, color.b, color.a],
        };
        if let Some(l) = self.cache.get(&key) {
            return Arc::clone(l);
        }

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(self.family_name.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        builder.push_default(parley::style::StyleProperty::Brush(TextBrushRgba8::from(
            color,
        )));
        let mut layout: parley::Layout<TextBrushRgba8> = builder.build(text);
        layout.break_all_lines(None);

        let layout = Arc::new(layout);
        self.cache.insert(key, Arc::clone(&layout));
        layout
    }
}
