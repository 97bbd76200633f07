//! huffvis turns a weighted prefix-code tree into a deterministic sequence of raster frames that
//! animate its bottom-up construction.
//!
//! - Leaves are placed from their code (x) and weight (y) and emerge as growing circles.
//! - The tree's merges are replayed lightest-first; each merge grows two edges into a new parent.
//! - Independently timed [`Layer`]s are composited back to front and pushed into a [`FrameSink`].
//!
//! [`Visualization`] wires the whole pipeline together; the lower-level pieces are public for
//! callers that want different layers or timings.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub(crate) mod animation;
/// Frame sinks.
pub mod encode;
pub(crate) mod layout;
/// Rasterization and compositing.
pub mod render;
pub(crate) mod scene;
pub(crate) mod session;
pub(crate) mod tree;

pub use crate::foundation::core::{
    BezPath, Canvas, Fps, FrameIndex, Point, Rgba8, Vec2,
};
pub use crate::foundation::error::{HuffvisError, HuffvisResult};

pub use crate::animation::connect::{Edge, connect, connect_point, shorten_endpoints};
pub use crate::animation::emerge::{NodeCircle, OVERSHOOT, emerge, emerge_radius};
pub use crate::animation::leaves::{LeafOpts, PlacedLeaf, draw_leaves, label_text};
pub use crate::animation::replay::{
    MergeStep, ReplayOpts, ReplayReport, rebuild_queue, replay,
};
pub use crate::encode::png::{PngSequenceSink, frame_file_name};
pub use crate::encode::sink::{FrameSink, InMemorySink, SinkConfig};
pub use crate::layout::coords::{CoordinateMapper, X_DAMPING, Y_MARGIN, Y_SPAN};
pub use crate::render::composite::{composite, composite_frame};
pub use crate::render::cpu::{CpuRasterizer, FrameRGBA};
pub use crate::scene::frame::{DrawCmd, FrameScene};
pub use crate::scene::layer::{Layer, LayerStyle, Timeline};
pub use crate::session::opts::VisualizationOpts;
pub use crate::session::visualization::Visualization;
pub use crate::tree::code::Code;
pub use crate::tree::huffman::HuffmanTree;
pub use crate::tree::node::{Node, NodeId, Tree};
pub use crate::tree::queue::MergeQueue;
