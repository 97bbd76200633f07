use crate::animation::leaves::{LeafOpts, PlacedLeaf, draw_leaves};
use crate::animation::replay::{ReplayOpts, ReplayReport, replay};
use crate::encode::sink::FrameSink;
use crate::foundation::error::HuffvisResult;
use crate::layout::coords::CoordinateMapper;
use crate::render::composite::composite;
use crate::render::cpu::CpuRasterizer;
use crate::scene::layer::{Layer, Timeline};
use crate::session::opts::VisualizationOpts;
use crate::tree::huffman::HuffmanTree;

/// The animated construction of one prefix-code tree, as three composited layers.
///
/// - background: solid fill on every frame;
/// - leaves: one emerging circle (and label) per symbol;
/// - edges: the replayed merges, starting where the leaves finished.
///
/// The leaves layer is painted over the edges layer when compositing.
pub struct Visualization {
    opts: VisualizationOpts,
    background: Layer,
    leaves: Layer,
    edges: Layer,
    placed: Vec<PlacedLeaf>,
    report: ReplayReport,
    end: Timeline,
}

impl Visualization {
    /// Lay out and animate `input` into three layers.
    #[tracing::instrument(skip_all, fields(symbols = input.codes.len()))]
    pub fn build(input: &HuffmanTree, opts: &VisualizationOpts) -> HuffvisResult<Self> {
        let canvas = opts.validate()?;
        let mapper = CoordinateMapper::new(canvas, input.root_weight()?)?;

        let new_layer = || Layer::new(canvas, opts.fps, opts.frame_count, opts.style);
        let mut background = new_layer()?;
        let mut leaves = new_layer()?;
        let mut edges = new_layer()?;

        background.fill_background(opts.background);

        let leaves_start = leaves.timeline();
        let (leaves_done, placed) = draw_leaves(
            &mut leaves,
            leaves_start,
            &input.codes,
            &input.weights,
            &mapper,
            LeafOpts {
                secs: opts.leaf_secs,
                radius: opts.node_radius,
                color: opts.node_color,
                label_color: opts.label_color,
            },
        )?;

        let edges_start = edges.timeline().at(leaves_done.cursor);
        let (end, report) = replay(
            &mut edges,
            edges_start,
            &input.tree,
            input.root,
            &input.codes,
            &mapper,
            ReplayOpts {
                secs: opts.internal_secs,
                edge_slots: opts.edge_slots,
                node_radius: opts.node_radius,
                color: opts.edge_color,
            },
        )?;

        if end.cursor.0 > opts.frame_count {
            tracing::warn!(
                needed = end.cursor.0,
                frame_count = opts.frame_count,
                "animation runs past the last frame and will be cut off"
            );
        }
        tracing::info!(
            leaves = placed.len(),
            merges = report.steps.len(),
            end = end.cursor.0,
            "visualization laid out"
        );

        Ok(Self {
            opts: opts.clone(),
            background,
            leaves,
            edges,
            placed,
            report,
            end,
        })
    }

    /// Layers in compositing order: background, leaves, edges.
    pub fn layers(&self) -> [&Layer; 3] {
        [&self.background, &self.leaves, &self.edges]
    }

    /// Leaves in emergence order.
    pub fn placed_leaves(&self) -> &[PlacedLeaf] {
        &self.placed
    }

    /// Merge replay result.
    pub fn report(&self) -> &ReplayReport {
        &self.report
    }

    /// Timeline after the last merge.
    pub fn end(&self) -> Timeline {
        self.end
    }

    /// Rasterizer configured with the label font from the options, if any.
    pub fn rasterizer(&self) -> HuffvisResult<CpuRasterizer> {
        match &self.opts.label_font {
            Some(path) => CpuRasterizer::with_label_font(path),
            None => Ok(CpuRasterizer::new()),
        }
    }

    /// Composite the three layers and push the final frames into `sink`.
    pub fn render(&self, sink: &mut dyn FrameSink) -> HuffvisResult<()> {
        let mut rasterizer = self.rasterizer()?;
        composite(&self.layers(), &mut rasterizer, sink)
    }
}
