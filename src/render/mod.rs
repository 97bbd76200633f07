/// Back-to-front layer compositing.
pub mod composite;
/// `vello_cpu` rasterization of frame display lists.
pub mod cpu;
pub(crate) mod text;
