pub(crate) mod code;
pub(crate) mod huffman;
pub(crate) mod node;
pub(crate) mod queue;
