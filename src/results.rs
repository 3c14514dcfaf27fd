pub mod preview;
pub mod results_render;

pub use preview::{CardPreview, PreviewRenderer};
pub use results_render::{PreviewEntry, build_entries};
