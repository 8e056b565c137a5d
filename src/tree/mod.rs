mod glyphs;
mod renderer;
mod source;

pub use glyphs::{Charset, Glyphs, ASCII, UTF8};
pub use renderer::TreeRenderer;
pub use source::{DirSource, MemDirSource, OsDirSource};
