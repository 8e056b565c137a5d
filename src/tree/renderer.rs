use std::io::Write;
use std::path::Path;

use crate::error::{Result, TreeError};

use super::glyphs::Glyphs;
use super::source::DirSource;

/// Prints a directory and everything below it as an indented tree.
///
/// Entries are visited depth-first: a directory's own line is written before
/// any of its contents, and siblings keep the order the source lists them in.
#[derive(Debug, Clone)]
pub struct TreeRenderer<'a, S: DirSource + ?Sized> {
    source: &'a S,
    glyphs: Glyphs,
}

impl<'a, S: DirSource + ?Sized> TreeRenderer<'a, S> {
    pub fn new(source: &'a S) -> Self {
        Self {
            source,
            glyphs: Glyphs::default(),
        }
    }

    pub fn with_glyphs(mut self, glyphs: Glyphs) -> Self {
        self.glyphs = glyphs;
        self
    }

    /// Write one line per entry under `path`, each starting with `prefix`.
    ///
    /// The first listing or classification failure aborts the whole walk.
    /// Lines already written to `out` stay there.
    pub fn render<W: Write + ?Sized>(&self, path: &Path, prefix: &str, out: &mut W) -> Result<()> {
        let names = self.source.list(path)?;
        let count = names.len();

        tracing::debug!(path = %path.display(), entries = count, "Listed directory");

        for (i, name) in names.iter().enumerate() {
            let is_last = i + 1 == count;

            writeln!(
                out,
                "{}{}{}",
                prefix,
                self.glyphs.connector(is_last),
                name.to_string_lossy()
            )
            .map_err(TreeError::Output)?;

            let child = path.join(name);
            tracing::trace!(path = %child.display(), "Wrote entry");

            if self.source.is_dir(&child)? {
                let child_prefix = self.glyphs.child_prefix(prefix, is_last);
                self.render(&child, &child_prefix, out)?;
            }
        }

        Ok(())
    }

    /// Render the tree under `root` into a string.
    pub fn render_to_string(&self, root: &Path) -> Result<String> {
        let mut buf = Vec::new();
        self.render(root, "", &mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}
