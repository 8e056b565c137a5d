//! Tree command implementation

use std::env;
use std::io::Write;
use std::path::Path;

use crate::config::Config;
use crate::error::{Result, TreeError};
use crate::tree::{DirSource, Glyphs, OsDirSource, TreeRenderer};

pub const BANNER: &str = "Directory Tree of the Current Directory:";

/// Print the banner and the tree of the current working directory.
pub fn run<W: Write + ?Sized>(config: &Config, out: &mut W) -> Result<()> {
    let cwd = env::current_dir().map_err(|e| TreeError::access(".", e))?;
    run_at(&OsDirSource, &cwd, config, out)
}

/// Print the banner and the tree of `root` as listed by `source`.
pub fn run_at<S, W>(source: &S, root: &Path, config: &Config, out: &mut W) -> Result<()>
where
    S: DirSource + ?Sized,
    W: Write + ?Sized,
{
    tracing::info!(root = %root.display(), "Rendering directory tree");

    if config.output.banner {
        writeln!(out, "{}", BANNER).map_err(TreeError::Output)?;
    }

    TreeRenderer::new(source)
        .with_glyphs(Glyphs::for_charset(config.charset()))
        .render(root, "", out)?;

    out.flush().map_err(TreeError::Output)?;

    tracing::info!(root = %root.display(), "Finished directory tree");
    Ok(())
}
