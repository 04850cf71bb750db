use std::path::{Path, PathBuf};
use std::process::Command;

use itertools::Itertools;
use walkdir::WalkDir;

pub mod cfg;
pub use cfg::FigsCfg;

/// Figure compiler error type.
#[derive(Debug)]
pub enum FigsError {
    /// Verbose file IO error.
    IoError(crate::io::IoError),
    /// Directory walk error.
    WalkError(walkdir::Error),
    /// StringOnly error.
    StringOnly(String),
}
impl std::fmt::Display for FigsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FigsError::IoError(error) => write!(f, "IO Error:\n{}", error),
            FigsError::WalkError(error) => write!(f, "Directory Walk Error:\n{}", error),
            FigsError::StringOnly(error) => write!(f, "{}", error),
        }
    }
}
impl From<crate::io::IoError> for FigsError {
    fn from(error: crate::io::IoError) -> Self {
        FigsError::IoError(error)
    }
}
impl From<walkdir::Error> for FigsError {
    fn from(error: walkdir::Error) -> Self {
        FigsError::WalkError(error)
    }
}
impl From<String> for FigsError {
    fn from(error: String) -> Self {
        FigsError::StringOnly(error)
    }
}

/// Result type for the `figs` module.
pub type Result<T> = std::result::Result<T, FigsError>;

/// Create a `FigsError::StringOnly` from a string.
pub fn err_str<T>(error_str: &str) -> Result<T> {
    Err(FigsError::StringOnly(error_str.to_string()))
}

/// Create the output directory (and parents) if it doesn't exist yet.
pub fn ensure_output_dir(out_dir: &Path) -> Result<()> {
    if let Err(error) = std::fs::create_dir_all(out_dir) {
        return Err(crate::io::IoError{
            file: Some(out_dir.display().to_string()),
            cause: crate::io::IoErrorType::File(error),
        }.into());
    }
    Ok(())
}

/// Find every fragment under `root` matching `*/<figs_dir>/*.<ext>`:
/// a file exactly three levels down whose parent directory is the
/// figs directory and whose extension is the fragment extension.
/// Matches are sorted lexicographically so processing order is stable.
pub fn discover_fragments(root: &Path, cfg: &FigsCfg) -> Result<Vec<PathBuf>> {
    let mut fragments = Vec::<PathBuf>::new();
    for entry in WalkDir::new(root).min_depth(3).max_depth(3) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if path.extension().and_then(|ext| ext.to_str()) != Some(cfg.fragment_ext.as_str()) {
            continue;
        }
        let parent_name = path.parent()
            .and_then(|parent| parent.file_name())
            .and_then(|name| name.to_str());
        if parent_name != Some(cfg.figs_dir.as_str()) {
            continue;
        }
        fragments.push(path.to_path_buf());
    }
    Ok(fragments.into_iter().sorted().collect())
}

/// Check whether a fragment needs recompiling: true when the output is
/// missing or strictly older than the fragment.
pub fn is_stale(fragment: &Path, output: &Path) -> Result<bool> {
    if !output.exists() {
        return Ok(true);
    }
    Ok(crate::io::modified(fragment)? > crate::io::modified(output)?)
}

/// Wrap a fragment body in the standalone document template.
/// The fragment content is passed through verbatim.
pub fn wrap_fragment(cfg: &FigsCfg, content: &str) -> String {
    format!("{}{}{}", cfg.header, content, cfg.footer)
}

/// Bring one fragment's output up to date.
/// Skips fragments whose output is already current; otherwise writes the
/// wrapped document and runs the external compiler on it.
/// Returns whether the fragment was recompiled.
pub fn sync_one(cfg: &FigsCfg, fragment: &Path, out_dir: &Path) -> Result<bool> {
    let filename = match fragment.file_name() {
        Some(filename) => filename,
        None => {
            return err_str(&format!("Fragment path has no filename: {}", fragment.display()));
        },
    };
    let output_path = out_dir.join(filename);

    if !is_stale(fragment, &output_path)? {
        return Ok(false);
    }

    println!("Wrapping {} -> {}...", fragment.display(), output_path.display());
    let content = crate::io::read_to_string(fragment)?;
    crate::io::write_to_file(&output_path, &wrap_fragment(cfg, &content))?;

    compile_output(cfg, &output_path, out_dir);
    Ok(true)
}

/// Run the external compiler on a wrapped document, blocking until it
/// exits. A compiler failure is reported as a warning and never aborts
/// the run; its artifacts land in the output directory.
fn compile_output(cfg: &FigsCfg, output_path: &Path, out_dir: &Path) {
    let status = Command::new(&cfg.compiler)
        .arg(format!("-output-directory={}", out_dir.display()))
        .arg(output_path)
        .status();
    match status {
        Ok(status) if !status.success() => {
            println!("Warning: {} exited with {} for {}", cfg.compiler, status, output_path.display());
        },
        Err(error) => {
            println!("Warning: failed to run {}: {}", cfg.compiler, error);
        },
        _ => (),
    }
}

/// Sync every fragment under `root`, strictly sequentially.
/// Returns the number of fragments recompiled.
pub fn run_all(root: &Path, cfg: &FigsCfg) -> Result<usize> {
    let out_dir = root.join(&cfg.out_dir);
    ensure_output_dir(&out_dir)?;

    let fragments = discover_fragments(root, cfg)?;
    let mut compiled = 0;
    for fragment in &fragments {
        if sync_one(cfg, fragment, &out_dir)? {
            compiled += 1;
        }
    }
    println!("{} fragment(s) found, {} recompiled.", fragments.len(), compiled);
    Ok(compiled)
}
