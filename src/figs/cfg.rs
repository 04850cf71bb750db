use std::path::Path;

use serde::{Serialize, Deserialize};

use crate::figs;

/// Figure compiler configuration.
/// Every field has a default reproducing the stock template and paths,
/// so an empty config file (or no config file at all) is valid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FigsCfg {
    /// Standalone document preamble, written before the fragment.
    #[serde(default = "FigsCfg::default_header")]
    pub header: String,

    /// Standalone document footer, written after the fragment.
    #[serde(default = "FigsCfg::default_footer")]
    pub footer: String,

    /// Name of the per-chapter subdirectory holding fragments.
    #[serde(default = "FigsCfg::default_figs_dir", alias = "figs")]
    pub figs_dir: String,

    /// Filename extension of fragment files, without the dot.
    #[serde(default = "FigsCfg::default_fragment_ext", alias = "ext")]
    pub fragment_ext: String,

    /// Directory receiving wrapped documents and compiler artifacts.
    #[serde(default = "FigsCfg::default_out_dir", alias = "out")]
    pub out_dir: String,

    /// Command invoked on each wrapped document.
    #[serde(default = "FigsCfg::default_compiler")]
    pub compiler: String,
}
impl FigsCfg {
    pub fn default_header() -> String {
        concat!(
            "\\documentclass[a4paper,11pt]{standalone}\n",
            "\\usepackage[utf8]{inputenc}\n",
            "\\input{preamble}\n",
            "\\input{tikz/general-setup}\n",
            "\\begin{document}\n",
        ).to_string()
    }
    pub fn default_footer() -> String {
        "\\end{document}\n".to_string()
    }
    pub fn default_figs_dir() -> String {
        "figs".to_string()
    }
    pub fn default_fragment_ext() -> String {
        "tex".to_string()
    }
    pub fn default_out_dir() -> String {
        "figs-out".to_string()
    }
    pub fn default_compiler() -> String {
        "pdflatex".to_string()
    }
    pub fn default() -> Self {
        FigsCfg{
            header: Self::default_header(),
            footer: Self::default_footer(),
            figs_dir: Self::default_figs_dir(),
            fragment_ext: Self::default_fragment_ext(),
            out_dir: Self::default_out_dir(),
            compiler: Self::default_compiler(),
        }
    }

    /// Load a config from a json/toml/yaml file, falling back to the
    /// defaults for any field the file leaves out.
    pub fn from_cfg_file(cfg_file: &Path) -> figs::Result<Self> {
        let cfg: FigsCfg = crate::io::read_cfg_file(cfg_file)?;
        Ok(cfg)
    }
}
