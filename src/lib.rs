pub mod figs;
pub mod sph;
pub mod args;
pub mod io;
mod crate_errors;

use std::path::Path;

pub use crate_errors::{
    TexfigsError,
    TexfigsResult,
    err_str,
};

/// Run the figure compiler over the current working directory.
/// Loads the config file when one was given, otherwise uses the stock
/// template and paths.
pub fn run_compile_figs(cli_args: args::CompileFigsCli) -> TexfigsResult<()> {
    let cfg = match cli_args.config_path {
        Some(ref config_path) => {
            println!("Loading figure compiler config file: {}...", config_path);
            figs::FigsCfg::from_cfg_file(Path::new(config_path))?
        },
        None => figs::FigsCfg::default(),
    };

    figs::run_all(Path::new("."), &cfg)?;
    Ok(())
}
