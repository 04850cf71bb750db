use clap::Parser;

/// Standalone figure compiler for LaTeX fragments.
/// Wraps each fragment under */figs/*.tex in a standalone document and
/// recompiles the ones whose output is missing or out of date.
#[derive(Debug, Parser)]
#[command(name = "compile-figs")]
pub struct CompileFigsCli {
    #[arg(short, long = "config")]
    /// Path to an optional config file (.json/.toml/.yaml) overriding the
    /// stock template, paths, or compiler command.
    pub config_path: Option<String>,
}

/// Parse the command line arguments for the compile-figs binary.
/// Uses the `clap` crate.
pub fn parse_compile_figs_args() -> CompileFigsCli {
    CompileFigsCli::parse()
}

/// Spherical-to-Cartesian coordinate converter.
/// Prints the Cartesian point as (x,y,z) with 3 decimal places.
#[derive(Debug, Parser)]
#[command(name = "sph")]
pub struct SphCli {
    /// Radius.
    pub radius: f64,

    /// Latitude in degrees, measured from the equatorial plane.
    pub lat_deg: f64,

    /// Longitude in degrees.
    pub lon_deg: f64,
}

/// Parse the command line arguments for the sph binary.
/// Uses the `clap` crate.
pub fn parse_sph_args() -> SphCli {
    SphCli::parse()
}
