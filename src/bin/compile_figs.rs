fn main() {

    // 1. Parse commandline arguments
    let cli_args = texfigs::args::parse_compile_figs_args();

    // 2. Sync every fragment's output, recompiling the stale ones
    if let Err(err) = texfigs::run_compile_figs(cli_args) {
        println!("COMPILE ERROR!");
        match err {
            texfigs::TexfigsError::FigsError(err) => {
                println!("{}", err);
            },
            texfigs::TexfigsError::IoError(err) => {
                println!("IO Error: {}", err);
            },
            texfigs::TexfigsError::StringOnly(err) => {
                println!("{}", err);
            },
        }
        std::process::exit(1);
    }
}
