use texfigs::sph::Spherical;

fn main() {

    // 1. Parse commandline arguments (clap rejects bad or missing numbers)
    let cli_args = texfigs::args::parse_sph_args();

    // 2. Convert and print
    let point = Spherical::new(cli_args.radius, cli_args.lat_deg, cli_args.lon_deg);
    println!("{}", point.to_cartesian());
}
