//! UT: Convert between geographical and UTM coordinates
use clap::Parser;
use log::{debug, trace, warn};
use std::io::BufRead;
use std::path::PathBuf;
use utmconv::prelude::*;

/// UT: The Rust UTM converter. Reads coordinates, one per line, from the
/// files given (or stdin), and writes the converted coordinates to stdout.
///
/// Forward input: "latitude longitude" in degrees.
/// Inverse input: "32U 691875.632 6098907.826" or "32 N 691875.632 6098907.826".
#[derive(Parser, Debug)]
#[clap(name = "ut")]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Inverse operation, i.e. UTM to geographical coordinates
    #[clap(long = "inv")]
    inverse: bool,

    /// Force the zone number for forward conversion
    #[clap(long)]
    zone: Option<u8>,

    /// Force the band letter for forward conversion (requires --zone)
    #[clap(long, requires = "zone")]
    letter: Option<char>,

    /// Report the southern hemisphere instead of a band letter (requires --zone)
    #[clap(long, requires = "zone")]
    south: bool,

    /// Report the northern hemisphere instead of a band letter (requires --zone)
    #[clap(long, requires = "zone", conflicts_with = "south")]
    north: bool,

    /// Skip the range checks on the input coordinates
    #[clap(long)]
    lenient: bool,

    /// Number of decimals in output (default: 3 for UTM, 9 for geographical)
    #[clap(short = 'd', long)]
    decimals: Option<usize>,

    /// Report fwd-inv roundtrip deviation
    #[clap(short, long)]
    roundtrip: bool,

    /// Echo input to output
    #[clap(short, long)]
    echo: bool,

    #[clap(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// The files to operate on
    args: Vec<PathBuf>,
}

fn main() -> Result<(), anyhow::Error> {
    let options = Cli::parse();
    env_logger::Builder::new()
        .filter_level(options.verbose.log_level_filter())
        .init();

    trace!("This is UT");
    debug!("{options:#?}");

    let direction = if options.inverse { Inv } else { Fwd };
    let forced = forced_zone(&options)?;

    if options.args.is_empty() {
        let stdin = std::io::stdin();
        convert(&options, direction, forced, stdin.lock())?;
        return Ok(());
    }

    for path in &options.args {
        let file = std::fs::File::open(path)
            .map_err(|e| anyhow::anyhow!("cannot open {}: {e}", path.display()))?;
        convert(&options, direction, forced, std::io::BufReader::new(file))?;
    }
    Ok(())
}

// The band letter and the hemisphere flags are mutually exclusive
fn forced_zone(options: &Cli) -> Result<Option<ForcedZone>, Error> {
    let Some(number) = options.zone else {
        return Ok(None);
    };
    let northern = match (options.north, options.south) {
        (false, false) => None,
        (north, _) => Some(north),
    };
    let designator = match (options.letter, northern) {
        (None, None) => None,
        (letter, northern) => Some(Designator::from_parts(letter, northern)?),
    };
    Ok(Some(ForcedZone::new(number, designator)))
}

fn convert(
    options: &Cli,
    direction: Direction,
    forced: Option<ForcedZone>,
    reader: impl BufRead,
) -> Result<(), anyhow::Error> {
    let strict = !options.lenient;

    for line in reader.lines() {
        let line = line?;
        let input = line.split('#').next().unwrap_or_default().trim();
        if input.is_empty() {
            println!("{line}");
            continue;
        }
        if options.echo {
            println!("#  {line}");
        }

        let result = match direction {
            Fwd => input
                .parse::<Geo>()
                .and_then(|geo| forward_line(options, geo, forced, strict)),
            Inv => input
                .parse::<Utm>()
                .and_then(|utm| inverse_line(options, utm, strict)),
        };

        match result {
            Ok(output) => println!("{output}"),
            Err(e) => {
                warn!("{input:?}: {e}");
                println!("NaN NaN");
            }
        }
    }
    Ok(())
}

fn forward_line(
    options: &Cli,
    geo: Geo,
    forced: Option<ForcedZone>,
    strict: bool,
) -> Result<String, Error> {
    let utm = forward(geo.latitude, geo.longitude, forced, strict)?;
    let decimals = options.decimals.unwrap_or(3);
    let mut output = format!("{utm:.decimals$}");

    if options.roundtrip {
        let back = utm.to_geo(false)?;
        let dlat = back.latitude - geo.latitude;
        let dlon = utmconv::math::angular::longitude_difference(back.longitude, geo.longitude);
        output += &format!("  {dlat:.3e} {dlon:.3e}");
    }
    Ok(output)
}

fn inverse_line(options: &Cli, utm: Utm, strict: bool) -> Result<String, Error> {
    let geo = utm.to_geo(strict)?;
    let decimals = options.decimals.unwrap_or(9);
    let mut output = format!("{geo:.decimals$}");

    if options.roundtrip {
        let zone = Some(ForcedZone::new(utm.zone_number, Some(utm.designator)));
        let back = forward(geo.latitude, geo.longitude, zone, false)?;
        let de = back.easting - utm.easting;
        let dn = back.northing - utm.northing;
        output += &format!("  {de:.3e} {dn:.3e}");
    }
    Ok(output)
}

// ----- Tests ---------------------------------------------------------------------
