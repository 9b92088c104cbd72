use clap::{Parser, Subcommand};
use kaksha_flags::{Flag, FlagSet};
use kaksha_math::PowVariant;
use kaksha_parity::{julian_comparison, power_comparisons, standard_reports};
use kaksha_time::{
    JulianVariant, TimeKind, Timestamp, greenwich_sidereal_time_rad, local_mean_sidereal_time_rad,
};

#[derive(Parser)]
#[command(name = "kaksha", about = "Kaksha kernel experiment CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Julian date of a timestamp under the active algorithm
    Julian {
        /// Datetime (YYYY-MM-DDThh:mm:ss, with Z, ±hh:mm, or nothing)
        #[arg(long)]
        date: String,
        /// Use the corrected (Meeus) algorithm
        #[arg(long)]
        fix_julian: bool,
        /// Print both algorithms and their difference
        #[arg(long)]
        compare: bool,
    },
    /// Greenwich Mean Sidereal Time
    Gst {
        /// Datetime (YYYY-MM-DDThh:mm:ss, with Z, ±hh:mm, or nothing)
        #[arg(long)]
        date: String,
        /// Use the corrected (Meeus) Julian algorithm underneath
        #[arg(long)]
        fix_julian: bool,
    },
    /// Local Mean Sidereal Time
    Lmst {
        /// Datetime (YYYY-MM-DDThh:mm:ss, with Z, ±hh:mm, or nothing)
        #[arg(long)]
        date: String,
        /// Observer east longitude in degrees
        #[arg(long)]
        lon: f64,
        /// Use the corrected (Meeus) Julian algorithm underneath
        #[arg(long)]
        fix_julian: bool,
    },
    /// Normalize a timestamp to strict UTC
    Utc {
        /// Datetime (YYYY-MM-DDThh:mm:ss, with Z, ±hh:mm, or nothing)
        #[arg(long)]
        date: String,
    },
    /// Raise x to a power under the active power kernel
    Pow {
        /// Base
        x: f64,
        /// Exponent
        n: f64,
        /// Use the specialized multiplication forms
        #[arg(long)]
        optimized: bool,
    },
    /// List a preset's flags and the variants it selects
    Flags {
        /// Preset: none, optimizations, bug-fixes, all
        #[arg(long, default_value = "all")]
        preset: String,
    },
    /// Run the variant-equivalence reports
    Parity {
        /// Print every case, not just failures
        #[arg(long)]
        verbose: bool,
    },
    /// Wall-clock comparison of kernel variants
    Bench {
        /// Iterations per variant
        #[arg(long, default_value = "1000000")]
        iterations: u32,
    },
}

fn parse_timestamp(s: &str) -> Result<Timestamp, String> {
    // Parse "YYYY-MM-DDThh:mm:ss" with an optional zone designation:
    // trailing "Z", "±hh:mm", or nothing (unspecified).
    let (body, kind) = split_zone(s)?;
    let parts: Vec<&str> = body.split('T').collect();
    if parts.len() != 2 {
        return Err(format!("expected YYYY-MM-DDThh:mm:ss, got {s}"));
    }
    let date_parts: Vec<&str> = parts[0].split('-').collect();
    let time_parts: Vec<&str> = parts[1].split(':').collect();
    if date_parts.len() != 3 || time_parts.len() != 3 {
        return Err(format!("invalid date/time format: {s}"));
    }
    let year: i32 = date_parts[0].parse().map_err(|e| format!("{e}"))?;
    let month: u32 = date_parts[1].parse().map_err(|e| format!("{e}"))?;
    let day: u32 = date_parts[2].parse().map_err(|e| format!("{e}"))?;
    let hour: u32 = time_parts[0].parse().map_err(|e| format!("{e}"))?;
    let minute: u32 = time_parts[1].parse().map_err(|e| format!("{e}"))?;
    let second: f64 = time_parts[2].parse().map_err(|e| format!("{e}"))?;
    Ok(Timestamp {
        year,
        month,
        day,
        hour,
        minute,
        second,
        kind,
    })
}

fn split_zone(s: &str) -> Result<(&str, TimeKind), String> {
    if let Some(body) = s.strip_suffix('Z') {
        return Ok((body, TimeKind::Utc));
    }
    let Some(t_pos) = s.find('T') else {
        return Ok((s, TimeKind::Unspecified));
    };
    let Some(rel) = s[t_pos + 1..].find(['+', '-']) else {
        return Ok((s, TimeKind::Unspecified));
    };
    let zone_pos = t_pos + 1 + rel;
    let negative = s[zone_pos..].starts_with('-');
    let sign: i32 = if negative { -1 } else { 1 };
    let zone_parts: Vec<&str> = s[zone_pos + 1..].split(':').collect();
    if zone_parts.len() != 2 {
        return Err(format!("expected ±hh:mm offset, got {}", &s[zone_pos..]));
    }
    let hours: i32 = zone_parts[0].parse().map_err(|e| format!("{e}"))?;
    let minutes: i32 = zone_parts[1].parse().map_err(|e| format!("{e}"))?;
    Ok((
        &s[..zone_pos],
        TimeKind::UtcOffset {
            minutes: sign * (hours * 60 + minutes),
        },
    ))
}

fn require_timestamp(s: &str) -> Timestamp {
    parse_timestamp(s).unwrap_or_else(|e| {
        eprintln!("Invalid datetime: {e}");
        std::process::exit(1);
    })
}

fn require_preset(name: &str) -> FlagSet {
    match name {
        "none" => FlagSet::none(),
        "optimizations" => FlagSet::all_optimizations(),
        "bug-fixes" => FlagSet::all_bug_fixes(),
        "all" => FlagSet::all(),
        _ => {
            eprintln!("Invalid preset: {name}");
            eprintln!("Valid: none, optimizations, bug-fixes, all");
            std::process::exit(1);
        }
    }
}

fn julian_flags(fix_julian: bool) -> FlagSet {
    FlagSet::none().with(Flag::JulianDateAlgorithm, fix_julian)
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Julian {
            date,
            fix_julian,
            compare,
        } => {
            let ts = require_timestamp(&date);
            if compare {
                let original = JulianVariant::DayCount.julian_date(&ts);
                let corrected = JulianVariant::Meeus.julian_date(&ts);
                println!("day-count: {original:.9}");
                println!("meeus:     {corrected:.9}");
                println!("difference: {:.9} days", corrected - original);
            } else {
                let variant = JulianVariant::select(julian_flags(fix_julian));
                println!("{:.9}", variant.julian_date(&ts));
            }
        }

        Commands::Gst { date, fix_julian } => {
            let ts = require_timestamp(&date);
            let variant = JulianVariant::select(julian_flags(fix_julian));
            let gst = greenwich_sidereal_time_rad(variant, &ts);
            println!("GST: {:.9} rad = {:.6} deg", gst, gst.to_degrees());
        }

        Commands::Lmst {
            date,
            lon,
            fix_julian,
        } => {
            let ts = require_timestamp(&date);
            let variant = JulianVariant::select(julian_flags(fix_julian));
            let lmst = local_mean_sidereal_time_rad(variant, &ts, lon.to_radians());
            println!("LMST: {:.9} rad = {:.6} deg", lmst, lmst.to_degrees());
        }

        Commands::Utc { date } => {
            let ts = require_timestamp(&date);
            match ts.to_strict_utc() {
                Ok(utc) => println!("{utc}"),
                Err(e) => {
                    eprintln!("Cannot normalize: {e}");
                    std::process::exit(1);
                }
            }
        }

        Commands::Pow { x, n, optimized } => {
            let flags = FlagSet::none().with(Flag::PowerOperations, optimized);
            let variant = PowVariant::select(flags);
            println!("{}", variant.pow(x, n));
        }

        Commands::Flags { preset } => {
            let flags = require_preset(&preset);
            print_flags(preset.as_str(), flags);
        }

        Commands::Parity { verbose } => {
            let mut all_passed = true;
            for report in standard_reports() {
                println!("{report}");
                if verbose {
                    for case in report.cases() {
                        println!("  {case}");
                    }
                } else {
                    for case in report.failures() {
                        println!("  FAIL {case}");
                    }
                }
                all_passed &= report.passed();
            }
            if !all_passed {
                std::process::exit(1);
            }
        }

        Commands::Bench { iterations } => {
            for cmp in power_comparisons(iterations) {
                println!("{cmp}");
            }
            println!("{}", julian_comparison(iterations));
        }
    }
}

fn print_flags(preset: &str, flags: FlagSet) {
    println!("preset {preset}: {flags}");
    for flag in Flag::ALL {
        let state = if flags.get(flag) { "on " } else { "off" };
        println!("  [{state}] {:32} {:?}", flag.name(), flag.group());
    }
    println!("power kernel:  {:?}", PowVariant::select(flags));
    println!("julian kernel: {:?}", JulianVariant::select(flags));
}
