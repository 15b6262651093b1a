use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use varsha_base::{GeoLocation, Graha, nakshatra_from_longitude, rashi_from_longitude};
use varsha_config::Settings;
use varsha_tajika::{
    AnnualTiming, EphemerisAdapter, NatalChart, advance_muntha, compute_annual_timing,
    partition_mudda, solve_solar_return,
};
use varsha_time::{Instant, UtcTime};

#[derive(Parser)]
#[command(name = "varsha", about = "Tajika annual chart (Varsha Pravesha) calculator")]
struct Cli {
    /// Settings file (TOML); defaults apply when omitted
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Full annual timing for a target year
    Annual {
        /// Birth moment, UTC (YYYY-MM-DDThh:mm:ssZ)
        #[arg(long)]
        date: UtcTime,
        /// Birth latitude in degrees (north positive)
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        /// Birth longitude in degrees (east positive)
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
        /// Target year
        #[arg(long)]
        year: i32,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Solar-return instant only
    SolarReturn {
        /// Birth moment, UTC (YYYY-MM-DDThh:mm:ssZ)
        #[arg(long)]
        date: UtcTime,
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
        #[arg(long)]
        year: i32,
    },
    /// Muntha sign and house
    Muntha {
        /// Natal ascendant sign index (0 = Mesha)
        #[arg(long)]
        natal_asc: u8,
        /// Elapsed years since birth
        #[arg(long)]
        elapsed: u32,
        /// Annual ascendant sign index (0 = Mesha)
        #[arg(long)]
        annual_asc: u8,
    },
    /// Mudda dasha periods from a start instant
    Mudda {
        /// Start Julian Date (UT)
        #[arg(long)]
        start_jd: f64,
        /// Starting graha (Sanskrit or English name)
        #[arg(long)]
        owner: Graha,
    },
    /// Rashi from sidereal longitude
    Rashi {
        /// Sidereal ecliptic longitude in degrees
        lon: f64,
    },
    /// Nakshatra from sidereal longitude
    Nakshatra {
        /// Sidereal ecliptic longitude in degrees
        lon: f64,
    },
}

fn natal_chart(settings: &Settings, date: UtcTime, lat: f64, lon: f64) -> Result<NatalChart> {
    let location = GeoLocation::new(lat, lon, 0.0);
    location.validate().context("invalid birth location")?;
    NatalChart::from_oracle(&settings.ephemeris(), &settings.houses(), date, location)
        .context("failed to cast natal chart")
}

fn print_annual(timing: &AnnualTiming) {
    let chart = &timing.chart;
    println!("Varsha Pravesha {}", chart.target_year);
    println!("  Solar return: {} (JD {:.6})", chart.instant.to_utc(), chart.instant.jd());
    let asc = rashi_from_longitude(chart.ascendant_deg);
    println!(
        "  Lagna: {} {:.4} deg ({:.4})",
        asc.rashi.name(),
        asc.degrees_in_rashi,
        chart.ascendant_deg
    );
    println!();
    println!("  {:<10} {:>10} {:>8} {:>5}", "Graha", "Longitude", "Speed", "House");
    for p in &chart.planets {
        println!(
            "  {:<10} {:>10.4} {:>8.4} {:>5}{}",
            p.graha.name(),
            p.longitude_deg,
            p.speed_deg_per_day,
            p.house,
            if p.is_retrograde() { " R" } else { "" }
        );
    }
    println!();
    println!(
        "  Muntha: {} (house {}, lord {})",
        timing.muntha.rashi.name(),
        timing.muntha.house,
        timing.muntha.lord.name()
    );
    println!("  Year lord: {} ({:?})", timing.year_lord.graha.name(), timing.year_lord.role);
    for c in &timing.year_lord.candidates {
        println!(
            "    {:<14} {:<8} house {:>2} {:?} score {}",
            format!("{:?}", c.role),
            c.graha.name(),
            c.house,
            c.dignity,
            c.score
        );
    }
    println!();
    println!("  Aspects:");
    for a in &timing.aspects {
        println!(
            "    {} {} {} orb {:.2} {}",
            a.first.name(),
            a.aspect.name(),
            a.second.name(),
            a.orb_deg,
            if a.applying { "applying" } else { "separating" }
        );
    }
    println!();
    println!("  Sahams:");
    for s in &timing.sahams {
        println!(
            "    {:<11} {:>9.4} house {:>2}",
            s.saham.name(),
            s.longitude_deg,
            s.house
        );
    }
    println!();
    println!("  Mudda dasha:");
    for p in &timing.mudda {
        println!(
            "    {:<8} {} - {} ({} d)",
            p.graha.name(),
            p.start.to_utc(),
            p.end().to_utc(),
            p.duration_days
        );
    }
}

fn run(cli: Cli) -> Result<()> {
    let settings = Settings::load(cli.config.as_deref()).context("failed to load settings")?;
    debug!(?settings, "settings");

    match cli.command {
        Commands::Annual {
            date,
            lat,
            lon,
            year,
            json,
        } => {
            let natal = natal_chart(&settings, date, lat, lon)?;
            let timing = compute_annual_timing(
                &settings.ephemeris(),
                &settings.houses(),
                &natal,
                year,
                &settings.tajika_config(),
            )?;
            if json {
                println!("{}", serde_json::to_string_pretty(&timing)?);
            } else {
                print_annual(&timing);
            }
        }

        Commands::SolarReturn {
            date,
            lat,
            lon,
            year,
        } => {
            let natal = natal_chart(&settings, date, lat, lon)?;
            let eph = settings.ephemeris();
            let adapter = EphemerisAdapter::new(&eph, &natal.location);
            let sr = solve_solar_return(
                &adapter,
                natal.sun_longitude(),
                &natal.birth,
                year,
                &settings.tajika_config().solar_return,
            )?;
            println!(
                "Solar return {year}: {} (JD {:.6}), Sun {:.6} deg",
                sr.instant.to_utc(),
                sr.instant.jd(),
                sr.sun_longitude_deg
            );
        }

        Commands::Muntha {
            natal_asc,
            elapsed,
            annual_asc,
        } => {
            let m = advance_muntha(natal_asc, elapsed, annual_asc)?;
            println!(
                "Muntha: {} (index {}), house {}, lord {}",
                m.rashi.name(),
                m.sign_index,
                m.house,
                m.lord.name()
            );
        }

        Commands::Mudda { start_jd, owner } => {
            let start = Instant::from_jd(start_jd)?;
            for p in partition_mudda(start, owner) {
                println!(
                    "{:<8} {} {:>4} d",
                    p.graha.name(),
                    p.start.to_utc(),
                    p.duration_days
                );
            }
        }

        Commands::Rashi { lon } => {
            if !lon.is_finite() {
                bail!("longitude must be finite");
            }
            let info = rashi_from_longitude(lon);
            println!(
                "{} ({}) - {:.4} deg in rashi",
                info.rashi.name(),
                info.rashi.western_name(),
                info.degrees_in_rashi
            );
        }

        Commands::Nakshatra { lon } => {
            if !lon.is_finite() {
                bail!("longitude must be finite");
            }
            let info = nakshatra_from_longitude(lon);
            println!(
                "{} (index {}) - Pada {} ({:.4} deg in nakshatra), lord {}",
                info.nakshatra.name(),
                info.nakshatra_index,
                info.pada,
                info.degrees_in_nakshatra,
                info.lord.name()
            );
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    run(Cli::parse())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_annual_arguments() {
        let cli = Cli::try_parse_from([
            "varsha",
            "annual",
            "--date",
            "1985-08-15T04:30:00Z",
            "--lat",
            "28.6",
            "--lon",
            "-77.2",
            "--year",
            "2015",
        ])
        .unwrap();
        match cli.command {
            Commands::Annual { date, lon, year, json, .. } => {
                assert_eq!(date.year, 1985);
                assert_eq!(lon, -77.2);
                assert_eq!(year, 2015);
                assert!(!json);
            }
            _ => panic!("wrong subcommand"),
        }
    }

    #[test]
    fn parses_graha_owner() {
        let cli = Cli::try_parse_from(["varsha", "mudda", "--start-jd", "2460000.5", "--owner", "saturn"])
            .unwrap();
        assert!(matches!(
            cli.command,
            Commands::Mudda {
                owner: Graha::Shani,
                ..
            }
        ));
    }
}
