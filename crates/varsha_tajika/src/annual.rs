//! Annual timing: the full Varsha computation for one target year.

use serde::Serialize;
use tracing::{info, info_span};

use varsha_base::Graha;
use varsha_core::{Ephemeris, HouseSystem};

use crate::adapter::EphemerisAdapter;
use crate::aspect::find_aspects;
use crate::aspect_types::{AspectConfig, TajikaAspectRecord};
use crate::chart::{AnnualChart, build_annual_chart};
use crate::error::TajikaError;
use crate::mudda::{MuddaPeriod, mudda_start_owner, partition_mudda};
use crate::muntha::{Muntha, advance_muntha};
use crate::natal::NatalChart;
use crate::saham::{SahamConfig, SahamPoint, compute_all_sahams};
use crate::solar_return::solve_solar_return;
use crate::solar_return_types::{SolarReturn, SolarReturnConfig};
use crate::year_lord::{YearLord, select_year_lord};

/// Engine settings.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TajikaConfig {
    pub solar_return: SolarReturnConfig,
    pub aspects: AspectConfig,
    pub sahams: SahamConfig,
}

impl TajikaConfig {
    pub fn validate(&self) -> Result<(), &'static str> {
        self.solar_return.validate()?;
        self.aspects.validate()
    }
}

/// Everything computed for one (natal chart, target year).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnualTiming {
    pub solar_return: SolarReturn,
    pub chart: AnnualChart,
    pub muntha: Muntha,
    pub year_lord: YearLord,
    pub sahams: Vec<SahamPoint>,
    pub aspects: Vec<TajikaAspectRecord>,
    pub mudda: [MuddaPeriod; 9],
}

/// Compute the annual chart and its derived timing for `target_year`.
///
/// Fails with [`TajikaError::InvalidYear`] before any oracle call when
/// `target_year` precedes the birth year.
pub fn compute_annual_timing<E, H>(
    ephemeris: &E,
    houses: &H,
    natal: &NatalChart,
    target_year: i32,
    config: &TajikaConfig,
) -> Result<AnnualTiming, TajikaError>
where
    E: Ephemeris + ?Sized,
    H: HouseSystem + ?Sized,
{
    let _span = info_span!("annual_timing", target_year).entered();

    let birth_year = natal.birth_year();
    if target_year < birth_year {
        return Err(TajikaError::InvalidYear {
            target_year,
            birth_year,
        });
    }
    config.validate().map_err(TajikaError::InvalidInput)?;

    let adapter = EphemerisAdapter::new(ephemeris, &natal.location);
    let solar_return = solve_solar_return(
        &adapter,
        natal.sun_longitude(),
        &natal.birth,
        target_year,
        &config.solar_return,
    )?;

    let chart = build_annual_chart(&adapter, houses, solar_return.instant, target_year)?;

    let elapsed_years = (target_year - birth_year) as u32;
    let muntha = advance_muntha(natal.ascendant_sign(), elapsed_years, chart.ascendant_sign())?;
    let year_lord = select_year_lord(&chart, &muntha);
    let sahams = compute_all_sahams(&chart, &config.sahams);
    let aspects = find_aspects(&chart, &config.aspects);

    let owner = mudda_start_owner(chart.planet(Graha::Chandra).longitude_deg);
    let mudda = partition_mudda(solar_return.instant, owner);

    info!(
        target_year,
        jd = solar_return.instant.jd(),
        year_lord = %year_lord.graha,
        muntha_sign = muntha.sign_index,
        aspects = aspects.len(),
        "annual timing computed"
    );

    Ok(AnnualTiming {
        solar_return,
        chart,
        muntha,
        year_lord,
        sahams,
        aspects,
        mudda,
    })
}
