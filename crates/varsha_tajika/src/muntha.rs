//! Muntha: the natal ascendant sign progressed one sign per elapsed year.

use serde::Serialize;

use varsha_base::{ALL_RASHIS, Graha, Rashi, rashi_lord_by_index};

use crate::error::TajikaError;

/// Progressed Muntha for one annual chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Muntha {
    /// 0-based sign index.
    pub sign_index: u8,
    pub rashi: Rashi,
    /// House 1-12 counted from the annual ascendant sign.
    pub house: u8,
    /// Lord of the Muntha sign.
    pub lord: Graha,
}

/// Advance the natal ascendant sign by `elapsed_years` signs.
///
/// `house` is 1 when the Muntha falls in the annual ascendant sign and wraps
/// to 12, never 0.
pub fn advance_muntha(
    natal_asc_sign: u8,
    elapsed_years: u32,
    annual_asc_sign: u8,
) -> Result<Muntha, TajikaError> {
    if natal_asc_sign > 11 || annual_asc_sign > 11 {
        return Err(TajikaError::InvalidInput("sign index must be 0-11"));
    }
    let sign_index = ((natal_asc_sign as u32 + elapsed_years % 12) % 12) as u8;
    let house = ((sign_index + 12 - annual_asc_sign) % 12) + 1;
    Ok(Muntha {
        sign_index,
        rashi: ALL_RASHIS[sign_index as usize],
        house,
        lord: rashi_lord_by_index(sign_index),
    })
}
