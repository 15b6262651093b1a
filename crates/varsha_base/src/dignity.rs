//! Sign-based dignity of the classical grahas.
//!
//! Exaltation/debilitation points and own-sign ownership per BPHS. Rahu and
//! Ketu carry no sign dignity here; every lookup for them is `Neutral`.

use serde::Serialize;

use crate::graha::Graha;
use crate::rashi::rashi_index_of;

/// Exaltation degree (sidereal) for sapta grahas. Returns None for Rahu/Ketu.
///
/// Sun 10 Ari, Moon 3 Tau, Mars 28 Cap, Mercury 15 Vir,
/// Jupiter 5 Can, Venus 27 Pis, Saturn 20 Lib.
pub const fn exaltation_degree(graha: Graha) -> Option<f64> {
    match graha {
        Graha::Surya => Some(10.0),
        Graha::Chandra => Some(33.0),
        Graha::Mangal => Some(298.0),
        Graha::Buddh => Some(165.0),
        Graha::Guru => Some(95.0),
        Graha::Shukra => Some(357.0),
        Graha::Shani => Some(200.0),
        Graha::Rahu | Graha::Ketu => None,
    }
}

/// Debilitation degree = exaltation + 180 mod 360. Returns None for Rahu/Ketu.
pub const fn debilitation_degree(graha: Graha) -> Option<f64> {
    match exaltation_degree(graha) {
        Some(e) => {
            let d = e + 180.0;
            if d >= 360.0 { Some(d - 360.0) } else { Some(d) }
        }
        None => None,
    }
}

/// Own-sign rashi indices. Empty for Rahu/Ketu.
pub const fn own_signs(graha: Graha) -> &'static [u8] {
    match graha {
        Graha::Surya => &[4],
        Graha::Chandra => &[3],
        Graha::Mangal => &[0, 7],
        Graha::Buddh => &[2, 5],
        Graha::Guru => &[8, 11],
        Graha::Shukra => &[1, 6],
        Graha::Shani => &[9, 10],
        Graha::Rahu | Graha::Ketu => &[],
    }
}

/// Coarse sign dignity: the extremes only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SignDignity {
    Exalted,
    OwnSign,
    Debilitated,
    Neutral,
}

/// Dignity of a graha occupying the given rashi (0-based).
///
/// Exaltation is checked before own sign; Mercury in Kanya is exalted, not
/// merely in its own sign.
pub fn sign_dignity(graha: Graha, rashi_index: u8) -> SignDignity {
    let rashi_index = rashi_index % 12;
    if let Some(ex) = exaltation_degree(graha) {
        if rashi_index_of(ex) == rashi_index {
            return SignDignity::Exalted;
        }
    }
    if own_signs(graha).contains(&rashi_index) {
        return SignDignity::OwnSign;
    }
    if let Some(deb) = debilitation_degree(graha) {
        if rashi_index_of(deb) == rashi_index {
            return SignDignity::Debilitated;
        }
    }
    SignDignity::Neutral
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graha::SAPTA_GRAHAS;

    #[test]
    fn debilitation_opposes_exaltation() {
        assert_eq!(debilitation_degree(Graha::Surya), Some(190.0));
        assert_eq!(debilitation_degree(Graha::Shukra), Some(177.0));
        assert_eq!(debilitation_degree(Graha::Rahu), None);
    }

    #[test]
    fn sun_dignities() {
        assert_eq!(sign_dignity(Graha::Surya, 0), SignDignity::Exalted);
        assert_eq!(sign_dignity(Graha::Surya, 4), SignDignity::OwnSign);
        assert_eq!(sign_dignity(Graha::Surya, 6), SignDignity::Debilitated);
        assert_eq!(sign_dignity(Graha::Surya, 2), SignDignity::Neutral);
    }

    #[test]
    fn mercury_in_kanya_is_exalted() {
        assert_eq!(sign_dignity(Graha::Buddh, 5), SignDignity::Exalted);
        assert_eq!(sign_dignity(Graha::Buddh, 2), SignDignity::OwnSign);
        assert_eq!(sign_dignity(Graha::Buddh, 11), SignDignity::Debilitated);
    }

    #[test]
    fn nodes_are_neutral_everywhere() {
        for r in 0..12 {
            assert_eq!(sign_dignity(Graha::Rahu, r), SignDignity::Neutral);
            assert_eq!(sign_dignity(Graha::Ketu, r), SignDignity::Neutral);
        }
    }

    #[test]
    fn each_classical_graha_has_exactly_one_exaltation_sign() {
        for g in SAPTA_GRAHAS {
            let count = (0..12)
                .filter(|&r| sign_dignity(g, r) == SignDignity::Exalted)
                .count();
            assert_eq!(count, 1, "{g}");
        }
    }
}
