//! The 16 fixed Chilean regions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Administrative region of Chile, north to south.
///
/// Serialized with the Spanish display name so persisted sightings match
/// what the forms show.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    #[serde(rename = "Arica y Parinacota")]
    AricaYParinacota,
    #[serde(rename = "Tarapacá")]
    Tarapaca,
    #[serde(rename = "Antofagasta")]
    Antofagasta,
    #[serde(rename = "Atacama")]
    Atacama,
    #[serde(rename = "Coquimbo")]
    Coquimbo,
    #[serde(rename = "Valparaíso")]
    Valparaiso,
    #[serde(rename = "Metropolitana de Santiago")]
    MetropolitanaDeSantiago,
    #[serde(rename = "O'Higgins")]
    OHiggins,
    #[serde(rename = "Maule")]
    Maule,
    #[serde(rename = "Ñuble")]
    Nuble,
    #[serde(rename = "Biobío")]
    Biobio,
    #[serde(rename = "La Araucanía")]
    LaAraucania,
    #[serde(rename = "Los Ríos")]
    LosRios,
    #[serde(rename = "Los Lagos")]
    LosLagos,
    #[serde(rename = "Aysén")]
    Aysen,
    #[serde(rename = "Magallanes")]
    Magallanes,
}

impl Region {
    /// All regions in geographic order, for dropdowns.
    pub const ALL: [Region; 16] = [
        Region::AricaYParinacota,
        Region::Tarapaca,
        Region::Antofagasta,
        Region::Atacama,
        Region::Coquimbo,
        Region::Valparaiso,
        Region::MetropolitanaDeSantiago,
        Region::OHiggins,
        Region::Maule,
        Region::Nuble,
        Region::Biobio,
        Region::LaAraucania,
        Region::LosRios,
        Region::LosLagos,
        Region::Aysen,
        Region::Magallanes,
    ];

    /// Spanish display name, identical to the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::AricaYParinacota => "Arica y Parinacota",
            Region::Tarapaca => "Tarapacá",
            Region::Antofagasta => "Antofagasta",
            Region::Atacama => "Atacama",
            Region::Coquimbo => "Coquimbo",
            Region::Valparaiso => "Valparaíso",
            Region::MetropolitanaDeSantiago => "Metropolitana de Santiago",
            Region::OHiggins => "O'Higgins",
            Region::Maule => "Maule",
            Region::Nuble => "Ñuble",
            Region::Biobio => "Biobío",
            Region::LaAraucania => "La Araucanía",
            Region::LosRios => "Los Ríos",
            Region::LosLagos => "Los Lagos",
            Region::Aysen => "Aysén",
            Region::Magallanes => "Magallanes",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not one of the 16 region names.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Unknown region: {0}")]
pub struct UnknownRegion(pub String);

impl FromStr for Region {
    type Err = UnknownRegion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Region::ALL
            .iter()
            .find(|r| r.as_str() == s)
            .copied()
            .ok_or_else(|| UnknownRegion(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sixteen_regions() {
        assert_eq!(Region::ALL.len(), 16);
    }

    #[test]
    fn parse_round_trip() {
        for region in Region::ALL {
            assert_eq!(region.as_str().parse::<Region>(), Ok(region));
        }
    }

    #[test]
    fn unknown_region_rejected() {
        let err = "Patagonia".parse::<Region>().unwrap_err();
        assert_eq!(err, UnknownRegion("Patagonia".into()));
    }

    #[test]
    fn serializes_as_display_name() {
        let json = serde_json::to_string(&Region::Nuble).unwrap();
        assert_eq!(json, "\"Ñuble\"");
        let back: Region = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Region::Nuble);
    }
}
