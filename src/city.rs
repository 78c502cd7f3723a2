use std::{fmt, str::FromStr};

/// Supported cities. The set is closed: every city carries its own sources and
/// ingestion strategy in [`CityProfile`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum City {
    London,
    Berlin,
}

impl City {
    pub const ALL: [City; 2] = [City::London, City::Berlin];

    /// Name stored in the `City.Name` column.
    #[inline] pub fn name(self) -> &'static str { self.profile().name }

    /// Static ingestion settings for this city.
    pub fn profile(self) -> &'static CityProfile {
        match self {
            City::London => &PROFILES[0],
            City::Berlin => &PROFILES[1],
        }
    }

    /// Row inserted into `City` for this city at build time.
    pub fn record(self) -> CityRecord {
        let profile = self.profile();
        CityRecord { city: self, area_km2: profile.area_km2, population: profile.population }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for City {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        City::ALL.into_iter()
            .find(|city| city.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown city '{s}' (expected one of: London, Berlin)"))
    }
}

/// Values written to the `City` table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CityRecord {
    pub city: City,
    pub area_km2: f64,
    pub population: f64,
}

/// Source of the bike lane collection for a city.
#[derive(Debug, Clone, Copy)]
pub struct LaneSource {
    pub file: &'static str,
    /// Feature property holding the lane length in meters.
    pub length_field: &'static str,
}

/// How a city's per-region NO2 values are obtained.
#[derive(Debug, Clone, Copy)]
pub enum PollutionSource {
    /// Regions already carry one NO2 value each.
    Declared {
        file: &'static str,
        name_field: &'static str,
        no2_field: &'static str,
    },
    /// Boundaries without values, joined against point station readings.
    Stations {
        boundaries_file: &'static str,
        name_field: &'static str,
        readings_file: &'static str,
        readings: StationColumns,
    },
}

/// Column names of a station readings table.
#[derive(Debug, Clone, Copy)]
pub struct StationColumns {
    pub longitude: &'static str,
    pub latitude: &'static str,
    pub no2: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct CityProfile {
    pub name: &'static str,
    pub area_km2: f64,
    pub population: f64,
    pub lanes: LaneSource,
    pub pollution: PollutionSource,
}

static PROFILES: [CityProfile; 2] = [
    CityProfile {
        name: "London",
        area_km2: 1572.0,
        population: 8_866_000.0,
        lanes: LaneSource { file: "CycleRoutesLondon.geojson", length_field: "Shape_Leng" },
        pollution: PollutionSource::Declared {
            file: "london_NO2_borough.geojson",
            name_field: "borough_name",
            no2_field: "Average concentration roadside*",
        },
    },
    CityProfile {
        name: "Berlin",
        area_km2: 891.0,
        population: 3_432_000.0,
        lanes: LaneSource { file: "CycleRoutesBerlin.geojson", length_field: "LAENGE" },
        pollution: PollutionSource::Stations {
            boundaries_file: "berlin_bezirksgrenzen.geojson",
            name_field: "Gemeinde_name",
            readings_file: "berlin_NO2_per_station.csv",
            // The source header has a trailing space.
            readings: StationColumns {
                longitude: "longitude",
                latitude: "latitude",
                no2: "NO2 Average concentration ",
            },
        },
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profiles_line_up_with_variants() {
        for city in City::ALL {
            assert_eq!(city.profile().name, city.to_string());
            assert!(city.profile().area_km2 > 0.0);
            assert!(city.profile().population > 0.0);
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("berlin".parse::<City>(), Ok(City::Berlin));
        assert_eq!(" LONDON ".parse::<City>(), Ok(City::London));
        assert!("Paris".parse::<City>().is_err());
    }

    #[test]
    fn strategies_differ_per_city() {
        assert!(matches!(City::London.profile().pollution, PollutionSource::Declared { .. }));
        assert!(matches!(City::Berlin.profile().pollution, PollutionSource::Stations { .. }));
        assert_eq!(City::Berlin.profile().lanes.length_field, "LAENGE");
    }
}
