// End-to-end tests: source files on disk, through the loaders and the store,
// out to the aggregates, the city report and the GeoJSON export.

use std::{fs, path::Path};

use velo_air::{
    city::CityRecord,
    load::{load_declared_regions, load_linear_assets},
    metrics::{self, PollutionClass},
    pipeline::build_database,
    report::{export_geojson, CityReport},
    City, Error, Store,
};

const LONDON_LANES: &str = r#"{"type": "FeatureCollection", "features": [
    {"type": "Feature", "properties": {"Shape_Leng": 100.0},
     "geometry": {"type": "LineString", "coordinates": [[0.0, 0.0, 5.0], [2.0, 0.0, 5.0]]}},
    {"type": "Feature", "properties": {"Shape_Leng": 200.0},
     "geometry": {"type": "MultiLineString", "coordinates": [[[0.0, 2.0], [2.0, 2.0]]]}}
]}"#;

const LONDON_BOROUGHS: &str = r#"{"type": "FeatureCollection", "features": [
    {"type": "Feature", "properties": {"borough_name": "Camden", "Average concentration roadside*": 10.0},
     "geometry": {"type": "Polygon", "coordinates": [[[0, 0], [1, 0], [1, 1], [0, 1], [0, 0]]]}},
    {"type": "Feature", "properties": {"borough_name": "Hackney", "Average concentration roadside*": 30.0},
     "geometry": {"type": "MultiPolygon", "coordinates": [[[[1, 0], [2, 0], [2, 1], [1, 1], [1, 0]]]]}}
]}"#;

const BERLIN_LANES: &str = r#"{"type": "FeatureCollection", "features": [
    {"type": "Feature", "properties": {"LAENGE": 50.0},
     "geometry": {"type": "LineString", "coordinates": [[13.3, 52.5], [13.4, 52.5]]}}
]}"#;

const BERLIN_DISTRICTS: &str = r#"{"type": "FeatureCollection", "features": [
    {"type": "Feature", "properties": {"Gemeinde_name": "Mitte"},
     "geometry": {"type": "Polygon", "coordinates": [[[0, 0], [10, 0], [10, 10], [0, 10], [0, 0]]]}},
    {"type": "Feature", "properties": {"Gemeinde_name": "Pankow"},
     "geometry": {"type": "Polygon", "coordinates": [[[20, 20], [30, 20], [30, 30], [20, 30], [20, 20]]]}}
]}"#;

// Two stations in Mitte (the later one wins), one outside every district and
// one without a reading.
const BERLIN_STATIONS: &str = "station,longitude,latitude,NO2 Average concentration \n\
    A,5.0,5.0,5.0\n\
    B,6.0,6.0,9.0\n\
    C,25.0,40.0,30.0\n\
    D,22.0,22.0,\n";

fn write_sources(dir: &Path) {
    fs::write(dir.join("CycleRoutesLondon.geojson"), LONDON_LANES).unwrap();
    fs::write(dir.join("london_NO2_borough.geojson"), LONDON_BOROUGHS).unwrap();
    fs::write(dir.join("CycleRoutesBerlin.geojson"), BERLIN_LANES).unwrap();
    fs::write(dir.join("berlin_bezirksgrenzen.geojson"), BERLIN_DISTRICTS).unwrap();
    fs::write(dir.join("berlin_NO2_per_station.csv"), BERLIN_STATIONS).unwrap();
}

fn built_store() -> Store {
    let dir = tempfile::tempdir().unwrap();
    write_sources(dir.path());
    let mut store = Store::open_in_memory().unwrap();
    build_database(&mut store, dir.path()).unwrap();
    store
}

#[test]
fn small_city_end_to_end() {
    let mut store = Store::open_in_memory().unwrap();
    store.create_schema().unwrap();
    let id = store.insert_city(&CityRecord { city: City::London, area_km2: 10.0, population: 50.0 }).unwrap();

    let lanes = load_linear_assets(LONDON_LANES.as_bytes(), "Shape_Leng", "lanes").unwrap();
    let regions = load_declared_regions(
        LONDON_BOROUGHS.as_bytes(), "borough_name", "Average concentration roadside*", "boroughs",
    ).unwrap();
    store.insert_linear_assets(id, &lanes).unwrap();
    store.insert_regions(id, &regions).unwrap();

    assert_eq!(metrics::total_length(&store, City::London).unwrap(), 300.0);
    assert_eq!(metrics::length_per_area(&store, City::London).unwrap(), 30.0);
    assert_eq!(metrics::length_per_capita(&store, City::London).unwrap(), 6.0);
    assert_eq!(metrics::total_pollution(&store, City::London).unwrap(), 40.0);
    assert_eq!(metrics::average_pollution_density(&store, City::London).unwrap(), 4.0);

    let report = CityReport::build(&store, City::London).unwrap();
    let classes: Vec<_> = report.regions.iter().map(|r| (r.name.as_str(), r.class)).collect();
    assert_eq!(classes, [("Camden", PollutionClass::Low), ("Hackney", PollutionClass::High)]);
    assert_eq!(report.centroid, [1.0, 1.0]);
}

#[test]
fn build_ingests_every_city() {
    let store = built_store();

    for city in City::ALL {
        let record = city.record();
        assert_eq!(store.city_area(city).unwrap(), record.area_km2);
        assert_eq!(store.city_population(city).unwrap(), record.population);
    }
    assert_eq!(store.linear_assets(City::London).unwrap().len(), 2);
    assert_eq!(metrics::total_length(&store, City::Berlin).unwrap(), 50.0);
}

#[test]
fn berlin_districts_take_station_readings() {
    let store = built_store();

    let regions = store.regions(City::Berlin).unwrap();
    let values: Vec<_> = regions.iter().map(|r| (r.name.as_str(), r.no2)).collect();
    assert_eq!(values, [("Mitte", Some(9.0)), ("Pankow", None)]);
    assert_eq!(metrics::total_pollution(&store, City::Berlin).unwrap(), 9.0);

    let report = CityReport::build(&store, City::Berlin).unwrap();
    assert_eq!(report.regions[0].class, PollutionClass::Low);
    assert_eq!(report.regions[1].class, PollutionClass::NoData);
    assert_eq!(report.regions[1].fill_color.to_string(), "rgb(128,128,128)");
}

#[test]
fn rebuild_replaces_previous_contents() {
    let dir = tempfile::tempdir().unwrap();
    write_sources(dir.path());
    let mut store = Store::open_in_memory().unwrap();
    build_database(&mut store, dir.path()).unwrap();
    build_database(&mut store, dir.path()).unwrap();
    assert_eq!(metrics::total_length(&store, City::London).unwrap(), 300.0);
}

#[test]
fn malformed_source_aborts_its_city() {
    let dir = tempfile::tempdir().unwrap();
    write_sources(dir.path());
    fs::write(
        dir.path().join("CycleRoutesBerlin.geojson"),
        r#"{"type": "FeatureCollection", "features": [
            {"type": "Feature", "properties": {"LENGTH": 50.0},
             "geometry": {"type": "LineString", "coordinates": [[13.3, 52.5], [13.4, 52.5]]}}
        ]}"#,
    ).unwrap();

    let mut store = Store::open_in_memory().unwrap();
    let err = build_database(&mut store, dir.path()).unwrap_err();
    match err {
        Error::Ingest { city, source } => {
            assert_eq!(city, "Berlin");
            assert!(matches!(*source, Error::MalformedSource { .. }), "{source:?}");
        }
        other => panic!("unexpected error: {other:?}"),
    }

    // London went in before Berlin failed; nothing of Berlin did.
    assert_eq!(metrics::total_length(&store, City::London).unwrap(), 300.0);
    assert!(store.city_id(City::Berlin).unwrap_err().is_not_found());
}

#[test]
fn missing_source_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    write_sources(dir.path());
    fs::remove_file(dir.path().join("berlin_NO2_per_station.csv")).unwrap();

    let mut store = Store::open_in_memory().unwrap();
    let err = build_database(&mut store, dir.path()).unwrap_err();
    let Error::Ingest { source, .. } = err else { panic!("unexpected error: {err:?}") };
    match *source {
        Error::Io { path, .. } => assert!(path.ends_with("berlin_NO2_per_station.csv")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn export_lists_lanes_then_regions() {
    let store = built_store();
    let collection = export_geojson(&store, City::London).unwrap();

    assert_eq!(collection["type"], "FeatureCollection");
    let features = collection["features"].as_array().unwrap();
    assert_eq!(features.len(), 4);
    assert_eq!(features[0]["properties"]["kind"], "lane");
    assert_eq!(features[0]["properties"]["length"], 100.0);
    assert_eq!(features[3]["properties"]["name"], "Hackney");
    assert_eq!(features[3]["properties"]["class"], "HIGH");
    assert_eq!(features[3]["geometry"]["type"], "MultiPolygon");
}

#[test]
fn report_needs_a_built_city() {
    let store = Store::open_in_memory().unwrap();
    store.create_schema().unwrap();
    assert!(CityReport::build(&store, City::Berlin).unwrap_err().is_not_found());
}
