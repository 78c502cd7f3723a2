use geo::{BoundingRect, Contains, MultiPolygon, Point};
use rstar::{primitives::GeomWithData, RTree, AABB};

/// A point-valued NO2 measurement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StationReading {
    pub location: Point<f64>,
    pub no2: f64,
}

/// Station position indexed by its position in the readings list.
type IndexedStation = GeomWithData<[f64; 2], usize>;

/// Attribute station readings to the regions that contain them.
///
/// Returns one entry per region, in region order. A region that contains no
/// station gets `None`. When several stations fall inside one region, the
/// station that comes last in `stations` wins; values are never averaged.
/// Containment follows [`Contains`], so a station lying exactly on a region
/// boundary is not attributed to it.
pub fn attribute_stations(regions: &[MultiPolygon<f64>], stations: &[StationReading]) -> Vec<Option<f64>> {
    let rtree = RTree::bulk_load(
        stations.iter().enumerate()
            .map(|(i, station)| IndexedStation::new([station.location.x(), station.location.y()], i))
            .collect()
    );

    regions.iter()
        .map(|region| {
            let rect = region.bounding_rect()?;
            let envelope = AABB::from_corners([rect.min().x, rect.min().y], [rect.max().x, rect.max().y]);
            rtree.locate_in_envelope(&envelope)
                .map(|candidate| candidate.data)
                .filter(|&i| region.contains(&stations[i].location))
                .max()
                .map(|i| stations[i].no2)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{polygon, MultiPolygon};

    fn square(x0: f64, y0: f64, size: f64) -> MultiPolygon<f64> {
        MultiPolygon(vec![polygon![
            (x: x0, y: y0),
            (x: x0 + size, y: y0),
            (x: x0 + size, y: y0 + size),
            (x: x0, y: y0 + size),
            (x: x0, y: y0),
        ]])
    }

    fn reading(x: f64, y: f64, no2: f64) -> StationReading {
        StationReading { location: Point::new(x, y), no2 }
    }

    #[test]
    fn last_station_in_order_wins() {
        let regions = [square(0.0, 0.0, 10.0)];
        let stations = [reading(2.0, 2.0, 5.0), reading(8.0, 8.0, 9.0)];
        assert_eq!(attribute_stations(&regions, &stations), vec![Some(9.0)]);

        let reversed = [stations[1], stations[0]];
        assert_eq!(attribute_stations(&regions, &reversed), vec![Some(5.0)]);
    }

    #[test]
    fn region_without_station_is_none() {
        let regions = [square(0.0, 0.0, 1.0), square(5.0, 5.0, 1.0)];
        let stations = [reading(0.5, 0.5, 31.0)];
        assert_eq!(attribute_stations(&regions, &stations), vec![Some(31.0), None]);
    }

    #[test]
    fn stations_outside_every_region_are_ignored() {
        let regions = [square(0.0, 0.0, 1.0)];
        let stations = [reading(0.5, 0.5, 12.0), reading(3.0, 3.0, 99.0)];
        assert_eq!(attribute_stations(&regions, &stations), vec![Some(12.0)]);
    }

    #[test]
    fn boundary_station_is_not_contained() {
        let regions = [square(0.0, 0.0, 1.0)];
        let stations = [reading(1.0, 0.5, 40.0)];
        assert_eq!(attribute_stations(&regions, &stations), vec![None]);
    }

    #[test]
    fn bounding_box_hit_outside_shape_is_rejected() {
        // L-shaped region: the point sits inside the bounding box but outside the shape.
        let region = MultiPolygon(vec![polygon![
            (x: 0.0, y: 0.0), (x: 4.0, y: 0.0), (x: 4.0, y: 1.0),
            (x: 1.0, y: 1.0), (x: 1.0, y: 4.0), (x: 0.0, y: 4.0), (x: 0.0, y: 0.0),
        ]]);
        let stations = [reading(3.0, 3.0, 50.0)];
        assert_eq!(attribute_stations(&[region], &stations), vec![None]);
    }

    #[test]
    fn no_stations_means_no_values() {
        let regions = [square(0.0, 0.0, 1.0)];
        assert_eq!(attribute_stations(&regions, &[]), vec![None]);
    }
}
