//! Latitude/longitude bounding boxes for fitting the map view.

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct GeoBounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl GeoBounds {
    /// Smallest box holding every `[latitude, longitude]` point, `None` for no points.
    pub fn from_points(points: impl IntoIterator<Item = [f64; 2]>) -> Option<Self> {
        points.into_iter().fold(None, |bounds, [latitude, longitude]| {
            Some(match bounds {
                None => Self {
                    south: latitude,
                    west: longitude,
                    north: latitude,
                    east: longitude,
                },
                Some(bounds) => Self {
                    south: bounds.south.min(latitude),
                    west: bounds.west.min(longitude),
                    north: bounds.north.max(latitude),
                    east: bounds.east.max(longitude),
                },
            })
        })
    }

    /// Grows every side by `ratio` of the box's own height/width, the way
    /// Leaflet's `LatLngBounds.pad` does.
    pub fn pad(&self, ratio: f64) -> Self {
        let height_buffer = (self.north - self.south).abs() * ratio;
        let width_buffer = (self.east - self.west).abs() * ratio;
        Self {
            south: self.south - height_buffer,
            west: self.west - width_buffer,
            north: self.north + height_buffer,
            east: self.east + width_buffer,
        }
    }

    pub fn contains(&self, [latitude, longitude]: [f64; 2]) -> bool {
        (self.south..=self.north).contains(&latitude) && (self.west..=self.east).contains(&longitude)
    }

    /// `[[south, west], [north, east]]`, the corner pair Leaflet accepts as bounds.
    pub fn corners(&self) -> [[f64; 2]; 2] {
        [[self.south, self.west], [self.north, self.east]]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trips::TRIPS;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn no_points_no_bounds() {
        assert_eq!(GeoBounds::from_points(std::iter::empty()), None);
    }

    #[test]
    fn single_point_is_degenerate_box() {
        let bounds = GeoBounds::from_points([[10.0, 20.0]]).unwrap();
        assert_eq!(bounds.corners(), [[10.0, 20.0], [10.0, 20.0]]);
        assert_eq!(bounds.pad(0.3), bounds);
    }

    #[test]
    fn two_trips_are_enclosed_with_padding() {
        let bounds = GeoBounds::from_points(TRIPS.iter().map(|trip| trip.coordinates)).unwrap();
        assert!(close(bounds.south, 35.6762));
        assert!(close(bounds.north, 46.5597));
        assert!(close(bounds.west, 7.9949));
        assert!(close(bounds.east, 139.6503));

        let padded = bounds.pad(0.3);
        let height = 46.5597 - 35.6762;
        let width = 139.6503 - 7.9949;
        assert!(close(padded.south, 35.6762 - height * 0.3));
        assert!(close(padded.north, 46.5597 + height * 0.3));
        assert!(close(padded.west, 7.9949 - width * 0.3));
        assert!(close(padded.east, 139.6503 + width * 0.3));
        for trip in &TRIPS {
            assert!(padded.contains(trip.coordinates));
        }
    }

    #[test]
    fn bounds_ignore_point_order() {
        let a = GeoBounds::from_points([[1.0, -5.0], [-3.0, 8.0], [2.0, 0.0]]).unwrap();
        let b = GeoBounds::from_points([[2.0, 0.0], [1.0, -5.0], [-3.0, 8.0]]).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.corners(), [[-3.0, -5.0], [2.0, 8.0]]);
    }
}
