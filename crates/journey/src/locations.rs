//! The itinerary: a fixed, ordered list of journal locations.
//!
//! The dataset is embedded at compile time and deserialized once into the
//! [`LocationList`] resource at startup. It is never mutated afterwards;
//! every other piece of state (journey phase, route, selection) refers to
//! locations by index into this list.

use bevy::prelude::*;
use serde::Deserialize;

/// The embedded itinerary document.
const EMBEDDED_LOCATIONS: &str = include_str!("../data/locations.json");

/// A photo attached to a location, anchored to its own coordinate.
#[derive(Debug, Clone, Deserialize)]
pub struct Photo {
    pub url: String,
    /// `[longitude, latitude]` in degrees.
    pub coordinates: [f64; 2],
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default)]
    pub taken_at: Option<String>,
}

/// One stop of the journey.
#[derive(Debug, Clone, Deserialize)]
pub struct Location {
    pub id: u32,
    pub name: String,
    /// `[longitude, latitude]` in degrees.
    pub coordinates: [f64; 2],
    /// Date-range label, e.g. `"11/27/24 - 11/30/24"`.
    pub dates: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub photos: Vec<Photo>,
}

impl Location {
    /// Coordinate pair as a `Vec2` (`x` = longitude, `y` = latitude).
    pub fn lon_lat(&self) -> Vec2 {
        Vec2::new(self.coordinates[0] as f32, self.coordinates[1] as f32)
    }
}

/// The ordered itinerary, loaded once and read-only afterwards.
#[derive(Resource, Debug, Clone)]
pub struct LocationList(Vec<Location>);

impl LocationList {
    /// Deserialize the embedded itinerary. A malformed document is a
    /// programmer error and fails loudly at startup.
    pub fn load_embedded() -> Self {
        Self(
            serde_json::from_str(EMBEDDED_LOCATIONS)
                .expect("embedded itinerary JSON is well-formed"),
        )
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Location> {
        self.0.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Location> {
        self.0.iter()
    }
}

impl std::ops::Index<usize> for LocationList {
    type Output = Location;

    fn index(&self, index: usize) -> &Location {
        &self.0[index]
    }
}

/// Index of the location whose detail overlay is open, if any.
///
/// Written by the marker-activation handler and the overlay's dismiss
/// actions; read by the overlay itself.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SelectedLocation(pub Option<usize>);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_itinerary_loads() {
        let list = LocationList::load_embedded();
        assert_eq!(list.len(), 8);
        assert_eq!(list[0].name, "Tokyo");
        assert_eq!(list[7].name, "Tokyo");
        // The journey loops back home: first and last stops share a coordinate.
        assert_eq!(list[0].coordinates, list[7].coordinates);
    }

    #[test]
    fn test_ids_are_sequential_and_unique() {
        let list = LocationList::load_embedded();
        for (i, loc) in list.iter().enumerate() {
            assert_eq!(loc.id as usize, i + 1);
        }
    }

    #[test]
    fn test_photos_default_to_empty() {
        let list = LocationList::load_embedded();
        assert!(!list[0].photos.is_empty());
        assert!(list[1].photos.is_empty());
    }

    #[test]
    fn test_lon_lat_order() {
        let list = LocationList::load_embedded();
        let tokyo = list[0].lon_lat();
        // Longitude (x) is the larger component for Japan.
        assert!(tokyo.x > 100.0 && tokyo.y < 60.0);
    }
}
