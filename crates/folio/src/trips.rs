//! Trips plotted on the travel map.
//!
//! Add new trips to [`TRIPS`]; the map picks them up on the next build. Every
//! `id` needs a matching `id="trip-{id}"` section on the travel page.

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Trip {
    pub id: &'static str,
    pub title: &'static str,
    pub location: &'static str,
    pub date: &'static str,
    /// `[latitude, longitude]`
    pub coordinates: [f64; 2],
}

impl Trip {
    /// Id of the page section holding this trip's photos.
    pub fn anchor_id(&self) -> String {
        format!("trip-{}", self.id)
    }

    pub fn anchor_href(&self) -> String {
        format!("#{}", self.anchor_id())
    }
}

pub static TRIPS: [Trip; 2] = [
    Trip {
        id: "switzerland",
        title: "The Swiss Alps",
        location: "Switzerland",
        date: "June 2024",
        // Interlaken
        coordinates: [46.5597, 7.9949],
    },
    Trip {
        id: "japan",
        title: "Cherry Blossom Season",
        location: "Japan",
        date: "April 2024",
        // Tokyo
        coordinates: [35.6762, 139.6503],
    },
];
