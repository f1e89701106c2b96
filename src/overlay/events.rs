//! Natural-event records and their category styling.
//!
//! The overlay consumes a bundled snapshot of open natural events (the
//! same record shape a live feed would produce): a title, a category
//! title, and a lon/lat coordinate pair.

use bevy::prelude::*;

/// Event categories with distinct marker styling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventCategory {
    Wildfires,
    Volcanoes,
    Earthquakes,
    Floods,
    Storms,
    Droughts,
    DustHaze,
    SeaLakeIce,
    Snow,
    Landslides,
    Manmade,
}

impl EventCategory {
    /// All categories, for filter controls.
    pub const ALL: &'static [EventCategory] = &[
        EventCategory::Wildfires,
        EventCategory::Volcanoes,
        EventCategory::Earthquakes,
        EventCategory::Floods,
        EventCategory::Storms,
        EventCategory::Droughts,
        EventCategory::DustHaze,
        EventCategory::SeaLakeIce,
        EventCategory::Snow,
        EventCategory::Landslides,
        EventCategory::Manmade,
    ];

    /// Classify a free-form category title. Unrecognized titles fall into
    /// the catch-all `Manmade` bucket.
    pub fn from_title(title: &str) -> EventCategory {
        let title = title.to_lowercase();
        if title.contains("wildfire") {
            EventCategory::Wildfires
        } else if title.contains("volcano") {
            EventCategory::Volcanoes
        } else if title.contains("earthquake") {
            EventCategory::Earthquakes
        } else if title.contains("flood") {
            EventCategory::Floods
        } else if title.contains("storm") || title.contains("cyclone") || title.contains("hurricane")
        {
            EventCategory::Storms
        } else if title.contains("drought") {
            EventCategory::Droughts
        } else if title.contains("dust") || title.contains("haze") {
            EventCategory::DustHaze
        } else if title.contains("ice") {
            EventCategory::SeaLakeIce
        } else if title.contains("snow") {
            EventCategory::Snow
        } else if title.contains("landslide") {
            EventCategory::Landslides
        } else {
            EventCategory::Manmade
        }
    }

    /// Marker color for this category.
    pub fn color(self) -> Color {
        match self {
            EventCategory::Wildfires => Color::srgb(1.0, 0.27, 0.0),
            EventCategory::Volcanoes => Color::srgb(1.0, 0.0, 0.0),
            EventCategory::Earthquakes => Color::srgb(0.55, 0.27, 0.07),
            EventCategory::Floods => Color::srgb(0.0, 0.5, 1.0),
            EventCategory::Storms => Color::srgb(1.0, 1.0, 0.0),
            EventCategory::Droughts => Color::srgb(0.55, 0.27, 0.07),
            EventCategory::DustHaze => Color::srgb(1.0, 0.84, 0.0),
            EventCategory::SeaLakeIce => Color::srgb(0.53, 0.81, 0.92),
            EventCategory::Snow => Color::srgb(1.0, 1.0, 1.0),
            EventCategory::Landslides => Color::srgb(0.4, 0.26, 0.13),
            EventCategory::Manmade => Color::srgb(1.0, 0.41, 0.71),
        }
    }

    /// Base marker radius in scene units.
    pub fn marker_size(self) -> f32 {
        match self {
            EventCategory::Volcanoes => 1.0,
            EventCategory::Wildfires | EventCategory::Storms => 0.8,
            EventCategory::Floods => 0.7,
            EventCategory::Earthquakes | EventCategory::DustHaze | EventCategory::Landslides => 0.6,
            EventCategory::Droughts | EventCategory::Manmade => 0.5,
            EventCategory::SeaLakeIce | EventCategory::Snow => 0.4,
        }
    }

    /// Human-readable name.
    pub fn label(self) -> &'static str {
        match self {
            EventCategory::Wildfires => "Wildfires",
            EventCategory::Volcanoes => "Volcanoes",
            EventCategory::Earthquakes => "Earthquakes",
            EventCategory::Floods => "Floods",
            EventCategory::Storms => "Storms",
            EventCategory::Droughts => "Droughts",
            EventCategory::DustHaze => "Dust & Haze",
            EventCategory::SeaLakeIce => "Sea & Lake Ice",
            EventCategory::Snow => "Snow",
            EventCategory::Landslides => "Landslides",
            EventCategory::Manmade => "Manmade",
        }
    }
}

/// One natural-event record: where something is happening on the globe.
#[derive(Clone, Copy, Debug)]
pub struct EventRecord {
    pub title: &'static str,
    pub category_title: &'static str,
    /// Longitude in degrees, east positive.
    pub lon: f64,
    /// Latitude in degrees, north positive.
    pub lat: f64,
}

impl EventRecord {
    /// Resolved category of this record.
    pub fn category(&self) -> EventCategory {
        EventCategory::from_title(self.category_title)
    }
}

/// The bundled event snapshot.
pub fn bundled_events() -> &'static [EventRecord] {
    const EVENTS: &[EventRecord] = &[
        EventRecord {
            title: "California Wildfire Complex",
            category_title: "Wildfires",
            lon: -121.5,
            lat: 38.5,
        },
        EventRecord {
            title: "Amazon Rainforest Fire",
            category_title: "Wildfires",
            lon: -60.0,
            lat: -3.0,
        },
        EventRecord {
            title: "Australian Bushfire",
            category_title: "Wildfires",
            lon: 145.0,
            lat: -37.0,
        },
        EventRecord {
            title: "Canadian Forest Fire",
            category_title: "Wildfires",
            lon: -110.0,
            lat: 55.0,
        },
        EventRecord {
            title: "Mount Etna Activity",
            category_title: "Volcanoes",
            lon: 15.0,
            lat: 37.7,
        },
        EventRecord {
            title: "Kilauea Eruption",
            category_title: "Volcanoes",
            lon: -155.3,
            lat: 19.4,
        },
        EventRecord {
            title: "Stromboli Eruption",
            category_title: "Volcanoes",
            lon: 15.2,
            lat: 38.8,
        },
        EventRecord {
            title: "Krakatoa Activity",
            category_title: "Volcanoes",
            lon: 105.4,
            lat: -6.1,
        },
        EventRecord {
            title: "Japan Earthquake",
            category_title: "Earthquakes",
            lon: 140.0,
            lat: 36.0,
        },
        EventRecord {
            title: "California Earthquake",
            category_title: "Earthquakes",
            lon: -118.2,
            lat: 34.1,
        },
        EventRecord {
            title: "Turkey Earthquake",
            category_title: "Earthquakes",
            lon: 37.0,
            lat: 38.0,
        },
        EventRecord {
            title: "Chile Earthquake",
            category_title: "Earthquakes",
            lon: -71.0,
            lat: -33.0,
        },
        EventRecord {
            title: "Atlantic Hurricane",
            category_title: "Severe Storms",
            lon: -75.0,
            lat: 25.0,
        },
        EventRecord {
            title: "Pacific Typhoon",
            category_title: "Severe Storms",
            lon: 135.0,
            lat: 20.0,
        },
        EventRecord {
            title: "Indian Ocean Cyclone",
            category_title: "Severe Storms",
            lon: 85.0,
            lat: 15.0,
        },
        EventRecord {
            title: "Bangladesh Flood",
            category_title: "Floods",
            lon: 90.0,
            lat: 24.0,
        },
        EventRecord {
            title: "European Flood",
            category_title: "Floods",
            lon: 7.0,
            lat: 51.0,
        },
        EventRecord {
            title: "Pakistan Flood",
            category_title: "Floods",
            lon: 70.0,
            lat: 30.0,
        },
    ];
    EVENTS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_classification() {
        assert_eq!(
            EventCategory::from_title("Wildfires"),
            EventCategory::Wildfires
        );
        assert_eq!(
            EventCategory::from_title("Severe Storms"),
            EventCategory::Storms
        );
        assert_eq!(
            EventCategory::from_title("Tropical Cyclone"),
            EventCategory::Storms
        );
        assert_eq!(
            EventCategory::from_title("Sea and Lake Ice"),
            EventCategory::SeaLakeIce
        );
        // Unknown categories land in the catch-all bucket.
        assert_eq!(
            EventCategory::from_title("Something Else"),
            EventCategory::Manmade
        );
    }

    #[test]
    fn test_bundled_events_have_valid_coordinates() {
        for event in bundled_events() {
            assert!(
                (-180.0..=180.0).contains(&event.lon),
                "{} has bad longitude",
                event.title
            );
            assert!(
                (-90.0..=90.0).contains(&event.lat),
                "{} has bad latitude",
                event.title
            );
        }
    }

    #[test]
    fn test_bundled_events_cover_multiple_categories() {
        let mut categories: Vec<EventCategory> =
            bundled_events().iter().map(|e| e.category()).collect();
        categories.dedup();
        assert!(categories.len() >= 4);
    }
}
