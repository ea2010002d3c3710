//! Static page copy that is not part of the wedding record.
//!
//! Travel tips and the ceremony notes are the same for every visitor, so
//! they live here rather than in the store.

/// One card in the travel section.
#[derive(Debug, Clone)]
pub struct TravelCard {
    pub title: &'static str,
    /// Icon slug used as a CSS modifier.
    pub icon: &'static str,
    pub items: &'static [&'static str],
}

/// The "Travel & Accommodation" cards, in display order.
pub const TRAVEL: &[TravelCard] = &[
    TravelCard {
        title: "Getting There",
        icon: "plane",
        items: &[
            "Santorini Airport (JTR) - 15 minutes from venue",
            "Athens International Airport (ATH) - 1 hour flight",
            "Ferry from Piraeus Port - 5-8 hours scenic journey",
        ],
    },
    TravelCard {
        title: "Where to Stay",
        icon: "home",
        items: &[
            "Sunset Cliffs Resort - Venue hotel with special rates",
            "Oia Castle Hotel - Luxury option with caldera views",
            "Fira Grand Hotel - Budget-friendly in town center",
        ],
    },
    TravelCard {
        title: "Things to Do",
        icon: "camera",
        items: &[
            "Watch sunset in Oia - Most famous in the world",
            "Explore Akrotiri Archaeological Site",
            "Wine tasting at Santo Wines",
            "Red Beach and Kamari Beach",
            "Boat tour to volcanic islands",
        ],
    },
    TravelCard {
        title: "Local Tips",
        icon: "info",
        items: &[
            "Best time to visit: April to October",
            "Currency: Euro (EUR)",
            "Language: Greek (English widely spoken)",
            "Dress code: Casual, comfortable walking shoes",
        ],
    },
];

/// Shown next to the ceremony time.
pub const CEREMONY_NOTE: &str = "Ceremony begins at sunset";

/// Shown under the venue map.
pub const ARRIVAL_NOTE: &str = "The ceremony will be held on the beach at sunset. \
     We recommend arriving 30 minutes early to enjoy the pre-ceremony music and refreshments.";

/// Guest count choices for the RSVP select, value then label.
pub const GUEST_OPTIONS: &[(&str, &str)] = &[
    ("1", "Just me"),
    ("2", "2 people"),
    ("3", "3 people"),
    ("4", "4 people"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guest_options_match_accepted_range() {
        for (value, _) in GUEST_OPTIONS {
            assert!(tides_core::GuestCount::parse(value).is_ok());
        }
    }

    #[test]
    fn test_travel_cards_have_items() {
        assert_eq!(TRAVEL.len(), 4);
        assert!(TRAVEL.iter().all(|card| !card.items.is_empty()));
    }
}
