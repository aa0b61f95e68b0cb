use std::fmt;

/// Number of slides in the deck. Fixed; the deck is the product.
pub const TOTAL_SLIDES: usize = 8;

/// Identity of one slide in the fixed eight-step sequence.
///
/// This is a closed set selected by the navigation index. Conversion from a
/// raw index is fallible, so out-of-range navigation requests are
/// unrepresentable past the call boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum SlideId {
    /// Greeting and "begin" call to action.
    Welcome,
    /// One red and one green apple: a 1-in-2 draw.
    Basket,
    /// Slider from 2 to 100 apples: thinning odds.
    Orchard,
    /// A playable mock lottery ticket (5 of 50 numbers, 2 of 12 stars).
    Ticket,
    /// How big 139,838,160 actually is.
    Magnitude,
    /// Everyday odds compared on a log scale.
    OddsCards,
    /// How long weekly play takes to win on average.
    Timescale,
    /// Closing quiz and certificate.
    Quiz,
}

impl SlideId {
    pub const ALL: [SlideId; TOTAL_SLIDES] = [
        SlideId::Welcome,
        SlideId::Basket,
        SlideId::Orchard,
        SlideId::Ticket,
        SlideId::Magnitude,
        SlideId::OddsCards,
        SlideId::Timescale,
        SlideId::Quiz,
    ];

    /// Zero-based position in the deck.
    #[must_use]
    pub fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|s| *s == self)
            .unwrap_or_default()
    }

    /// Slide at the given zero-based position, if it exists.
    ///
    /// Takes a signed index so "one before the first" is expressible by
    /// callers computing `current - 1`.
    #[must_use]
    pub fn from_index(index: i64) -> Option<SlideId> {
        if index < 0 {
            return None;
        }
        Self::ALL.get(index as usize).copied()
    }

    #[must_use]
    pub fn is_first(self) -> bool {
        self == SlideId::Welcome
    }

    #[must_use]
    pub fn is_last(self) -> bool {
        self.index() == TOTAL_SLIDES - 1
    }
}

impl fmt::Display for SlideId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SlideId::Welcome => "welcome",
            SlideId::Basket => "basket",
            SlideId::Orchard => "orchard",
            SlideId::Ticket => "ticket",
            SlideId::Magnitude => "magnitude",
            SlideId::OddsCards => "odds-cards",
            SlideId::Timescale => "timescale",
            SlideId::Quiz => "quiz",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_round_trips_for_every_slide() {
        for slide in SlideId::ALL {
            assert_eq!(SlideId::from_index(slide.index() as i64), Some(slide));
        }
    }

    #[test]
    fn out_of_range_indices_are_rejected() {
        assert_eq!(SlideId::from_index(-1), None);
        assert_eq!(SlideId::from_index(TOTAL_SLIDES as i64), None);
        assert_eq!(SlideId::from_index(i64::MAX), None);
    }

    #[test]
    fn first_and_last_are_the_deck_edges() {
        assert!(SlideId::Welcome.is_first());
        assert!(SlideId::Quiz.is_last());
        assert_eq!(SlideId::Quiz.index(), TOTAL_SLIDES - 1);
    }
}
