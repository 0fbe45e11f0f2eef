//! Static tables behind the selection stages: dinner categories with their
//! candidate dishes and places, memory lane captions, photo booth frames and
//! the guestbook presets. All picks are uniform over the relevant table.

use rand::Rng;
use rand::seq::SliceRandom;

/// A dinner direction offered in the category stage.
#[derive(Debug)]
pub struct Category {
    pub name: &'static str,
    pub emoji: &'static str,
    pub dishes: &'static [&'static str],
    pub places: &'static [&'static str],
}

/// What the evening turns into once a category is spun.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartyPick {
    pub dish: &'static str,
    pub place: &'static str,
}

impl Category {
    /// Draws one dish and one place from this category's tables.
    pub fn pick_spread(&self, rng: &mut impl Rng) -> Option<PartyPick> {
        Some(PartyPick {
            dish: self.dishes.choose(rng).copied()?,
            place: self.places.choose(rng).copied()?,
        })
    }
}

pub const CATEGORIES: &[Category] = &[
    Category {
        name: "Italian night",
        emoji: "🍝",
        dishes: &[
            "Truffle mushroom risotto",
            "Handmade pumpkin ravioli",
            "Margherita from a wood oven",
            "Lemon spaghetti with burrata",
            "Tiramisu for the table",
        ],
        places: &[
            "Trattoria Sole",
            "La Piccola Cucina",
            "Osteria del Ponte",
            "That candlelit place by the river",
        ],
    },
    Category {
        name: "Tokyo street food",
        emoji: "🍜",
        dishes: &[
            "Tonkotsu ramen, extra chashu",
            "Salmon and avocado temaki",
            "Okonomiyaki with dancing flakes",
            "Matcha mochi to finish",
        ],
        places: &[
            "Menya Kaze",
            "The tiny izakaya downstairs",
            "Sakura Night Market",
        ],
    },
    Category {
        name: "Taco fiesta",
        emoji: "🌮",
        dishes: &[
            "Al pastor with grilled pineapple",
            "Baja fish tacos",
            "Birria with consomé for dipping",
            "Churros and hot chocolate",
        ],
        places: &[
            "Casa Frida",
            "El Camión food truck",
            "Mercado de la Luna",
        ],
    },
    Category {
        name: "Cozy home cooking",
        emoji: "🥘",
        dishes: &[
            "Grandma's dumpling soup",
            "Mac and cheese with the crispy top",
            "Sunday roast, gravy mandatory",
            "Warm apple pie with ice cream",
        ],
        places: &[
            "Our own kitchen",
            "The balcony, blankets included",
            "Picnic rug in the living room",
        ],
    },
];

/// Looks a category up by its position in [`CATEGORIES`].
pub fn category(index: usize) -> Option<&'static Category> {
    CATEGORIES.get(index)
}

/// One stop on the memory lane wall.
#[derive(Debug)]
pub struct Memory {
    pub year: &'static str,
    pub caption: &'static str,
}

pub const MEMORIES: &[Memory] = &[
    Memory {
        year: "2019",
        caption: "The road trip where the tent collapsed and nobody cared.",
    },
    Memory {
        year: "2020",
        caption: "Birthday over video calls, cake held up to six webcams.",
    },
    Memory {
        year: "2021",
        caption: "Karaoke night. The neighbours still mention it.",
    },
    Memory {
        year: "2022",
        caption: "Sunrise at the lighthouse after we swore we'd sleep early.",
    },
    Memory {
        year: "2023",
        caption: "The surprise party you guessed three days in advance.",
    },
    Memory {
        year: "2024",
        caption: "Pancake tower, seventeen layers, structural failure at twelve.",
    },
    Memory {
        year: "2025",
        caption: "Dancing in the kitchen until the downstairs lights flickered.",
    },
];

/// Decorative frames offered by the photo booth.
pub const PHOTO_FRAMES: &[&str] = &[
    "🎈 Balloon arch",
    "🎂 Cake smash",
    "✨ Golden sparkle",
    "🦩 Flamingo pool",
    "🪩 Disco mirror",
];

/// Ready-made wishes for guests who freeze up at the guestbook.
pub const WISH_TEMPLATES: &[&str] = &[
    "Happy birthday! May your year be louder than our karaoke night.",
    "Another lap around the sun, and you keep setting the pace.",
    "Wishing you cake for breakfast at least once this year.",
    "Grow older, never up. See you on the dance floor.",
    "Here's to naps, confetti and everything in between.",
    "May your coffee be strong and your Mondays short.",
];

/// The usual suspects who sign the guestbook.
pub const SIGNERS: &[&str] = &[
    "Mom & Dad",
    "The office crew",
    "Aunt Marisol",
    "Ben from next door",
    "Your favourite cousin",
    "The whole band",
];

/// Draws a wish template for the "surprise me" button.
pub fn pick_wish(rng: &mut impl Rng) -> Option<&'static str> {
    WISH_TEMPLATES.choose(rng).copied()
}

/// Draws a signer to go with a random wish.
pub fn pick_signer(rng: &mut impl Rng) -> Option<&'static str> {
    SIGNERS.choose(rng).copied()
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn every_table_has_candidates() {
        assert!(!CATEGORIES.is_empty());
        for category in CATEGORIES {
            assert!(!category.dishes.is_empty(), "{} has no dishes", category.name);
            assert!(!category.places.is_empty(), "{} has no places", category.name);
        }
        assert!(!MEMORIES.is_empty());
        assert!(!PHOTO_FRAMES.is_empty());
        assert!(!WISH_TEMPLATES.is_empty());
        assert!(!SIGNERS.is_empty());
    }

    #[test]
    fn picks_come_from_the_requested_category() {
        let mut rng = StdRng::seed_from_u64(7);
        for category in CATEGORIES {
            for _ in 0..50 {
                let pick = category.pick_spread(&mut rng).unwrap();
                assert!(category.dishes.contains(&pick.dish));
                assert!(category.places.contains(&pick.place));
            }
        }
    }

    #[test]
    fn category_lookup_is_positional() {
        assert_eq!(category(0).map(|c| c.name), Some(CATEGORIES[0].name));
        assert!(category(CATEGORIES.len()).is_none());
    }

    #[test]
    fn guestbook_presets_are_drawable() {
        let mut rng = StdRng::seed_from_u64(11);
        let wish = pick_wish(&mut rng).unwrap();
        let signer = pick_signer(&mut rng).unwrap();
        assert!(WISH_TEMPLATES.contains(&wish));
        assert!(SIGNERS.contains(&signer));
    }
}
