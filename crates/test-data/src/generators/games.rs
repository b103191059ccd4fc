//! Genre and game generation.

use fake::{Fake, faker::company::en::Buzzword};
use rand::Rng;
use rand::seq::SliceRandom;

const GENRE_NAMES: &[&str] = &[
    "Action",
    "Adventure",
    "Puzzle",
    "Racing",
    "Shooter",
    "Strategy",
    "Sports",
    "Platformer",
    "Roguelike",
    "Rhythm",
];

const TITLE_SUFFIXES: &[&str] = &[
    "Quest", "Arena", "Rally", "Saga", "Mania", "Odyssey", "Legends", "Tycoon", "Blitz", "Royale",
];

/// Generated game data ready for database insertion. `genre_index` refers
/// to the generator's genre list, not a database id.
#[derive(Debug, Clone)]
pub struct GeneratedGame {
    pub title: String,
    pub genre_index: usize,
}

/// Generates genre names and game titles.
pub struct GameGenerator {
    genre_count: usize,
}

impl GameGenerator {
    pub fn new(genre_count: usize) -> Self {
        Self { genre_count }
    }

    /// Genre names for the configured count, numbered past the builtin list.
    pub fn genres(&self) -> Vec<String> {
        (0..self.genre_count)
            .map(|i| {
                let base = GENRE_NAMES[i % GENRE_NAMES.len()];
                if i < GENRE_NAMES.len() {
                    base.to_string()
                } else {
                    format!("{} {}", base, i / GENRE_NAMES.len() + 1)
                }
            })
            .collect()
    }

    pub fn generate(&self, rng: &mut impl Rng) -> GeneratedGame {
        let word: String = Buzzword().fake_with_rng(rng);
        let suffix = TITLE_SUFFIXES
            .choose(rng)
            .expect("title suffix list is non-empty");

        GeneratedGame {
            title: format!("{} {}", title_case(&word), suffix),
            genre_index: rng.gen_range(0..self.genre_count),
        }
    }
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
