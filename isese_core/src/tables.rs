//! Authored pattern tables for the liturgical calendar.
//!
//! Pure data: the 13 month descriptors, the 28 cyclic day labels, each
//! patron's practices, offering pools and invocations, and the prayer
//! templates. [`ActivityPools`] and [`OfferingPools`] expose them in the
//! shape the builder consumes.

use crate::types::{Patron, DAYS_PER_MONTH, MONTHS_PER_CYCLE};
use std::collections::{HashMap, HashSet};

/// Authored description of one month, before its days are generated
#[derive(Clone, Copy, Debug)]
pub struct MonthDescriptor {
    pub name: &'static str,
    pub patron: Patron,
    pub theme: &'static str,
    pub color: &'static str,
    pub taboos: &'static [&'static str],
}

// ============================================================================
// Months
// ============================================================================

/// The 13 months in canonical order
pub const MONTHS: [MonthDescriptor; MONTHS_PER_CYCLE] = [
    MonthDescriptor {
        name: "Ṣẹ̀rẹ̀",
        patron: Patron::Obatala,
        theme: "Purity, New Beginnings",
        color: "White",
        taboos: &["Palm oil", "Alcohol", "Raising your voice in anger"],
    },
    MonthDescriptor {
        name: "Èrèlé",
        patron: Patron::Osun,
        theme: "Love, Fertility, Sweetness",
        color: "Yellow & Gold",
        taboos: &["Fouling rivers or streams", "Breaking promises to loved ones"],
    },
    MonthDescriptor {
        name: "Ẹrẹ̀nà",
        patron: Patron::Sango,
        theme: "Justice, Courage",
        color: "Red & White",
        taboos: &["Lying", "Black-eyed peas (ẹ̀wà sèsé)", "Breaking an oath"],
    },
    MonthDescriptor {
        name: "Igbe",
        patron: Patron::Ogun,
        theme: "Labor, Clearing the Path",
        color: "Green & Black",
        taboos: &["Stealing", "Leaving work unfinished", "Spilling palm wine carelessly"],
    },
    MonthDescriptor {
        name: "Ẹ̀bìbì",
        patron: Patron::Yemoja,
        theme: "Motherhood, Protection",
        color: "Blue & White",
        taboos: &["Disrespecting mothers", "Wasting water"],
    },
    MonthDescriptor {
        name: "Okúdù",
        patron: Patron::Orunmila,
        theme: "Wisdom, Destiny",
        color: "Green & Yellow",
        taboos: &["Deceit", "Mocking the elders", "Speaking of another's destiny lightly"],
    },
    MonthDescriptor {
        name: "Agẹmọ",
        patron: Patron::Esu,
        theme: "Crossroads, Communication",
        color: "Red & Black",
        taboos: &["Gossip", "Ignoring the first greeting", "Palm kernel oil (àdín)"],
    },
    MonthDescriptor {
        name: "Ògún",
        patron: Patron::Oya,
        theme: "Transformation, Winds of Change",
        color: "Burgundy",
        taboos: &["Ram meat", "Holding on to grudges"],
    },
    MonthDescriptor {
        name: "Owewe",
        patron: Patron::Osoosi,
        theme: "Abundance, Pursuit",
        color: "Blue & Amber",
        taboos: &["Hunting for sport", "Taking more than you need"],
    },
    MonthDescriptor {
        name: "Ọ̀wàrà",
        patron: Patron::Obaluaye,
        theme: "Healing, Humility",
        color: "Brown & Purple",
        taboos: &["Mocking the sick", "Sweeping at night", "Pride"],
    },
    MonthDescriptor {
        name: "Bélú",
        patron: Patron::Osanyin,
        theme: "Herbal Knowledge, Medicine",
        color: "Green",
        taboos: &["Cutting plants without asking", "Whistling in the forest"],
    },
    MonthDescriptor {
        name: "Ọ̀pẹ̀",
        patron: Patron::Olokun,
        theme: "Depth, Hidden Wealth",
        color: "Deep Blue",
        taboos: &["Boasting of wealth", "Polluting the sea"],
    },
    MonthDescriptor {
        name: "Ìrántí",
        patron: Patron::Egungun,
        theme: "Ancestors, Remembrance",
        color: "Many Colors",
        taboos: &["Speaking ill of the dead", "Neglecting family duties"],
    },
];

// ============================================================================
// Day Labels
// ============================================================================

/// The four-day Yorùbá week, counted through seven rounds
#[rustfmt::skip]
pub const DAY_LABELS: [&str; DAYS_PER_MONTH] = [
    "Ọjọ́ Awo Kìíní",    "Ọjọ́ Ògún Kìíní",    "Ọjọ́ Jàkúta Kìíní",    "Ọjọ́ Ọ̀sẹ̀ Kìíní",
    "Ọjọ́ Awo Kejì",     "Ọjọ́ Ògún Kejì",     "Ọjọ́ Jàkúta Kejì",     "Ọjọ́ Ọ̀sẹ̀ Kejì",
    "Ọjọ́ Awo Kẹta",     "Ọjọ́ Ògún Kẹta",     "Ọjọ́ Jàkúta Kẹta",     "Ọjọ́ Ọ̀sẹ̀ Kẹta",
    "Ọjọ́ Awo Kẹrin",    "Ọjọ́ Ògún Kẹrin",    "Ọjọ́ Jàkúta Kẹrin",    "Ọjọ́ Ọ̀sẹ̀ Kẹrin",
    "Ọjọ́ Awo Karùn-ún", "Ọjọ́ Ògún Karùn-ún", "Ọjọ́ Jàkúta Karùn-ún", "Ọjọ́ Ọ̀sẹ̀ Karùn-ún",
    "Ọjọ́ Awo Kẹfà",     "Ọjọ́ Ògún Kẹfà",     "Ọjọ́ Jàkúta Kẹfà",     "Ọjọ́ Ọ̀sẹ̀ Kẹfà",
    "Ọjọ́ Awo Keje",     "Ọjọ́ Ògún Keje",     "Ọjọ́ Jàkúta Keje",     "Ọjọ́ Ọ̀sẹ̀ Keje",
];

// ============================================================================
// Activities
// ============================================================================

/// Each seven-day stretch of the month carries its own intention
const WEEK_INTENTIONS: [&str; 4] = [
    "week of opening",
    "week of deepening",
    "week of giving",
    "week of return",
];

/// Seven daily practices per patron, repeated through the four weeks
fn weekly_practices(patron: Patron) -> &'static [&'static str; 7] {
    match patron {
        Patron::Obatala => &[
            "Dress in white and keep silence for the first hour of the day",
            "Pour cool water at the shrine and ask for a clear orí",
            "Clean the home altar with fresh white cloth",
            "Anoint your head with shea butter and speak gently to all",
            "Meditate on patience as the snail carries its house",
            "Visit an elder and listen without interrupting",
            "Rest and make no hasty decisions",
        ],
        Patron::Osun => &[
            "Bathe with river water sweetened with honey",
            "Adorn the shrine with brass and yellow flowers",
            "Sing to the river at dawn",
            "Share sweets with children",
            "Offer pumpkin at the water's edge",
            "Oil and comb your hair in gratitude",
            "Mend a strained friendship",
        ],
        Patron::Sango => &[
            "Clap the bàtá rhythm at sunrise",
            "Settle a debt or keep a delayed promise",
            "Offer bitter kola at the shrine",
            "Wear red and white beads",
            "Stand up for someone treated unjustly",
            "Light a lamp and recite oríkì Ṣàngó",
            "Practice slow breathing to master anger",
        ],
        Patron::Ogun => &[
            "Clean and oil your tools",
            "Clear a path, a yard or a cluttered room",
            "Pour palm wine at the doorway",
            "Work with your hands for one full hour",
            "Honor those who build roads and forge metal",
            "Cut away one habit that holds you back",
            "Review the work done and give thanks for strength",
        ],
        Patron::Yemoja => &[
            "Offer watermelon at the sea or beside a bowl of water",
            "Call your mother or an elder woman of the family",
            "Wear blue and white",
            "Cook a meal for your household",
            "Wash in salt water for protection",
            "Sing a song of the sea",
            "Rest near water and reflect on home",
        ],
        Patron::Orunmila => &[
            "Consult Ifá or study one odù",
            "Memorize a verse of ẹsẹ Ifá",
            "Offer kola nut at the divining tray",
            "Write a prayer for your orí",
            "Teach someone what you have learned",
            "Keep a day of truthful speech",
            "Review the week's signs and omens",
        ],
        Patron::Esu => &[
            "Greet Èṣù before any other prayer",
            "Leave a small gift at a crossroads",
            "Let laughter open a closed door",
            "Deliver a message you have delayed",
            "Offer palm oil at the threshold",
            "Keep your promises small and sure",
            "Open the house at dusk and give thanks for safe passage",
        ],
        Patron::Oya => &[
            "Sweep the house from back to front",
            "Visit the market and trade fairly",
            "Burn incense and let the wind carry it",
            "Honor the dead with nine slow breaths",
            "Let go of one thing that no longer serves you",
            "Wear burgundy and speak boldly",
            "Write down your fears and release them to the wind",
        ],
        Patron::Osoosi => &[
            "Set one clear goal and pursue it",
            "Walk in the forest or a park",
            "Feed the birds at dawn",
            "Offer anise and corn at the shrine",
            "Do one task at a time with full focus",
            "Support someone seeking justice",
            "Share a meal from your own harvest",
        ],
        Patron::Obaluaye => &[
            "Cleanse the body with popcorn (gúgúrú)",
            "Visit or pray for the sick",
            "Keep the floor swept and dry",
            "Fast lightly until noon",
            "Offer popcorn on a straw mat",
            "Give alms quietly",
            "Keep humble and speak of no one's illness",
        ],
        Patron::Osanyin => &[
            "Gather and name three healing leaves",
            "Brew a cleansing herbal bath (àgbo)",
            "Tend a garden or a house plant",
            "Learn the use of one medicinal plant",
            "Offer honey and leaves at the shrine",
            "Keep silent among trees for an hour",
            "Dry and store herbs for the season",
        ],
        Patron::Olokun => &[
            "Sit by deep water and meditate",
            "Offer blue cloth and cowries",
            "Record your dreams on waking",
            "Give to someone burdened by debt",
            "Keep a gift of the sea on your altar",
            "Pray for those lost at sea",
            "Count your hidden blessings",
        ],
        Patron::Egungun => &[
            "Call the names of your ancestors",
            "Pour a libation of water at the door",
            "Cook the favorite dish of a departed elder",
            "Clean the ancestral shrine",
            "Tell a family story to the young",
            "Wear cloth of many colors",
            "Keep vigil and give thanks to those who came before",
        ],
    }
}

// ============================================================================
// Offerings, Invocations, Prayers
// ============================================================================

fn offering_pool(patron: Patron) -> &'static [&'static str] {
    match patron {
        Patron::Obatala => &[
            "Efun (white chalk)",
            "Shea butter (òrí)",
            "Snails (ìgbín)",
            "Coconut",
            "White kola nut",
            "Cool water",
        ],
        Patron::Osun => &["Honey (oyin)", "Oranges", "Pumpkin", "Cinnamon", "Brass bangle", "Yellow flowers"],
        Patron::Sango => &["Bitter kola (orógbó)", "Àmàlà", "Red palm oil", "Okra", "Red wine"],
        Patron::Ogun => &["Roasted yam", "Palm wine (ẹmu)", "Kola nut", "Roasted corn", "Iron nails"],
        Patron::Yemoja => &["Watermelon", "Molasses", "White rice", "Cowries (owó ẹyọ)", "Fried plantain"],
        Patron::Orunmila => &["Kola nut (obì)", "Palm nuts (ikin)", "Yam", "Dried fish", "Gin"],
        Patron::Esu => &["Palm oil (epo pupa)", "Roasted corn", "Gin", "Candy", "Àkàrà"],
        Patron::Oya => &["Eggplant", "Àkàrà", "Red wine", "Nine coins", "Purple cloth"],
        Patron::Osoosi => &["Anise", "Roasted corn", "Smoked fish", "Honey", "Blue beads"],
        Patron::Obaluaye => &["Popcorn (gúgúrú)", "Sesame seeds", "Palm oil", "Dry gin", "Straw mat"],
        Patron::Osanyin => &["Fresh leaves (ewé)", "Honey", "Gin", "Tobacco"],
        Patron::Olokun => &["Cowries", "Blue cloth", "Coconut", "Melon", "Sea salt", "Molasses"],
        Patron::Egungun => &["Libation water", "Kola nut", "Gin", "Palm wine", "Cloth strips"],
    }
}

fn invocation(patron: Patron) -> &'static str {
    match patron {
        Patron::Obatala => "King of the white cloth",
        Patron::Osun => "mother of sweet waters",
        Patron::Sango => "lord of thunder who did not hang",
        Patron::Ogun => "master of iron who clears the road",
        Patron::Yemoja => "mother whose children are the fish",
        Patron::Orunmila => "witness of destiny",
        Patron::Esu => "owner of the crossroads",
        Patron::Oya => "mother of nine, queen of the winds",
        Patron::Osoosi => "hunter whose arrow never misses",
        Patron::Obaluaye => "king of the earth who heals",
        Patron::Osanyin => "keeper of the leaves",
        Patron::Olokun => "owner of the deep waters",
        Patron::Egungun => "ancestors who walk among us",
    }
}

/// Prayer text for the cycle-start, full-moon and cycle-end days
///
/// Returns `None` for every other day.
pub fn prayer(patron: Patron, theme: &str, day_number: u8) -> Option<String> {
    let name = patron.name();
    let epithet = invocation(patron);
    match day_number {
        1 => Some(format!(
            "{name}, {epithet}: as the moon is born again, open the way for a month of {}. Àṣẹ.",
            theme.to_lowercase()
        )),
        15 => Some(format!(
            "{name}, {epithet}: at the fullness of the moon we praise you. Let what was begun ripen. Àṣẹ."
        )),
        28 => Some(format!(
            "{name}, {epithet}: the moon is dark and the month is closing. Receive our thanks and guard us into the next. Àṣẹ."
        )),
        _ => None,
    }
}

// ============================================================================
// Pools
// ============================================================================

/// Per-patron activity pools, indexed by `day_number - 1`
#[derive(Clone, Debug, Default)]
pub struct ActivityPools {
    pools: HashMap<Patron, Vec<String>>,
}

impl ActivityPools {
    /// Activity pools built from the authored weekly practices
    pub fn standard() -> Self {
        let pools = Patron::ALL
            .iter()
            .map(|&patron| {
                let practices = weekly_practices(patron);
                let pool: Vec<String> = (0..DAYS_PER_MONTH)
                    .map(|i| format!("{} ({})", practices[i % 7], WEEK_INTENTIONS[i / 7]))
                    .collect();
                (patron, pool)
            })
            .collect();
        Self { pools }
    }

    pub fn insert(&mut self, patron: Patron, pool: Vec<String>) {
        self.pools.insert(patron, pool);
    }

    pub fn get(&self, patron: Patron) -> Option<&[String]> {
        self.pools.get(&patron).map(Vec::as_slice)
    }
}

/// Per-patron offering pools, indexed modulo their length
#[derive(Clone, Debug, Default)]
pub struct OfferingPools {
    pools: HashMap<Patron, Vec<String>>,
}

impl OfferingPools {
    pub fn standard() -> Self {
        let pools = Patron::ALL
            .iter()
            .map(|&patron| {
                let pool: Vec<String> =
                    offering_pool(patron).iter().map(|s| s.to_string()).collect();
                (patron, pool)
            })
            .collect();
        Self { pools }
    }

    pub fn insert(&mut self, patron: Patron, pool: Vec<String>) {
        self.pools.insert(patron, pool);
    }

    pub fn get(&self, patron: Patron) -> Option<&[String]> {
        self.pools.get(&patron).map(Vec::as_slice)
    }
}

/// Validate the tables for consistency and completeness
///
/// Returns a list of validation errors, or empty Vec if valid.
pub fn validate(
    months: &[MonthDescriptor],
    activities: &ActivityPools,
    offerings: &OfferingPools,
) -> Vec<String> {
    let mut errors = Vec::new();

    if months.len() != MONTHS_PER_CYCLE {
        errors.push(format!(
            "Expected {} months, found {}",
            MONTHS_PER_CYCLE,
            months.len()
        ));
    }

    let mut seen = HashSet::new();
    for month in months {
        if month.name.is_empty() {
            errors.push("Month has empty name".to_string());
        }
        if !seen.insert(month.name) {
            errors.push(format!("Duplicate month name '{}'", month.name));
        }

        match activities.get(month.patron) {
            None => errors.push(format!("No activity pool for patron {}", month.patron)),
            Some(pool) if pool.len() < DAYS_PER_MONTH => errors.push(format!(
                "Activity pool for {} has {} entries, need {}",
                month.patron,
                pool.len(),
                DAYS_PER_MONTH
            )),
            Some(_) => {}
        }

        match offerings.get(month.patron) {
            None => errors.push(format!("No offering pool for patron {}", month.patron)),
            Some(pool) if pool.is_empty() => {
                errors.push(format!("Offering pool for {} is empty", month.patron))
            }
            Some(_) => {}
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_tables_validate() {
        let errors = validate(
            &MONTHS,
            &ActivityPools::standard(),
            &OfferingPools::standard(),
        );
        assert!(errors.is_empty(), "Standard tables have errors: {:?}", errors);
    }

    #[test]
    fn test_every_patron_governs_one_month() {
        let patrons: HashSet<_> = MONTHS.iter().map(|m| m.patron).collect();
        assert_eq!(patrons.len(), MONTHS_PER_CYCLE);
    }

    #[test]
    fn test_day_labels_are_distinct() {
        let labels: HashSet<_> = DAY_LABELS.iter().collect();
        assert_eq!(labels.len(), DAYS_PER_MONTH);
    }

    #[test]
    fn test_activity_pools_are_distinct_per_day() {
        let pools = ActivityPools::standard();
        for patron in Patron::ALL {
            let pool = pools.get(patron).unwrap();
            let unique: HashSet<_> = pool.iter().collect();
            assert_eq!(unique.len(), DAYS_PER_MONTH, "{} repeats an activity", patron);
        }
    }

    #[test]
    fn test_prayer_only_on_marked_days() {
        for day in 1..=28u8 {
            let prayer = prayer(Patron::Osun, "Love", day);
            assert_eq!(prayer.is_some(), matches!(day, 1 | 15 | 28), "day {}", day);
        }
    }

    #[test]
    fn test_short_activity_pool_is_reported() {
        let mut activities = ActivityPools::standard();
        activities.insert(Patron::Sango, vec!["Drum".into(); 27]);

        let errors = validate(&MONTHS, &activities, &OfferingPools::standard());
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("27 entries"));
    }

    #[test]
    fn test_missing_offering_pool_is_reported() {
        let errors = validate(&MONTHS, &ActivityPools::standard(), &OfferingPools::default());
        assert_eq!(errors.len(), MONTHS_PER_CYCLE);
    }
}
