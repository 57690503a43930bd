//! The curated fruit vocabulary.
//!
//! Canonical identifiers are English lowercase strings. Slices are ordered,
//! and the matcher scans them in order, so entry order is part of the
//! matching contract.

/// Canonical fruit identifiers the matcher recognizes.
pub const FRUITS: &[&str] = &[
    "apple",
    "apricot",
    "avocado",
    "banana",
    "bell pepper",
    "blackberry",
    "blueberry",
    "cantaloupe",
    "cherry",
    "coconut",
    "cucumber",
    "grape",
    "grapefruit",
    "kiwi",
    "lemon",
    "lime",
    "mango",
    "orange",
    "papaya",
    "peach",
    "pear",
    "pineapple",
    "plum",
    "pomegranate",
    "raspberry",
    "strawberry",
    "tomato",
    "watermelon",
];

/// Cultivar and variant names mapped to their canonical parent fruit.
/// Checked before [`FRUITS`] so that "Granny Smith" resolves to apple
/// rather than falling through unmatched.
pub const SUB_VARIETIES: &[(&str, &str)] = &[
    // Apple cultivars
    ("granny smith", "apple"),
    ("red delicious", "apple"),
    ("golden delicious", "apple"),
    ("honeycrisp", "apple"),
    ("mcintosh", "apple"),
    ("braeburn", "apple"),
    ("gala", "apple"),
    ("pink lady", "apple"),
    ("fuji", "apple"),
    // Orange varieties
    ("mandarin", "orange"),
    ("tangerine", "orange"),
    ("clementine", "orange"),
    ("satsuma", "orange"),
    // Grape varieties
    ("wine", "grape"),
    ("raisin", "grape"),
    ("sultana", "grape"),
];

/// Turkish display names keyed by canonical identifier.
pub const TURKISH_NAMES: &[(&str, &str)] = &[
    ("apple", "Elma"),
    ("apricot", "Kayısı"),
    ("avocado", "Avokado"),
    ("banana", "Muz"),
    ("bell pepper", "Biber"),
    ("blackberry", "Böğürtlen"),
    ("blueberry", "Yaban Mersini"),
    ("cantaloupe", "Kavun"),
    ("cherry", "Kiraz"),
    ("coconut", "Hindistan Cevizi"),
    ("cucumber", "Salatalık"),
    ("grape", "Üzüm"),
    ("grapefruit", "Greyfurt"),
    ("kiwi", "Kivi"),
    ("lemon", "Limon"),
    ("lime", "Misket Limonu"),
    ("mango", "Mango"),
    ("orange", "Portakal"),
    ("papaya", "Papaya"),
    ("peach", "Şeftali"),
    ("pear", "Armut"),
    ("pineapple", "Ananas"),
    ("plum", "Erik"),
    ("pomegranate", "Nar"),
    ("raspberry", "Ahududu"),
    ("strawberry", "Çilek"),
    ("tomato", "Domates"),
    ("watermelon", "Karpuz"),
];
