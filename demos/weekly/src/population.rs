//! Seeded synthetic population, rendered as a people CSV.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use vx_registry::PEOPLE_HEADER;

const FIRST_NAMES: [&str; 8] =
    ["Anna", "Bruno", "Carla", "Dario", "Elena", "Fabio", "Giulia", "Marco"];
const LAST_NAMES: [&str; 8] =
    ["Rossi", "Bianchi", "Ferrari", "Esposito", "Romano", "Colombo", "Ricci", "Greco"];

/// `count` people with birth years spread over `oldest..=youngest`, plus two
/// malformed lines so the load listener has something to report.
pub fn people_csv(count: usize, seed: u64, oldest: i32, youngest: i32) -> String {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut csv = format!("{PEOPLE_HEADER}\n");

    for i in 0..count {
        let first = FIRST_NAMES[rng.gen_range(0..FIRST_NAMES.len())];
        let last = LAST_NAMES[rng.gen_range(0..LAST_NAMES.len())];
        let year = rng.gen_range(oldest..=youngest);
        csv.push_str(&format!("SSN{i:06},{last},{first},{year}\n"));
    }

    csv.push_str("SSN999998,Incomplete,Row\n");
    csv.push_str("SSN999999,Bad,Year,nineteen-fifty\n");
    csv
}
