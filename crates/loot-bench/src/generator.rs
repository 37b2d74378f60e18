//! # Loot Generator
//!
//! Produces a deterministic set of component records for a bench run.
//!
//! ## Generated Records
//! Records are drawn from loot categories:
//! - arma (weapons)
//! - municao (ammunition)
//! - cura (healing)
//! - ferramenta (tools)
//! - controle (components with high priority)
//!
//! Each record has:
//! - Name: `{base} {index}` (unique within a run)
//! - Count: 1 - 60
//! - Priority: 1 - 10

use loot_core::{Record, MAX_PRIORITY, MIN_PRIORITY};

/// Loot categories with item names for realistic test data
const CATEGORIES: &[(&str, &[&str])] = &[
    ("arma", &["Rifle", "Pistola", "Faca", "Escopeta", "Besta"]),
    ("municao", &["Balas 9mm", "Cartucho", "Flechas", "Balas 5.56"]),
    ("cura", &["Bandagem", "Kit Medico", "Analgesico", "Seringa"]),
    ("ferramenta", &["Corda", "Lanterna", "Bussola", "Mapa", "Isqueiro"]),
    ("controle", &["Chip Central", "Antena", "Motor", "Bateria", "Sensor"]),
];

/// Linear congruential generator; same seed, same loot.
#[derive(Debug, Clone)]
pub struct Lcg(u64);

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Lcg(seed)
    }

    pub fn next_u32(&mut self) -> u32 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.0 >> 33) as u32
    }

    /// Uniform-ish value in `low..=high`.
    pub fn between(&mut self, low: u32, high: u32) -> u32 {
        low + self.next_u32() % (high - low + 1)
    }
}

/// Generates `count` records from `seed`.
///
/// Names carry their generation index, so they are unique and arrive in no
/// particular name order.
pub fn generate_loot(count: usize, seed: u64) -> Vec<Record> {
    let mut rng = Lcg::new(seed);

    (0..count)
        .map(|index| {
            let (category, names) = CATEGORIES[rng.next_u32() as usize % CATEGORIES.len()];
            let base = names[rng.next_u32() as usize % names.len()];
            let quantity = rng.between(1, 60) as i32;
            let priority = rng.between(u32::from(MIN_PRIORITY), u32::from(MAX_PRIORITY)) as u8;

            Record::component(&format!("{} {}", base, index), category, quantity, priority)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_same_seed_same_loot() {
        assert_eq!(generate_loot(15, 7), generate_loot(15, 7));
        assert_ne!(generate_loot(15, 7), generate_loot(15, 8));
    }

    #[test]
    fn test_names_are_unique_and_fields_in_range() {
        let loot = generate_loot(20, 42);
        assert_eq!(loot.len(), 20);

        let names: HashSet<&str> = loot.iter().map(|r| r.name()).collect();
        assert_eq!(names.len(), 20);

        for record in &loot {
            let priority = record.priority().unwrap();
            assert!((MIN_PRIORITY..=MAX_PRIORITY).contains(&priority));
            assert!((1..=60).contains(&record.count()));
        }
    }

    #[test]
    fn test_between_bounds() {
        let mut rng = Lcg::new(1);
        for _ in 0..1000 {
            let v = rng.between(3, 5);
            assert!((3..=5).contains(&v));
        }
    }
}
