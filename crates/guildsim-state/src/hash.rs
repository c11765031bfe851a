//! Canonical state hashing (SPEC_FULL.md §4.6).
//!
//! `bincode`'s derive-ordered, fixed-width encoding gives two equal `State`
//! values byte-identical wire representations regardless of how each was
//! built, which is the property a canonical hash needs. BLAKE3 is the
//! workspace's existing hashing crate (`chronx-crypto::hash`); `hex`
//! lower-cases and encodes its 32-byte digest into the 64-character string
//! the hash surface promises.

use crate::schema::State;

/// Hash `state` to a 64-character lowercase hex string. Two states that are
/// `==` under `PartialEq` always hash identically; this is the engine's
/// only source of byte-for-byte cross-run determinism checks.
pub fn hash_state(state: &State) -> String {
    let bytes = bincode::serialize(state).expect("State serialization is infallible");
    let digest = blake3::hash(&bytes);
    hex::encode(digest.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Contracts, Economy, Guild, Heroes, IdCounters, Meta, Region};

    fn sample_state() -> State {
        State {
            meta: Meta {
                save_version: 1,
                seed: 1234,
                day_index: 0,
                revision: 0,
                ids: IdCounters {
                    next_contract_id: 1,
                    next_hero_id: 1,
                    next_active_contract_id: 1,
                },
            },
            economy: Economy {
                money_copper: 100,
                trophies_stock: 0,
            },
            guild: Guild {
                guild_rank: 1,
                reputation: 50,
            },
            region: Region { stability: 50 },
            contracts: Contracts {
                inbox: Vec::new(),
                board: Vec::new(),
                active: Vec::new(),
                returns: Vec::new(),
                archive: Vec::new(),
            },
            heroes: Heroes {
                roster: Vec::new(),
                arrivals_today: Vec::new(),
            },
        }
    }

    #[test]
    fn hash_is_64_lowercase_hex_chars() {
        let digest = hash_state(&sample_state());
        assert_eq!(digest.len(), 64);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn equal_states_hash_identically() {
        let a = sample_state();
        let b = sample_state();
        assert_eq!(hash_state(&a), hash_state(&b));
    }

    #[test]
    fn differing_states_hash_differently() {
        let a = sample_state();
        let mut b = sample_state();
        b.economy.money_copper += 1;
        assert_ne!(hash_state(&a), hash_state(&b));
    }

    #[test]
    fn hashing_is_deterministic_across_calls() {
        let state = sample_state();
        assert_eq!(hash_state(&state), hash_state(&state));
    }
}
