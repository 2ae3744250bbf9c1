//! Concurrency tests for the token service.
//!
//! These tests validate the lock contract end-to-end:
//! - writers are mutually exclusive, readers run in parallel
//! - no interleaving tears the column lengths or index maps
//! - the final live count equals successful inserts minus successful deletes

use std::sync::Arc;
use std::thread;

use tokenreg_core::{TokenAddress, TokenId, ADDRESS_LEN};
use tokenreg_service::TokenService;

fn addr(writer: u8, seq: u8) -> TokenAddress {
    let mut bytes = [0u8; ADDRESS_LEN];
    bytes[0] = writer;
    bytes[ADDRESS_LEN - 1] = seq;
    TokenAddress::new(bytes)
}

/// N writers inserting distinct addresses while M readers loop over
/// lookups and snapshots. Every insert must succeed exactly once and every
/// observed snapshot must be internally consistent.
#[test]
fn concurrent_writers_and_readers_never_tear_state() {
    const WRITERS: u8 = 8;
    const READERS: usize = 4;
    const PER_WRITER: u8 = 50;

    let service = Arc::new(TokenService::new());

    let writers: Vec<_> = (0..WRITERS)
        .map(|w| {
            let service = Arc::clone(&service);
            thread::spawn(move || {
                let mut inserted = 0usize;
                for seq in 1..=PER_WRITER {
                    service
                        .insert(addr(w, seq), format!("Token {w}/{seq}"), format!("T{w}x{seq}"), 18)
                        .unwrap();
                    inserted += 1;
                }
                inserted
            })
        })
        .collect();

    let readers: Vec<_> = (0..READERS)
        .map(|_| {
            let service = Arc::clone(&service);
            thread::spawn(move || {
                for _ in 0..200 {
                    // A snapshot is taken under the read lock, so it can
                    // never expose a half-applied insert.
                    let snapshot = service.view_all();
                    for view in &snapshot {
                        assert!(view.id.as_u64() >= 1);
                        assert!(!view.name.is_empty());
                    }
                    if let Some(view) = snapshot.first() {
                        let found = service.get_by_id(view.id).unwrap();
                        assert_eq!(found.id, view.id);
                        assert_eq!(found.address, view.address);
                    }
                }
            })
        })
        .collect();

    let total_inserted: usize = writers.into_iter().map(|h| h.join().unwrap()).sum();
    for reader in readers {
        reader.join().unwrap();
    }

    assert_eq!(total_inserted, WRITERS as usize * PER_WRITER as usize);
    assert_eq!(service.len(), total_inserted);

    // Every record is reachable through both indices after the dust settles.
    for view in service.view_all() {
        assert_eq!(service.get_by_id(view.id).unwrap(), view);
        assert_eq!(service.get_by_address(view.address).unwrap(), view);
    }
}

/// Interleaved inserts and deletes: the final count must equal successful
/// inserts minus successful deletes, independent of scheduling.
#[test]
fn final_count_matches_successful_operations() {
    const WRITERS: u8 = 4;
    const PER_WRITER: u8 = 40;

    let service = Arc::new(TokenService::new());

    let handles: Vec<_> = (0..WRITERS)
        .map(|w| {
            let service = Arc::clone(&service);
            thread::spawn(move || {
                let mut net = 0isize;
                for seq in 1..=PER_WRITER {
                    let id = service
                        .insert(addr(w, seq), format!("Token {w}/{seq}"), "TOK", 18)
                        .unwrap();
                    net += 1;
                    // Delete every other insert to churn the slot order
                    if seq % 2 == 0 && service.delete(id).is_ok() {
                        net -= 1;
                    }
                }
                net
            })
        })
        .collect();

    let expected: isize = handles.into_iter().map(|h| h.join().unwrap()).sum();
    assert_eq!(service.len() as isize, expected);
}

/// Two threads racing to insert the same address set: exactly one wins each
/// address, the loser always sees `AlreadyExists`.
#[test]
fn racing_inserts_preserve_address_uniqueness() {
    const ADDRESSES: u8 = 60;

    let service = Arc::new(TokenService::new());

    let handles: Vec<_> = (0..2)
        .map(|_| {
            let service = Arc::clone(&service);
            thread::spawn(move || {
                let mut won = 0usize;
                for seq in 1..=ADDRESSES {
                    if service.insert(addr(0, seq), "Token", "TOK", 18).is_ok() {
                        won += 1;
                    }
                }
                won
            })
        })
        .collect();

    let total_wins: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();
    assert_eq!(total_wins, ADDRESSES as usize);
    assert_eq!(service.len(), ADDRESSES as usize);

    // Ids are unique even under contention.
    let mut ids: Vec<TokenId> = service.view_all().iter().map(|view| view.id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), ADDRESSES as usize);
}
