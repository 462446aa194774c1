//! Published fairness vectors and cross-module properties.

use plinko_fair::{
    combined_seed, commit_hash, generate_board, hash, round_to, run_round, seed_from_hex,
    simulate_drop, verify_round, RoundRecord, Xorshift32, BINS, MAX_BIAS, MIN_BIAS, ROWS,
};
use proptest::prelude::*;

const SERVER_SEED: &str = "b2a5f3f32a4d9c6ee7a8c1d33456677890abcdeffedcba0987654321ffeeddcc";
const CLIENT_SEED: &str = "candidate-hello";
const NONCE: &str = "42";
const COMBINED: &str = "e1dddf77de27d395ea2be2ed49aa2a59bd6bf12ee8d350c16c008abd406c07e0";

#[test]
fn published_vectors() {
    assert_eq!(
        hash("test"),
        "9f86d081884c7d659a2feaa0c55ad015a3bf4f1b2b0b822cd15d6c15b0f00a08"
    );
    assert_eq!(
        commit_hash(SERVER_SEED, NONCE),
        "bb9acdc67f3f18f3345236a01f0e5072596657a9005c7d8a22cff061451a6b34"
    );
    assert_eq!(combined_seed(SERVER_SEED, CLIENT_SEED, NONCE), COMBINED);
    assert_eq!(seed_from_hex(COMBINED).unwrap(), 0xe1dddf77);

    let mut rng = Xorshift32::new(0xe1dddf77);
    let draws: Vec<f64> = (0..5).map(|_| round_to(rng.draw(), 10)).collect();
    assert_eq!(
        draws,
        [0.1106166649, 0.7625129214, 0.0439292176, 0.4578678815, 0.3438999297]
    );

    let outcome = run_round(SERVER_SEED, CLIENT_SEED, NONCE, 6).unwrap();
    assert_eq!(outcome.bin_index, 6);
}

#[test]
fn stream_continues_from_board_into_drop() {
    let mut rng = Xorshift32::new(seed_from_hex(COMBINED).unwrap());
    let (board, board_hash) = generate_board(&mut rng);
    let walk = simulate_drop(&board, 6, &mut rng).unwrap();

    let outcome = run_round(SERVER_SEED, CLIENT_SEED, NONCE, 6).unwrap();
    assert_eq!(outcome.board_hash, board_hash);
    assert_eq!(outcome.path, walk.path);

    // Restarting the stream for the drop gives a different walk
    let mut fresh = Xorshift32::new(seed_from_hex(COMBINED).unwrap());
    let restarted = simulate_drop(&board, 6, &mut fresh).unwrap();
    assert_ne!(restarted.path, walk.path);
}

#[test]
fn commit_does_not_depend_on_client_seed() {
    let a = verify_round(SERVER_SEED, "alice", NONCE, 6).unwrap();
    let b = verify_round(SERVER_SEED, "bob", NONCE, 6).unwrap();
    assert_eq!(a.commit_hash, b.commit_hash);
    assert_ne!(a.combined_seed, b.combined_seed);
    assert_ne!(a.board_hash, b.board_hash);
}

#[test]
fn client_seed_changes_outcomes() {
    let bins: std::collections::BTreeSet<usize> = (0..50)
        .map(|i| {
            run_round("fixedserverseed", &format!("clientseed{i}"), "1", 6)
                .unwrap()
                .bin_index
        })
        .collect();
    assert!(bins.len() > 1);
}

#[test]
fn off_center_columns_reproduce() {
    let lifecycle = run_round(COMBINED, "player-provided-seed", "100", 3).unwrap();
    assert_eq!(lifecycle.bin_index, 5);
    assert_eq!(
        verify_round(COMBINED, "player-provided-seed", "100", 3).unwrap().bin_index,
        5
    );

    let bins: Vec<usize> = (0..=12)
        .map(|column| run_round(SERVER_SEED, CLIENT_SEED, NONCE, column).unwrap().bin_index)
        .collect();
    assert_eq!(bins, [7, 7, 7, 7, 7, 7, 6, 6, 6, 6, 6, 6, 5]);
}

#[test]
fn drop_column_shifts_mean_bin() {
    let mean = |column: i32| {
        let total: usize = (0..100)
            .map(|i| {
                run_round(&format!("seed{i}"), "client", &i.to_string(), column)
                    .unwrap()
                    .bin_index
            })
            .sum();
        total as f64 / 100.0
    };

    // A column right of center raises every left-bias, so fewer draws clear it
    assert_eq!(mean(0), 6.75);
    assert_eq!(mean(6), 5.99);
    assert_eq!(mean(12), 5.25);
}

#[test]
fn lifecycle_end_to_end() {
    let mut record = RoundRecord::commit(32);
    let public = record.public_commitment();

    let outcome = record.start("player-provided-seed", 3, 500).unwrap();
    let server_seed = record.reveal().unwrap().to_string();

    assert!(public.verify_reveal(&server_seed));

    let check = verify_round(&server_seed, "player-provided-seed", &public.nonce, 3).unwrap();
    assert_eq!(check.commit_hash, public.commit_hash);
    assert_eq!(check.bin_index, outcome.bin_index);
    assert_eq!(check.board_hash, outcome.board_hash);
    assert!(check.compare(&record.stored()).is_valid());
}

#[test]
fn rounds_run_in_parallel_without_coordination() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || run_round(SERVER_SEED, CLIENT_SEED, NONCE, i % 13).unwrap())
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let outcome = handle.join().unwrap();
        let expected = run_round(SERVER_SEED, CLIENT_SEED, NONCE, i as i32 % 13).unwrap();
        assert_eq!(outcome, expected);
    }
}

proptest! {
    #[test]
    fn any_round_is_well_formed(
        server in "[a-zA-Z0-9]{1,64}",
        client in "[a-zA-Z0-9-]{1,32}",
        nonce in "[0-9a-f-]{1,36}",
        column in 0i32..=12,
    ) {
        let first = run_round(&server, &client, &nonce, column).unwrap();
        let second = run_round(&server, &client, &nonce, column).unwrap();

        prop_assert_eq!(&first, &second);
        prop_assert!(first.bin_index < BINS);
        prop_assert_eq!(first.path.len(), ROWS);
        for bias in first.board.iter() {
            prop_assert!((MIN_BIAS..=MAX_BIAS).contains(&bias));
        }
    }
}
