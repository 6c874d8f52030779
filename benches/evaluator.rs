use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use parallel_poker::cards::parse_cards;
use parallel_poker::devils_deal::rank_devils_deal_candidates;
use parallel_poker::evaluator::{evaluate, HandRules};
use parallel_poker::generator::generate_parallel_hands;
use parallel_poker::modifiers::DeckModifications;
use parallel_poker::rewards::RewardTable;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn bench_evaluate(c: &mut Criterion) {
    let rules = HandRules::default();
    let hands = [
        ("high_card", "Ah Kd 7s 5c 2d"),
        ("royal", "As Ks Qs Js Ts"),
        ("one_wild", "Kh Kd 7c As* 2h"),
        ("two_wilds", "9h 4c 2d As* Kd*"),
        ("dead", "Ah Ad! Kc 7s 2h!"),
    ];

    let mut g = c.benchmark_group("evaluate");
    for (name, text) in hands {
        let cards = parse_cards(text).unwrap();
        g.bench_with_input(BenchmarkId::new(name, text), &cards, |b, input| {
            b.iter(|| evaluate(black_box(input), &rules))
        });
    }
    g.finish();
}

fn bench_parallel_hands(c: &mut Criterion) {
    let base = parse_cards("Ah Kd 7c 4s 2h").unwrap();
    let mods = DeckModifications::new();
    let mut g = c.benchmark_group("generate_parallel_hands");
    for count in [10usize, 100] {
        g.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            let mut rng = ChaCha8Rng::seed_from_u64(1);
            b.iter(|| generate_parallel_hands(&mut rng, black_box(&base), &[0, 1], count, &mods))
        });
    }
    g.finish();
}

fn bench_devils_deal(c: &mut Criterion) {
    let hand = parse_cards("Ah Kh Qh Jh 2c").unwrap();
    let pool = DeckModifications::new().draw_pool(&hand);
    let table = RewardTable::default();
    let rules = HandRules::default();
    c.bench_function("rank_devils_deal_candidates", |b| {
        b.iter(|| rank_devils_deal_candidates(black_box(&hand), &pool, &table, 5, &rules))
    });
}

criterion_group!(benches, bench_evaluate, bench_parallel_hands, bench_devils_deal);
criterion_main!(benches);
