use criterion::{Criterion, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::hint::black_box;
use tenzies::config::DICE_COUNT;
use tenzies::game::{Die, GameState};

// (name, number of held dice before rolling)
const INPUTS: &[(&str, usize)] = &[
    ("none held", 0),
    ("half held", DICE_COUNT / 2),
    ("all but one held", DICE_COUNT - 1),
];

fn roll_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Roll");

    for &(name, held) in INPUTS {
        let mut game = GameState::with_rng(StdRng::seed_from_u64(42));
        let ids: Vec<_> = game.dice().iter().take(held).map(Die::id).collect();
        for id in ids {
            game.toggle_hold(id);
        }

        group.bench_function(name, |b| {
            b.iter(|| black_box(game.roll()))
        });
    }

    group.bench_function("new game", |b| {
        let mut game = GameState::with_rng(StdRng::seed_from_u64(7));
        b.iter(|| {
            game.new_game();
            black_box(game.is_won())
        })
    });

    group.finish();
}

criterion_group!(benches, roll_benchmark);
criterion_main!(benches);
