use criterion::{Criterion, criterion_group, criterion_main};
use shape_memory_core::{
    GameController, Level, ManualScheduler, RandomRoundGenerator, RoundGenerator, TILE_COUNT,
};
use std::hint::black_box;
use std::time::Duration;

fn generate(c: &mut Criterion) {
    let mut seed = 0u64;
    c.bench_function("generate_round", |b| {
        b.iter(|| {
            seed = seed.wrapping_add(1);
            black_box(RandomRoundGenerator::new(seed).generate())
        })
    });
}

fn play_round(c: &mut Criterion) {
    c.bench_function("play_full_round", |b| {
        b.iter(|| {
            let clock = ManualScheduler::new();
            let mut controller = GameController::new(clock.clone(), 7, Level::Hard);
            clock.advance(&mut controller, Level::Hard.config().preview);
            for index in 0..TILE_COUNT {
                controller.reveal_tile(index);
                clock.advance(&mut controller, Duration::from_millis(500));
            }
            black_box(controller.snapshot())
        })
    });
}

criterion_group!(benches, generate, play_round);
criterion_main!(benches);
