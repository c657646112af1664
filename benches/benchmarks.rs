use abstracted_poker::abstraction::*;
use abstracted_poker::cards::*;
use abstracted_poker::gameplay::*;
use abstracted_poker::params::Params;
use abstracted_poker::*;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rayon::prelude::*;
use std::sync::Arc;

criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        evaluating_river_strength,
        indexing_flop_isomorphism,
        rolling_out_holdem_hand,
        rolling_out_parallel_hands,
        encoding_information_tensor,
        enumerating_consistent_histories,
}

fn holdem() -> Arc<Game> {
    Arc::new(Game::try_from(Params::holdem()).expect("holdem preset"))
}

fn rollout(game: &Arc<Game>, rng: &mut SmallRng) -> State {
    let mut state = game.new_initial_state();
    while !state.is_terminal() {
        let actions = state.legal_actions();
        state
            .apply(actions[rng.random_range(0..actions.len())])
            .expect("legal action");
    }
    state
}

fn evaluating_river_strength(c: &mut criterion::Criterion) {
    c.bench_function("evaluate a 7-card Hand", |b| {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let mut deck = Deck::new(4, 13);
        let hand = (0..7).map(|_| deck.draw(rng)).collect::<Hand>();
        b.iter(|| Strength::from(hand))
    });
}

fn indexing_flop_isomorphism(c: &mut criterion::Criterion) {
    let indexer = Isomorphic::default();
    c.bench_function("index a Flop up to suit isomorphism", |b| {
        b.iter(|| indexer.index(2, "AsKd2h3h9c"))
    });
}

fn rolling_out_holdem_hand(c: &mut criterion::Criterion) {
    let game = holdem();
    let ref mut rng = SmallRng::seed_from_u64(0);
    c.bench_function("roll out a random hold'em hand", |b| {
        b.iter(|| rollout(&game, rng).returns())
    });
}

fn rolling_out_parallel_hands(c: &mut criterion::Criterion) {
    let game = holdem();
    c.bench_function("roll out 1024 hold'em hands in parallel", |b| {
        b.iter(|| {
            (0..1024u64)
                .into_par_iter()
                .map(|seed| rollout(&game, &mut SmallRng::seed_from_u64(seed)).returns()[0])
                .sum::<Utility>()
        })
    });
}

fn encoding_information_tensor(c: &mut criterion::Criterion) {
    let game = holdem();
    let ref mut rng = SmallRng::seed_from_u64(0);
    let mut state = game.new_initial_state();
    while state.is_chance() {
        let actions = state.legal_actions();
        state.apply(actions[rng.random_range(0..actions.len())]).expect("card");
    }
    c.bench_function("encode a preflop information state tensor", |b| {
        b.iter(|| state.information_state_tensor(1))
    });
    c.bench_function("format a preflop information state string", |b| {
        b.iter(|| state.information_state_string(1))
    });
}

fn enumerating_consistent_histories(c: &mut criterion::Criterion) {
    let game = holdem();
    let ref mut rng = SmallRng::seed_from_u64(0);
    let mut state = game.new_initial_state();
    while state.is_chance() {
        let actions = state.legal_actions();
        state.apply(actions[rng.random_range(0..actions.len())]).expect("card");
    }
    c.bench_function("enumerate preflop consistent histories", |b| {
        b.iter(|| state.consistent_histories().len())
    });
}
