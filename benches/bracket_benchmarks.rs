use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;

use bracket_engine::group::{self, GroupTournament};
use bracket_engine::knockout::{self, KnockoutTournament};
use bracket_engine::{Player, submit_group_advancement_result, submit_knockout_score};

fn roster(n: usize) -> Vec<Player> {
    (0..n)
        .map(|i| Player::with_id(format!("player{i}"), &format!("Player {i}")))
        .collect()
}

/// Benchmark knockout seeding across field sizes, including awkward
/// non-power-of-two fields.
fn bench_build_knockout(c: &mut Criterion) {
    let mut bench = c.benchmark_group("build_knockout");
    for n in [8usize, 13, 64, 100, 512] {
        let players = roster(n);
        bench.bench_with_input(BenchmarkId::from_parameter(n), &players, |b, players| {
            b.iter(|| knockout::build_bracket_with_rng(players, &mut StdRng::seed_from_u64(1)));
        });
    }
    bench.finish();
}

/// Benchmark group-advancement ladder seeding.
fn bench_build_group(c: &mut Criterion) {
    let mut bench = c.benchmark_group("build_group_advancement");
    for n in [6usize, 16, 50, 200] {
        let players = roster(n);
        bench.bench_with_input(BenchmarkId::from_parameter(n), &players, |b, players| {
            b.iter(|| group::build_bracket_with_rng(players, &mut StdRng::seed_from_u64(1)));
        });
    }
    bench.finish();
}

/// Benchmark sweeping a 64-player knockout from first round to champion.
fn bench_knockout_full_run(c: &mut Criterion) {
    let players = roster(64);
    let bracket = knockout::build_bracket_with_rng(&players, &mut StdRng::seed_from_u64(1));
    let tournament = KnockoutTournament {
        id: "bench".to_string(),
        name: "bench".to_string(),
        players,
        rounds: bracket.rounds,
        winner: bracket.winner,
    };
    let ids: Vec<String> = tournament
        .rounds
        .iter()
        .flat_map(|r| &r.matches)
        .map(|m| m.id.clone())
        .collect();

    c.bench_function("knockout_full_run_64", |b| {
        b.iter(|| {
            let mut t = tournament.clone();
            for id in &ids {
                t = submit_knockout_score(t, id, [1, 0]);
            }
            t
        });
    });
}

/// Benchmark running a 32-player heat ladder to completion.
fn bench_group_full_run(c: &mut Criterion) {
    let players = roster(32);
    let bracket = group::build_bracket_with_rng(&players, &mut StdRng::seed_from_u64(1));
    let tournament = GroupTournament {
        id: "bench".to_string(),
        name: "bench".to_string(),
        players,
        rounds: bracket.rounds,
        winner: bracket.winner,
    };

    c.bench_function("group_full_run_32", |b| {
        b.iter(|| {
            let mut t = tournament.clone();
            for round in 0..t.rounds.len() {
                for race in 0..t.rounds[round].races.len() {
                    let positions: Vec<Option<u32>> = (1..=t.rounds[round].races[race]
                        .players
                        .len())
                        .map(|p| Some(p as u32))
                        .collect();
                    t = submit_group_advancement_result(t, round, race, &positions);
                }
            }
            t
        });
    });
}

criterion_group!(
    benches,
    bench_build_knockout,
    bench_build_group,
    bench_knockout_full_run,
    bench_group_full_run
);
criterion_main!(benches);
