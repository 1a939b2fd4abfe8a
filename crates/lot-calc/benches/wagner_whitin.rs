use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use lot_calc::{JustInTimePlanner, WagnerWhitinPlanner};
use lot_core::{CostModel, DemandSeries, PlanningProblem};
use rust_decimal::Decimal;

fn seasonal_problem(horizon: usize) -> PlanningProblem {
    let demand = DemandSeries::from_units((0..horizon as i64).map(|t| 80 + (t * 37) % 90));
    PlanningProblem::new(demand, CostModel::new(Decimal::from(1000), Decimal::new(5, 1)))
}

fn bench_planners(c: &mut Criterion) {
    let mut group = c.benchmark_group("planners");

    for horizon in [12usize, 52, 104, 208] {
        let problem = seasonal_problem(horizon);

        group.bench_with_input(
            BenchmarkId::new("wagner_whitin", horizon),
            &problem,
            |b, problem| b.iter(|| WagnerWhitinPlanner::plan(black_box(problem))),
        );
        group.bench_with_input(
            BenchmarkId::new("just_in_time", horizon),
            &problem,
            |b, problem| b.iter(|| JustInTimePlanner::plan(black_box(problem))),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_planners);
criterion_main!(benches);
