use criterion::{Criterion, black_box, criterion_group, criterion_main};
use varsha_base::{GeoLocation, Graha};
use varsha_ephem::{AnalyticEphemeris, AnalyticHouses, AyanamshaSystem, HouseDivision};
use varsha_tajika::{
    EphemerisAdapter, NatalChart, SolarReturnConfig, TajikaConfig, compute_annual_timing,
    match_aspect, partition_mudda, solve_solar_return,
};
use varsha_time::{Instant, UtcTime};

fn fixtures() -> (AnalyticEphemeris, AnalyticHouses, NatalChart) {
    let eph = AnalyticEphemeris::new(AyanamshaSystem::Lahiri);
    let houses = AnalyticHouses::new(HouseDivision::Sripati, AyanamshaSystem::Lahiri);
    let birth = UtcTime::new(1985, 8, 15, 4, 30, 0.0);
    let loc = GeoLocation::new(28.6139, 77.209, 216.0);
    let natal = NatalChart::from_oracle(&eph, &houses, birth, loc).expect("natal chart");
    (eph, houses, natal)
}

fn solver_bench(c: &mut Criterion) {
    let (eph, _, natal) = fixtures();
    let adapter = EphemerisAdapter::new(&eph, &natal.location);
    let config = SolarReturnConfig::default();

    let mut group = c.benchmark_group("solar_return");
    group.bench_function("solve_analytic", |b| {
        b.iter(|| {
            solve_solar_return(
                &adapter,
                black_box(natal.sun_longitude()),
                &natal.birth,
                black_box(2020),
                &config,
            )
        })
    });
    group.finish();
}

fn annual_bench(c: &mut Criterion) {
    let (eph, houses, natal) = fixtures();
    let config = TajikaConfig::default();

    let mut group = c.benchmark_group("annual_timing");
    group.bench_function("compute_annual_timing", |b| {
        b.iter(|| compute_annual_timing(&eph, &houses, &natal, black_box(2020), &config))
    });
    group.finish();
}

fn primitives_bench(c: &mut Criterion) {
    let start = Instant::from_jd(2_460_000.5).expect("finite jd");

    let mut group = c.benchmark_group("tajika_primitives");
    group.bench_function("partition_mudda", |b| {
        b.iter(|| partition_mudda(black_box(start), black_box(Graha::Shani)))
    });
    group.bench_function("match_aspect", |b| {
        b.iter(|| match_aspect(black_box(123.4), black_box(245.1)))
    });
    group.finish();
}

criterion_group!(benches, solver_bench, annual_bench, primitives_bench);
criterion_main!(benches);
