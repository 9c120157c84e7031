// Criterion benchmarks for EcoFarmX Core

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ecofarmx_core::core::{
    distance::euclidean_deg, districts::locate, matcher::find_best_volunteer,
    scorer::SustainabilityScorer, subscores::compute_subscores,
};
use ecofarmx_core::models::{
    Availability, FarmPractices, Intervention, Irrigation, MatchRequest, ScorecardRequest,
    Volunteer,
};

fn create_volunteer(id: usize, lat: f64, lon: f64) -> Volunteer {
    Volunteer {
        name: format!("Volunteer {}", id),
        district: if id % 3 == 0 { "Hyderabad" } else { "Mumbai" }.to_string(),
        languages: vec![if id % 2 == 0 { "Telugu" } else { "Hindi" }.to_string()],
        phone: format!("+91 90000 {:05}", id),
        availability: if id % 5 == 0 {
            Availability::Offline
        } else {
            Availability::Online
        },
        latitude: lat,
        longitude: lon,
    }
}

fn create_request() -> MatchRequest {
    MatchRequest {
        latitude: 17.3850,
        longitude: 78.4867,
        district: "Hyderabad".to_string(),
        language: "Telugu".to_string(),
    }
}

fn create_scorecard_request() -> ScorecardRequest {
    ScorecardRequest {
        crop: "Rice".to_string(),
        state: "Telangana".to_string(),
        practices: FarmPractices {
            organic_matter: 0.5,
            urea_kg_per_acre: 50.0,
            diesel_liters: 10.0,
            water_use_index: 10.0,
            compost_fraction: 0.3,
            irrigation: Irrigation::Drip,
            ..FarmPractices::default()
        },
        interventions: vec![],
    }
}

fn bench_euclidean_distance(c: &mut Criterion) {
    c.bench_function("euclidean_distance", |b| {
        b.iter(|| {
            euclidean_deg(
                black_box(17.3850),
                black_box(78.4867),
                black_box(19.0760),
                black_box(72.8777),
            )
        });
    });
}

fn bench_district_lookup(c: &mut Criterion) {
    c.bench_function("district_lookup", |b| {
        b.iter(|| locate(black_box(17.3850), black_box(78.4867)));
    });
}

fn bench_matching(c: &mut Criterion) {
    let request = create_request();

    let mut group = c.benchmark_group("matching");

    for candidate_count in [10, 50, 100, 500, 1000].iter() {
        let volunteers: Vec<Volunteer> = (0..*candidate_count)
            .map(|i| {
                let lat_offset = (i as f64 * 0.001) % 0.5;
                let lon_offset = (i as f64 * 0.001) % 0.5;
                create_volunteer(i, 17.3850 + lat_offset, 78.4867 + lon_offset)
            })
            .collect();

        group.bench_with_input(
            BenchmarkId::new("find_best_volunteer", candidate_count),
            candidate_count,
            |b, _| {
                b.iter(|| find_best_volunteer(black_box(&request), black_box(&volunteers)));
            },
        );
    }

    group.finish();
}

fn bench_subscores(c: &mut Criterion) {
    let practices = create_scorecard_request().practices;

    c.bench_function("compute_subscores", |b| {
        b.iter(|| compute_subscores(black_box(&practices)));
    });
}

fn bench_scorecard(c: &mut Criterion) {
    let scorer = SustainabilityScorer::with_default_weights();
    let request = create_scorecard_request();

    c.bench_function("scorecard_evaluation", |b| {
        b.iter(|| scorer.evaluate(black_box(&request)));
    });
}

fn bench_scorecard_with_simulation(c: &mut Criterion) {
    let scorer = SustainabilityScorer::with_default_weights();
    let mut request = create_scorecard_request();
    request.interventions = vec![
        Intervention::SwitchToDrip,
        Intervention::AddMulching,
        Intervention::ReduceUrea,
    ];

    c.bench_function("scorecard_with_simulation", |b| {
        b.iter(|| scorer.evaluate(black_box(&request)));
    });
}

criterion_group!(
    benches,
    bench_euclidean_distance,
    bench_district_lookup,
    bench_matching,
    bench_subscores,
    bench_scorecard,
    bench_scorecard_with_simulation
);

criterion_main!(benches);
