use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use support_profile_core::config::{Ergo4Parameters, ProfileVariant};
use support_profile_core::elements::{self, ProductLine};
use support_profile_core::generation::{
    generate_ergo4_profile, generate_pillow_profile, generate_profile, generate_profiles, ProfileRequest,
};
use support_profile_core::suggestion::suggest_ergomen_firmness;
use support_profile_core::{Gender, MeasurementPosition, SleepPosition};

const SUPINE: [u32; 12] = [6, 14, 9, 7, 5, 3, 6, 9, 15, 10, 6, 3];
const LATERAL: [u32; 12] = [12, 12, 7, 5, 4, 2, 5, 8, 16, 9, 5, 2];
const BATCH_SIZES: &[usize] = &[16, 256, 4096];

fn variants() -> [ProfileVariant; 4] {
    [
        ProfileVariant::stamp(),
        ProfileVariant::role(),
        ProfileVariant::ergonometer_nl(),
        ProfileVariant::sf_contact(),
    ]
}

fn benchmark_single_profile(c: &mut Criterion) {
    let mut group = c.benchmark_group("profile");

    for variant in variants() {
        for position in [MeasurementPosition::Supine, MeasurementPosition::Lateral] {
            let request = ProfileRequest::new(position, SUPINE, LATERAL, Gender::Female, 168, 64);
            group.bench_with_input(
                BenchmarkId::new(variant.name.clone(), format!("{:?}", position)),
                &request,
                |b, request| b.iter(|| generate_profile(black_box(&variant), black_box(request))),
            );
        }
    }

    group.finish();
}

fn benchmark_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");
    let variant = ProfileVariant::role();

    for &size in BATCH_SIZES {
        let requests: Vec<ProfileRequest> = (0..size as u32)
            .map(|i| {
                let mut supine = SUPINE;
                supine[(i % 12) as usize] += i % 7;
                ProfileRequest::new(MeasurementPosition::Supine, supine, LATERAL, Gender::Male, 150 + i % 50, 50 + i % 70)
            })
            .collect();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("parallel", size), &requests, |b, requests| {
            b.iter(|| generate_profiles(&variant, black_box(requests)))
        });
        group.bench_with_input(BenchmarkId::new("sequential", size), &requests, |b, requests| {
            b.iter(|| {
                requests
                    .iter()
                    .map(|request| generate_profile(&variant, black_box(request)))
                    .collect::<Vec<_>>()
            })
        });
    }

    group.finish();
}

fn benchmark_small_algorithms(c: &mut Criterion) {
    let mut group = c.benchmark_group("small_algorithms");
    let ergo4 = Ergo4Parameters::default();

    group.bench_function("ergomen", |b| {
        b.iter(|| suggest_ergomen_firmness(black_box(Gender::Male), black_box(180), black_box(70)))
    });
    group.bench_function("ergo4", |b| {
        b.iter(|| generate_ergo4_profile(&ergo4, Gender::Male, 180, 80, black_box(&[5u32, 3, 4, 6][..])))
    });
    group.bench_function("pillow_lateral", |b| {
        b.iter(|| generate_pillow_profile(SleepPosition::Lateral, Gender::Female, Some(black_box(&LATERAL[..]))))
    });
    group.bench_function("total_evacuation", |b| {
        b.iter(|| elements::total_evacuation_time_secs(ProductLine::Liegesimulator, black_box("TKKSSLSSKKSS")))
    });

    group.finish();
}

criterion_group!(benches, benchmark_single_profile, benchmark_batch, benchmark_small_algorithms);
criterion_main!(benches);
