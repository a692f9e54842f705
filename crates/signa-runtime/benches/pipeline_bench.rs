//! Benchmarks for the text-to-sign pipeline stages

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use signa_core::{FixedClock, GlossSequence, Timestamp};
use signa_gloss::{GlossMapper, Vocabulary};
use signa_pose::PoseGenerator;
use signa_runtime::{OutputFormat, PipelineConfig, SignPipeline};
use signa_scene::SceneExporter;

const SENTENCE: &str = "Hello, my name is Avery and thank you for the wonderful morning!";

fn bench_gloss_mapping(c: &mut Criterion) {
    let mapper = GlossMapper::new(Vocabulary::canonical());
    c.bench_function("gloss_map_sentence", |b| {
        b.iter(|| mapper.translate(black_box(SENTENCE)))
    });
}

fn bench_pose_generation(c: &mut Criterion) {
    let generator = PoseGenerator::with_clock(30, FixedClock::new(Timestamp::EPOCH));
    let durations = [1.0, 3.0, 10.0];

    let mut group = c.benchmark_group("pose_generate");
    for duration in durations {
        group.throughput(Throughput::Elements((duration * 30.0) as u64));
        group.bench_function(format!("{duration}s"), |b| {
            b.iter(|| {
                generator
                    .generate(GlossSequence::from_glosses(&["HELLO", "THANK", "FS-A"]), black_box(duration))
                    .unwrap()
            })
        });
    }
    group.finish();
}

fn bench_scene_export(c: &mut Criterion) {
    let animation = PoseGenerator::with_clock(30, FixedClock::new(Timestamp::EPOCH))
        .generate(GlossSequence::from_glosses(&["HELLO", "HAPPY"]), 3.0)
        .unwrap();
    let exporter = SceneExporter::default();

    c.bench_function("scene_export_90_frames", |b| {
        b.iter(|| exporter.export(black_box(&animation)))
    });
}

fn bench_end_to_end(c: &mut Criterion) {
    let pipeline = SignPipeline::new(
        PipelineConfig::default(),
        Vocabulary::canonical(),
        FixedClock::new(Timestamp::EPOCH),
    )
    .unwrap();

    let mut group = c.benchmark_group("pipeline");
    group.bench_function("text_to_scene_json", |b| {
        b.iter(|| {
            let translation = pipeline.text_to_animation(black_box(SENTENCE), Some(3.0)).unwrap();
            translation.to_json(OutputFormat::Scene, false).unwrap()
        })
    });
    group.bench_function("text_to_animation_json", |b| {
        b.iter(|| {
            let translation = pipeline.text_to_animation(black_box(SENTENCE), Some(3.0)).unwrap();
            translation.to_json(OutputFormat::Animation, false).unwrap()
        })
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_gloss_mapping,
    bench_pose_generation,
    bench_scene_export,
    bench_end_to_end
);
criterion_main!(benches);
