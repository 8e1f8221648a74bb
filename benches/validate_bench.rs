use criterion::{black_box, criterion_group, criterion_main, Criterion};
use linguaset_core::pipeline::{process_jsonl, PipelineConfig, RunContext};
use linguaset_core::{validate_kind, RecordKind};
use serde_json::json;

fn vocab_line(i: usize) -> String {
    json!({
        "id": i.to_string(),
        "language": "cmn",
        "content": format!("词{}", i),
        "consideredWord": true,
        "priority": i,
        "notes": [format!("n{}", i)],
        "translations": [format!("t{}", i)],
        "similarSoundingButNotTheSame": ["1", "2", "3"],
        "images": [{"filename": format!("{}.webp", i), "alt": "picture", "tags": ["noun"]}],
        "sounds": [{"filename": format!("{}.mp3", i)}]
    })
    .to_string()
}

fn bench_validate(c: &mut Criterion) {
    let candidate: serde_json::Value = serde_json::from_str(&vocab_line(1)).unwrap();
    c.bench_function("validate_vocab", |b| {
        b.iter(|| validate_kind(RecordKind::Vocab, black_box(&candidate)))
    });

    let text: String = (0..1_000).map(|i| vocab_line(i) + "\n").collect();
    let ctx = RunContext::new("bench");
    let config = PipelineConfig::default();
    c.bench_function("process_jsonl_1000_vocab", |b| {
        b.iter(|| process_jsonl(&ctx, RecordKind::Vocab, black_box(&text), &config))
    });
}

criterion_group!(benches, bench_validate);
criterion_main!(benches);
