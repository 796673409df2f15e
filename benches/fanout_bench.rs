use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dictsplit::{
    dictionary::{
        jsonl::{Sense, SourceConverter, SourceEntry},
        Metadata,
    },
    io::{JsonHeader, OutputChannel},
    lang::Languages,
    pipelines::{drive, FanOut},
};

fn entries(nb: usize) -> Vec<SourceEntry> {
    (0..nb)
        .map(|i| SourceEntry {
            id: i.to_string(),
            kanji: vec![],
            kana: vec![format!("かな{}", i)],
            common: i % 4 == 0,
            senses: ["eng", "ger", "fre"]
                .iter()
                .take(i % 3 + 1)
                .map(|l| Sense {
                    lang: l.to_string(),
                    glosses: vec![format!("gloss number {}", i)],
                    part_of_speech: vec![],
                })
                .collect(),
        })
        .collect()
}

pub fn fanout(c: &mut Criterion) {
    let dst = tempfile::tempdir().unwrap();
    let entries = entries(1_000);
    let metadata = Metadata::default();

    c.bench_function("fanout_1000_entries_4_outputs", |b| {
        b.iter(|| {
            let channels = vec![
                (Languages::All, false),
                (Languages::All, true),
                (Languages::parse(["eng"]).unwrap(), false),
                (Languages::parse(["ger"]).unwrap(), true),
            ]
            .into_iter()
            .enumerate()
            .map(|(i, (l, common))| {
                OutputChannel::new(&dst.path().join(format!("{}.json", i)), l, common).unwrap()
            })
            .collect();
            let mut fanout = FanOut::new(channels, SourceConverter, JsonHeader);
            let entries = entries.iter().cloned().map(Ok);
            drive(&metadata, black_box(entries), &mut fanout).unwrap()
        })
    });
}

criterion_group!(benches, fanout);
criterion_main!(benches);
