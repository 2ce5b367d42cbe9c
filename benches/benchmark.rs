use chrono::NaiveDate;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use recognizer::registry::CommandRegistry;

fn recognize_benchmark(c: &mut Criterion) {
    let registry = CommandRegistry::builtin().unwrap();
    let now = NaiveDate::from_ymd_opt(2017, 6, 1).unwrap().and_hms_opt(10, 15, 0).unwrap();
    c.bench_function("weather", |b| {
        b.iter(|| registry.recognize_at(black_box("show me the weather"), now).unwrap())
    });
    // lookahead has to probe every split point of the long reminder
    c.bench_function("reminder with trailing time", |b| {
        b.iter(|| {
            registry
                .recognize_at(
                    black_box("remind me to do some cool and awesome stuff with the whole team tomorrow at 5pm"),
                    now,
                )
                .unwrap()
        })
    });
    c.bench_function("no match", |b| {
        b.iter(|| registry.recognize_at(black_box("this sentence is not a command at all"), now).unwrap())
    });
}

criterion_group!(benches, recognize_benchmark);
criterion_main!(benches);
