use std::hint::black_box;
use bencher::{TestCase, TestFields};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use micro_vary::{append, Fields};

static ACCEPTS: [&str; 3] = ["Accept", "Accept-Encoding", "Accept-Language"];

fn create_test_cases() -> Vec<TestCase> {
    vec![
        TestCase::list("field to *", "*", "Accept-Encoding"),
        TestCase::list("* to field", "Accept-Encoding", "*"),
        TestCase::list("field to empty", "", "Accept-Encoding"),
        TestCase::names("fields array to empty", "", &ACCEPTS),
        TestCase::list("fields string to empty", "", "Accept, Accept-Encoding, Accept-Language"),
        TestCase::list("field to fields", "Accept, Accept-Encoding, Accept-Language", "X-Foo"),
    ]
}

fn benchmark_append(criterion: &mut Criterion) {
    let test_cases = create_test_cases();
    let mut group = criterion.benchmark_group("append");

    for case in test_cases {
        group.bench_with_input(BenchmarkId::from_parameter(case.name()), &case, |b, case| {
            b.iter(|| {
                let fields = match case.fields() {
                    TestFields::List(list) => Fields::from(list),
                    TestFields::Names(names) => Fields::from(names),
                };
                let header = append(black_box(case.header()), black_box(fields)).expect("input should be valid vary fields");
                black_box(header);
            });
        });
    }

    group.finish();
}

criterion_group!(vary, benchmark_append);
criterion_main!(vary);
