use criterion::{Criterion, black_box, criterion_group, criterion_main};

use smsnumberutils::{
    CountryCodeResolver, CountryCodeTable, NANP_IDD, NumberEntry, classify_international,
    classify_nanp,
};

fn setup_idds() -> Vec<String> {
    vec!["001".to_owned(), "002".to_owned(), "00700".to_owned()]
}

fn setup_numbers() -> Vec<&'static str> {
    vec![
        "5551234",
        "18005551234",
        "+18005551234",
        "00118005551234",
        "+0118625086281234",
        "0118625086281234",
        "007008625086281234",
        "8625086281234",
        "+99912345678",
    ]
}

fn classification_benchmark(c: &mut Criterion) {
    let idds = setup_idds();
    let numbers = setup_numbers();
    // sorted the other way round than lookup databases usually are, so the
    // resolver has to walk most of the table
    let table = CountryCodeTable::new((1..=999).rev());
    let resolver = CountryCodeResolver::new(&table);

    let mut group = c.benchmark_group("Number plan classification");

    group.bench_function("classify_nanp", |b| {
        b.iter(|| {
            for number in &numbers {
                let mut entry = NumberEntry::new(black_box(number));
                black_box(classify_nanp(&mut entry, &idds));
            }
        })
    });

    group.bench_function("classify_international", |b| {
        b.iter(|| {
            for number in &numbers {
                let mut entry = NumberEntry::new(black_box(number));
                black_box(classify_international(&mut entry, &idds, NANP_IDD, &resolver));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, classification_benchmark);
criterion_main!(benches);
