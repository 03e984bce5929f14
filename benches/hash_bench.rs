use std::collections::HashSet;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use rphonenumberkit::{PhoneNumber, PhoneNumberType};

/// The same handful of numbers written several ways, as an engine would
/// hand them over after parsing user input.
fn setup_numbers() -> Vec<PhoneNumber> {
    let mut numbers = Vec::new();
    for round in 0..64u64 {
        numbers.push(PhoneNumber::new("+1 (650) 253-0000", 1, false, 6502530000, None, PhoneNumberType::FixedLineOrMobile));
        numbers.push(PhoneNumber::new("16502530000", 1, false, 6502530000, None, PhoneNumberType::Unknown));
        numbers.push(PhoneNumber::new("+44 20 8765 4321", 44, false, 2087654321, None, PhoneNumberType::FixedLine));
        numbers.push(PhoneNumber::new("02 12345678", 39, true, 212345678, None, PhoneNumberType::FixedLine));
        numbers.push(PhoneNumber::new(
            "0011 54 9 11 8765 4321 ext. 1234",
            54,
            false,
            91187654321,
            Some("1234".to_owned()),
            PhoneNumberType::Mobile,
        ));
        numbers.push(PhoneNumber::new("+1 650 555 0000", 1, false, 6505550000 + round, None, PhoneNumberType::Mobile));
    }
    numbers
}

fn hash_benchmark(c: &mut Criterion) {
    let numbers = setup_numbers();

    let mut group = c.benchmark_group("PhoneNumber identity");

    group.bench_function("dedup in HashSet", |b| {
        b.iter(|| {
            let unique = black_box(&numbers).iter().collect::<HashSet<_>>();
            black_box(unique.len())
        })
    });

    group.bench_function("pairwise eq", |b| {
        b.iter(|| {
            let first = &numbers[0];
            black_box(&numbers).iter().filter(|number| *number == first).count()
        })
    });

    group.finish();
}

criterion_group!(benches, hash_benchmark);
criterion_main!(benches);
