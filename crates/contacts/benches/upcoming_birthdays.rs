use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chrono::NaiveDate;
use contactbook_contacts::{AddressBook, Record};

fn build_book(size: usize) -> AddressBook {
    let mut book = AddressBook::new();
    for i in 0..size {
        let mut record = Record::new(format!("contact-{i}"));
        record.add_phone(&format!("{:010}", i)).unwrap();
        let day = (i % 28) + 1;
        let month = (i % 12) + 1;
        record.set_birthday(&format!("{day:02}.{month:02}.1990")).unwrap();
        book.add_record(record);
    }
    book
}

fn bench_upcoming_birthdays(c: &mut Criterion) {
    let mut group = c.benchmark_group("upcoming_birthdays");
    let today = NaiveDate::from_ymd_opt(2024, 4, 20).unwrap();

    for size in [10usize, 100, 1_000, 10_000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("book_size", size), size, |b, &size| {
            let book = build_book(size);
            b.iter(|| black_box(book.upcoming_birthdays(black_box(today), 7)));
        });
    }

    group.finish();
}

fn bench_add_and_find(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_and_find");

    group.bench_function("add_1000_then_find", |b| {
        b.iter(|| {
            let book = build_book(1_000);
            black_box(book.find("contact-999"));
        });
    });

    group.finish();
}

criterion_group!(benches, bench_upcoming_birthdays, bench_add_and_find);
criterion_main!(benches);
