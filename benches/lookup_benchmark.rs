use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hotel_registry::{Guest, Hotel, Registry, ReservationId, Room, RoomStyle};
use rand::{seq::SliceRandom, SeedableRng};

// Benchmark for the flat-list linear scan behind `find_reservation`.
fn registry_with_reservations(count: usize) -> (Registry, Vec<ReservationId>) {
    let rooms = (0..count)
        .map(|i| Room::new(100 + i as u32, RoomStyle::Queen, 2000.0))
        .collect();
    let mut registry = Registry::new();
    let hotel = registry.add_hotel(Hotel::new("Hotel Yanan", "123 GStreet, Takaw City", rooms));
    let guest = registry.register_guest(Guest::new("Terry", "Addr 1", "terry@email.com", 63_919_129));

    let start = NaiveDate::from_ymd_opt(2025, 6, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    let end = NaiveDate::from_ymd_opt(2025, 6, 5)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();

    let ids = (0..count)
        .map(|i| {
            registry
                .book_direct(hotel, hotel.room(i), guest, start, end)
                .unwrap()
                .id
        })
        .collect();
    (registry, ids)
}

pub fn lookup_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("reservation_lookup");

    for size in [100usize, 1_000, 10_000].iter() {
        let (registry, mut ids) = registry_with_reservations(*size);
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        ids.shuffle(&mut rng);

        group.bench_with_input(BenchmarkId::new("hit", size), size, |b, _| {
            let mut cursor = 0;
            b.iter(|| {
                let id = ids[cursor % ids.len()];
                cursor += 1;
                black_box(registry.find_reservation(id))
            });
        });

        group.bench_with_input(BenchmarkId::new("miss", size), size, |b, _| {
            b.iter(|| black_box(registry.find_reservation(ReservationId(1))));
        });
    }

    group.finish();
}

criterion_group!(benches, lookup_benchmark);
criterion_main!(benches);
