use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use contact_manager::prelude::{
    Contact, ContactDraft, ContactManager, ContactStore, ContactUpdate, JsonStorage, MemStorage,
};
use tempfile::tempdir;

fn contacts(n: usize) -> Vec<Contact> {
    (0..n)
        .map(|i| {
            let draft = ContactDraft::new(format!("User{i}"))
                .email(format!("user{i}@yahoo.com"))
                .phone("08885499529")
                .company(if i % 2 == 0 { "Friends Inc" } else { "Work Ltd" });
            Contact::new(i as u64 + 1, draft)
        })
        .collect()
}

// Memory-backed so the measured work is CPU only.
fn manager_with_n(n: usize) -> ContactManager {
    ContactManager::new(Box::new(MemStorage::with_contacts(contacts(n))))
}

fn bench_add(c: &mut Criterion) {
    c.bench_function("Adding to 5k contacts (single add)", |b| {
        b.iter_batched(
            || manager_with_n(5_000),
            |mut manager| {
                let added = manager.add_contact(
                    ContactDraft::new("Zoe")
                        .phone("08885499529")
                        .email("bryanwelch@gmail.com"),
                );
                black_box(added.ok());
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_list(c: &mut Criterion) {
    c.bench_function("Listing 5k contacts (sorted by name)", |b| {
        let manager = manager_with_n(5_000);
        b.iter(|| black_box(manager.list_contacts()));
    });
}

fn bench_search(c: &mut Criterion) {
    c.bench_function("Searching 5k contacts (substring)", |b| {
        let manager = manager_with_n(5_000);
        b.iter(|| black_box(manager.search_contacts("work")));
    });
}

fn bench_edit(c: &mut Criterion) {
    c.bench_function("Editing in 5k contacts (single edit)", |b| {
        let mut manager = manager_with_n(5_000);
        b.iter(|| {
            let update = ContactUpdate {
                notes: Some("edited".to_string()),
                ..Default::default()
            };
            black_box(manager.update_contact(100, update).ok());
        });
    });
}

fn bench_delete(c: &mut Criterion) {
    c.bench_function("Deleting from 5k contacts", |b| {
        b.iter_batched(
            || manager_with_n(5_000),
            |mut manager| black_box(manager.delete_contact(200).ok()),
            BatchSize::SmallInput,
        );
    });
}

fn bench_export_csv(c: &mut Criterion) {
    c.bench_function("Exporting 5k contacts to csv", |b| {
        let manager = manager_with_n(5_000);
        b.iter(|| black_box(manager.export_contacts("csv").ok()));
    });
}

fn bench_json_store(c: &mut Criterion) {
    let dir = tempdir().expect("create temp dir");
    let storage = JsonStorage::new(dir.path().join("contacts.json"));
    let data = contacts(5_000);

    c.bench_function("save_5k_json_contacts", |b| {
        b.iter(|| black_box(storage.save(&data).ok()));
    });

    storage.save(&data).expect("setup save failed");
    c.bench_function("read_5k_json_contacts", |b| {
        b.iter(|| black_box(storage.load().ok()));
    });
}

criterion_group!(
    benches,
    bench_add,
    bench_list,
    bench_search,
    bench_edit,
    bench_delete,
    bench_export_csv,
    bench_json_store
);
criterion_main!(benches);
