use loanflow::domain::id::IdGenerator;
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

#[test]
fn test_concurrent_ids_are_unique_and_dense() {
    let ids = Arc::new(IdGenerator::new());

    let mut handles = Vec::new();
    for _ in 0..8 {
        let ids = ids.clone();
        handles.push(thread::spawn(move || {
            (0..125).map(|_| ids.next()).collect::<Vec<u64>>()
        }));
    }

    let mut seen = HashSet::new();
    for handle in handles {
        for id in handle.join().unwrap() {
            assert!(seen.insert(id), "id {id} issued twice");
        }
    }

    assert_eq!(seen, (1..=1000).collect::<HashSet<u64>>());
}
