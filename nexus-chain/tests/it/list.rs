use nexus_chain::{List, OutOfRange};

#[test]
fn scenario_from_empty() {
    let mut list = List::new();
    list.add(1);
    list.add(2);
    list.add(3);
    assert_eq!(list.to_vec(), vec![1, 2, 3]);

    list.add_at(1, 9).unwrap();
    assert_eq!(list.to_vec(), vec![1, 9, 2, 3]);

    assert_eq!(list.remove_at(2), Ok(2));
    assert_eq!(list.to_vec(), vec![1, 9, 3]);
    assert_eq!(list.index_of(&9), Some(1));
}

#[test]
fn empty_lookups_are_absent() {
    let mut list: List<String> = List::new();
    assert_eq!(list.get(0), None);
    assert_eq!(list.first(), None);
    assert_eq!(list.last(), None);
    assert_eq!(list.remove_first(), None);
    assert_eq!(list.remove_last(), None);
    assert!(!list.remove(&"x".to_string()));
    assert_eq!(list.index_of(&"x".to_string()), None);
}

#[test]
fn structural_errors_never_mutate() {
    let mut list: List<u32> = (0..5).collect();
    let before = list.clone();

    for index in [6, 7, 100, usize::MAX] {
        let err = list.add_at(index, 42).unwrap_err();
        assert_eq!(err.error, OutOfRange { index, len: 5 });
        assert_eq!(err.into_inner(), 42);
    }
    for index in [5, 6, usize::MAX] {
        assert_eq!(list.remove_at(index), Err(OutOfRange { index, len: 5 }));
        assert_eq!(list.set(index, 42).unwrap_err().value, 42);
    }

    assert_eq!(list, before);
}

#[test]
fn error_messages() {
    let mut list: List<u32> = List::new();
    let err = list.remove_at(0).unwrap_err();
    assert_eq!(err.to_string(), "index 0 out of range for length 0");

    let rejected = list.add_at(1, 7).unwrap_err();
    assert_eq!(
        rejected.to_string(),
        "value rejected: index 1 out of range for length 0"
    );
}

#[test]
fn add_at_round_trip_every_position() {
    let base: List<u32> = (0..9).collect();
    for i in 0..=base.len() {
        let mut list = base.clone();
        list.add_at(i, 1000).unwrap();
        assert_eq!(list.get(i), Some(&1000), "index {i}");
        assert_eq!(list.len(), base.len() + 1);
    }
}

#[test]
fn remove_at_every_position() {
    let base: List<u32> = (0..9).collect();
    for i in 0..base.len() {
        let mut list = base.clone();
        assert_eq!(list.remove_at(i), Ok(i as u32));
        let expected: Vec<u32> = (0..9).filter(|&v| v != i as u32).collect();
        assert_eq!(list.to_vec(), expected);
        assert!(list.iter().rev().eq(expected.iter().rev()));
    }
}

#[test]
fn set_every_position() {
    let mut list: List<u32> = (0..7).collect();
    for i in 0..7 {
        assert_eq!(list.set(i, (i * 10) as u32), Ok(i as u32));
    }
    assert_eq!(list.to_vec(), vec![0, 10, 20, 30, 40, 50, 60]);
}

#[test]
fn structural_equality_for_search() {
    #[derive(Debug, Clone, PartialEq)]
    struct Order {
        id: u64,
        qty: u64,
    }

    let mut list = List::new();
    list.add(Order { id: 1, qty: 10 });
    list.add(Order { id: 2, qty: 20 });

    // A distinct but equal value matches.
    let probe = Order { id: 2, qty: 20 };
    assert_eq!(list.index_of(&probe), Some(1));
    assert!(list.contains(&probe));
    assert!(list.remove(&probe));
    assert_eq!(list.len(), 1);
}

#[test]
fn nearest_end_get_on_hundred() {
    let list: List<u32> = (0..100).collect();
    assert_eq!(list.get(2), Some(&2));
    assert_eq!(list.get(98), Some(&98));
    assert_eq!(list.get(50), Some(&50));
    assert_eq!(list.get(100), None);
}

#[test]
fn clear_is_idempotent() {
    let mut list: List<u32> = (0..3).collect();
    list.clear();
    assert_eq!(list.len(), 0);
    assert!(list.is_empty());
    list.clear();
    assert_eq!(list.len(), 0);
    assert!(list.is_empty());

    list.add(1);
    assert_eq!(list.to_vec(), vec![1]);
}
