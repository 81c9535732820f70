//! Seeded random operation sequences against a `VecDeque` model.

use std::collections::VecDeque;

use nexus_chain::{Deque, List, OutOfRange};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

const STEPS: usize = 10_000;

fn make_rng(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}

#[test]
fn deque_ends_track_model() {
    for seed in 0..8 {
        let mut rng = make_rng(seed);
        let mut deque: Deque<u64> = Deque::new();
        let mut model: VecDeque<u64> = VecDeque::new();

        for step in 0..STEPS as u64 {
            match rng.gen_range(0..4) {
                0 => {
                    deque.add_first(step);
                    model.push_front(step);
                }
                1 => {
                    deque.add_last(step);
                    model.push_back(step);
                }
                2 => assert_eq!(deque.remove_first(), model.pop_front()),
                _ => assert_eq!(deque.remove_last(), model.pop_back()),
            }

            assert_eq!(deque.len(), model.len());
            assert_eq!(deque.peek_first(), model.front());
            assert_eq!(deque.peek_last(), model.back());
        }

        // Reachable count matches len, and the two walks mirror each other.
        assert_eq!(deque.iter().count(), deque.len());
        let forward: Vec<_> = deque.iter().collect();
        let mut backward: Vec<_> = deque.iter().rev().collect();
        backward.reverse();
        assert_eq!(forward, backward);
        assert!(deque.iter().eq(model.iter()));
    }
}

#[test]
fn list_ops_track_model() {
    let mut rng = make_rng(0xC0FFEE);
    let mut list: List<u64> = List::new();
    let mut model: Vec<u64> = Vec::new();

    for step in 0..STEPS as u64 {
        let len = model.len();
        match rng.gen_range(0..8) {
            0 => {
                let index = rng.gen_range(0..=len + 2);
                let result = list.add_at(index, step);
                if index <= len {
                    assert!(result.is_ok());
                    model.insert(index, step);
                } else {
                    assert_eq!(result.unwrap_err().error, OutOfRange { index, len });
                }
            }
            1 => {
                let index = rng.gen_range(0..=len + 2);
                let result = list.remove_at(index);
                if index < len {
                    assert_eq!(result, Ok(model.remove(index)));
                } else {
                    assert_eq!(result, Err(OutOfRange { index, len }));
                }
            }
            2 => {
                let index = rng.gen_range(0..=len + 2);
                assert_eq!(list.get(index), model.get(index));
            }
            3 => {
                let index = rng.gen_range(0..=len + 2);
                let result = list.set(index, step);
                if index < len {
                    let old = std::mem::replace(&mut model[index], step);
                    assert_eq!(result.ok(), Some(old));
                } else {
                    assert!(result.is_err());
                }
            }
            4 if len > 0 => {
                let probe = model[rng.gen_range(0..len)];
                let expected = model.iter().position(|&v| v == probe);
                assert_eq!(list.index_of(&probe), expected);
                assert!(list.remove(&probe));
                if let Some(i) = expected {
                    model.remove(i);
                }
            }
            5 => {
                list.add_first(step);
                model.insert(0, step);
            }
            6 => {
                list.add(step);
                model.push(step);
            }
            _ => {
                assert_eq!(list.remove_first(), (!model.is_empty()).then(|| model.remove(0)));
            }
        }

        assert_eq!(list.len(), model.len());
    }

    assert_eq!(list.to_vec(), model);
}

#[test]
fn to_vec_equals_draining_a_copy() {
    let mut rng = make_rng(7);
    let mut list: List<u32> = List::new();
    for _ in 0..500 {
        let value = rng.r#gen::<u32>();
        let index = rng.gen_range(0..=list.len());
        list.add_at(index, value).unwrap();
        if rng.gen_ratio(1, 4) {
            let index = rng.gen_range(0..list.len());
            list.remove_at(index).unwrap();
        }
    }

    let mut copy = list.clone();
    let mut drained = Vec::with_capacity(copy.len());
    while let Some(value) = copy.remove_first() {
        drained.push(value);
    }
    assert_eq!(list.to_vec(), drained);
    assert!(copy.is_empty());
}
