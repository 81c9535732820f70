use nexus_chain::Deque;

#[test]
fn scenario() {
    let mut deque = Deque::new();
    deque.add_last(1);
    deque.add_first(2);
    deque.add_last(3);

    assert_eq!(deque.iter().copied().collect::<Vec<_>>(), vec![2, 1, 3]);
    assert_eq!(deque.remove_first(), Some(2));
    assert_eq!(deque.remove_last(), Some(3));
    assert_eq!(deque.len(), 1);
}

#[test]
fn empty_is_absent_not_error() {
    let mut deque: Deque<Vec<u8>> = Deque::new();
    assert_eq!(deque.peek_first(), None);
    assert_eq!(deque.peek_last(), None);
    assert_eq!(deque.remove_first(), None);
    assert_eq!(deque.remove_last(), None);
    assert_eq!(deque.len(), 0);
}

#[test]
fn forward_and_backward_are_mirrors() {
    let mut deque = Deque::with_capacity(8);
    for i in 0..8 {
        if i % 2 == 0 {
            deque.add_first(i);
        } else {
            deque.add_last(i);
        }
    }

    let forward: Vec<_> = deque.iter().copied().collect();
    let mut backward: Vec<_> = deque.iter().rev().copied().collect();
    backward.reverse();
    assert_eq!(forward, backward);
    assert_eq!(forward, vec![6, 4, 2, 0, 1, 3, 5, 7]);
}

#[test]
fn iteration_is_lazy_and_restartable() {
    let deque: Deque<u32> = (1..=5).collect();

    let mut iter = deque.iter();
    assert_eq!(iter.len(), 5);
    assert_eq!(iter.next(), Some(&1));
    assert_eq!(iter.len(), 4);

    assert_eq!(deque.iter().next(), Some(&1));
    assert_eq!(deque.iter().count(), 5);
}

#[test]
fn send_across_threads() {
    let deque: Deque<u32> = (0..4).collect();
    let handle = std::thread::spawn(move || deque.into_iter().sum::<u32>());
    assert_eq!(handle.join().unwrap(), 6);
}
