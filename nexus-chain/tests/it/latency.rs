//! Latency histograms. Run with `cargo test --release -- --ignored --nocapture`.

use std::hint::black_box;
use std::time::Instant;

use hdrhistogram::Histogram;
use nexus_chain::{Deque, List, Stack};

const WARMUP: usize = 10_000;
const ITERATIONS: usize = 100_000;

fn print_histogram(name: &str, hist: &Histogram<u64>) {
    println!(
        "{:24} p50: {:5} ns | p99: {:5} ns | p999: {:6} ns | min: {:4} | max: {:6}",
        name,
        hist.value_at_quantile(0.50),
        hist.value_at_quantile(0.99),
        hist.value_at_quantile(0.999),
        hist.min(),
        hist.max(),
    );
}

#[test]
#[ignore]
fn latency_deque_add_remove() {
    let mut deque: Deque<u64> = Deque::with_capacity(16);
    let mut hist = Histogram::<u64>::new(3).unwrap();

    for i in 0..WARMUP {
        deque.add_last(i as u64);
        black_box(deque.remove_first());
    }

    for i in 0..ITERATIONS {
        let start = Instant::now();
        deque.add_last(i as u64);
        black_box(deque.remove_first());
        hist.record(start.elapsed().as_nanos() as u64).unwrap();
    }

    print_histogram("deque add/remove", &hist);
}

#[test]
#[ignore]
fn latency_stack_push_pop() {
    let mut stack: Stack<u64> = Stack::with_capacity(16);
    let mut hist = Histogram::<u64>::new(3).unwrap();

    for i in 0..WARMUP {
        stack.push(i as u64);
        black_box(stack.pop());
    }

    for i in 0..ITERATIONS {
        let start = Instant::now();
        stack.push(i as u64);
        black_box(stack.pop());
        hist.record(start.elapsed().as_nanos() as u64).unwrap();
    }

    print_histogram("stack push/pop", &hist);
}

#[test]
#[ignore]
fn latency_list_get_near_vs_middle() {
    const LEN: usize = 1_000;

    let list: List<u64> = (0..LEN as u64).collect();
    let mut near = Histogram::<u64>::new(3).unwrap();
    let mut middle = Histogram::<u64>::new(3).unwrap();

    for _ in 0..WARMUP {
        black_box(list.get(LEN - 2));
        black_box(list.get(LEN / 2));
    }

    for _ in 0..ITERATIONS {
        let start = Instant::now();
        black_box(list.get(LEN - 2));
        near.record(start.elapsed().as_nanos() as u64).unwrap();

        let start = Instant::now();
        black_box(list.get(LEN / 2));
        middle.record(start.elapsed().as_nanos() as u64).unwrap();
    }

    print_histogram("list get near tail", &near);
    print_histogram("list get middle", &middle);
}
