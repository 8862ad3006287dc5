//! Property test: engine dibandingkan dengan model referensi `VecDeque`
//! untuk urutan operasi arbitrer, plus properti kuantifikasi universal
//! (urutan drain, simetri index, akunting free/used).
//!
//! Usage:
//!   cargo test --test properties

use proptest::prelude::*;
use std::collections::VecDeque;
use xifo::Xifo;

#[derive(Debug, Clone)]
enum Op {
    Write(u32),
    PopLr,
    PopMr,
    ReadLr(usize),
    ReadMr(usize),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => any::<u32>().prop_map(Op::Write),
        2 => Just(Op::PopLr),
        2 => Just(Op::PopMr),
        1 => (0usize..10).prop_map(Op::ReadLr),
        1 => (0usize..10).prop_map(Op::ReadMr),
    ]
}

proptest! {
    // Window logis buffer selalu identik dengan deque berkapasitas
    // terbatas yang membuang elemen terdepan saat penuh
    #[test]
    fn matches_bounded_deque_model(
        capacity in 1usize..9,
        ops in prop::collection::vec(op_strategy(), 0..80),
    ) {
        let mut xifo: Xifo<u32> = Xifo::with_capacity(capacity).unwrap();
        let mut model: VecDeque<u32> = VecDeque::new();

        for op in ops {
            match op {
                Op::Write(v) => {
                    let free = xifo.write(v);
                    if model.len() == capacity {
                        model.pop_front();
                    }
                    model.push_back(v);
                    prop_assert_eq!(free, capacity - model.len());
                }
                Op::PopLr => prop_assert_eq!(xifo.pop_lr(), model.pop_front()),
                Op::PopMr => prop_assert_eq!(xifo.pop_mr(), model.pop_back()),
                Op::ReadLr(i) => {
                    prop_assert_eq!(xifo.read_lr(i), model.get(i).copied())
                }
                Op::ReadMr(i) => {
                    prop_assert_eq!(xifo.read_mr(i), model.iter().rev().nth(i).copied())
                }
            }
            prop_assert_eq!(xifo.used(), model.len());
            prop_assert_eq!(xifo.free(), capacity - model.len());
            prop_assert_eq!(xifo.is_full(), model.len() == capacity);
            prop_assert_eq!(xifo.is_empty(), model.is_empty());
        }
    }

    // Menulis maksimal `capacity` elemen lalu drain FIFO mengembalikan
    // urutan input persis
    #[test]
    fn fifo_round_trip(values in prop::collection::vec(any::<u32>(), 1..32)) {
        let mut xifo: Xifo<u32> = Xifo::with_capacity(values.len()).unwrap();
        for (written, &v) in values.iter().enumerate() {
            prop_assert_eq!(xifo.used(), written);
            xifo.write(v);
        }
        for &v in &values {
            prop_assert_eq!(xifo.pop_lr(), Some(v));
        }
        prop_assert_eq!(xifo.pop_lr(), None);
    }

    // Drain LIFO mengembalikan urutan input terbalik
    #[test]
    fn lifo_drain_reverses(values in prop::collection::vec(any::<u32>(), 1..32)) {
        let mut xifo: Xifo<u32> = Xifo::with_capacity(values.len()).unwrap();
        for &v in &values {
            xifo.write(v);
        }
        for &v in values.iter().rev() {
            prop_assert_eq!(xifo.pop_mr(), Some(v));
        }
        prop_assert_eq!(xifo.pop_mr(), None);
    }

    // read_lr(i) dan read_mr(count-1-i) menunjuk elemen yang sama,
    // dan peek tidak mengubah state
    #[test]
    fn peek_directions_are_symmetric(
        capacity in 1usize..9,
        writes in prop::collection::vec(any::<u32>(), 0..24),
    ) {
        let mut xifo: Xifo<u32> = Xifo::with_capacity(capacity).unwrap();
        for &v in &writes {
            xifo.write(v);
        }
        let count = xifo.used();
        for i in 0..count {
            prop_assert_eq!(xifo.read_lr(i), xifo.read_mr(count - 1 - i));
        }
        prop_assert_eq!(xifo.read_lr(count), None);
        prop_assert_eq!(xifo.read_mr(count), None);
        prop_assert_eq!(xifo.used(), count);
    }

    // Setiap overflow write membuang tepat satu elemen tertua
    #[test]
    fn overflow_discards_exactly_one_oldest(
        capacity in 1usize..9,
        extra in prop::collection::vec(any::<u32>(), 1..16),
    ) {
        let mut xifo: Xifo<u32> = Xifo::with_capacity(capacity).unwrap();
        for i in 0..capacity as u32 {
            xifo.write(i);
        }
        for (n, &v) in extra.iter().enumerate() {
            xifo.write(v);
            prop_assert_eq!(xifo.used(), capacity);
            prop_assert!(xifo.is_full());
            // Elemen tertua bergeser satu langkah per overflow write
            let expected_oldest = if (n + 1) < capacity {
                Some((n + 1) as u32)
            } else {
                Some(extra[n + 1 - capacity])
            };
            prop_assert_eq!(xifo.read_lr(0), expected_oldest);
        }
    }
}
