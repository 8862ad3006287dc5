//! xifo - Fixed-Capacity Circular Buffer (FIFO + LIFO)
//!
//! Arsitektur:
//! - Generik: satu engine untuk semua tipe elemen `Copy + Default`
//! - Dual-ended: peek/pop berorientasi tertua (lr) dan terbaru (mr)
//! - Overwrite-on-full: write tidak pernah gagal, elemen tertua dibuang
//! - Pool eksternal: storage milik caller (`&mut [T]`, mmap) atau milik
//!   buffer (`Box<[T]>`), tanpa alokasi setelah konstruksi
//!
//! Buffer yang sama bisa dipakai sebagai antrian FIFO (`pop_lr`) maupun
//! history window LIFO (`read_mr`/`pop_mr`), misalnya untuk sample
//! audio/sensor terbaru di aplikasi DSP.
//!
//! ```
//! use xifo::Xifo;
//!
//! let mut window: Xifo<f32> = Xifo::with_capacity(4).unwrap();
//! for sample in [1.0, 2.0, 3.0, 4.0, 5.0] {
//!     window.write(sample);
//! }
//! assert_eq!(window.read_mr(0), Some(5.0)); // paling baru
//! assert_eq!(window.read_lr(0), Some(2.0)); // tertua yang tersisa
//! assert_eq!(window.pop_lr(), Some(2.0));
//! ```
//!
//! Tidak ada sinkronisasi internal: akses dari lebih dari satu konteks
//! eksekusi harus dilindungi caller. Lihat dokumentasi [`Xifo`].

pub mod compat;
pub mod core;

pub use crate::core::{ConstructionError, MmapPool, PoolElement, Xifo};
