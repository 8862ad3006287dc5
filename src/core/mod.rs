//! Core module: Ring Buffer Engine dan element pool
//!
//! Prinsip desain:
//! - Satu implementasi generik untuk semua lebar elemen
//! - Pool pre-allocated milik caller atau milik buffer, tanpa alokasi
//!   setelah konstruksi
//! - Kondisi gagal (kosong, index di luar jangkauan) lewat `Option`,
//!   bukan nilai nol ambigu

mod error;
mod mmap_pool;
mod xifo;

pub use error::ConstructionError;
pub use mmap_pool::{MmapPool, PoolElement};
pub use xifo::Xifo;
