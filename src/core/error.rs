//! Error types untuk konstruksi buffer
//!
//! Semua misuse saat konstruksi ditolak di muka (fail-fast).
//! Operasi runtime tidak pernah menghasilkan error - kondisi "kosong"
//! atau "index di luar jangkauan" disinyalkan lewat `Option`.

use thiserror::Error;

/// Error saat binding buffer ke memory pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConstructionError {
    /// Kapasitas harus minimal 1 elemen.
    #[error("buffer capacity must be at least 1")]
    ZeroCapacity,

    /// Pool yang diberikan tidak cocok dengan kapasitas yang diminta.
    #[error("pool holds {pool} elements but capacity {requested} was requested")]
    PoolSizeMismatch {
        /// Kapasitas yang diminta caller.
        requested: usize,
        /// Jumlah elemen aktual di pool.
        pool: usize,
    },
}
