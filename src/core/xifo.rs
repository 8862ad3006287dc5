//! Fixed-Capacity Circular Buffer dengan akses FIFO dan LIFO
//!
//! Satu implementasi generik menggantikan duplikasi per lebar elemen
//! (8/16/32/64-bit, float). Cursor berupa index dengan wraparound modulo
//! eksplisit - tidak ada pointer arithmetic.
//!
//! Prinsip desain:
//! - Overwrite-on-full: write tidak pernah gagal, elemen tertua dibuang
//! - Dual-ended: peek/pop dari sisi tertua (lr) maupun terbaru (mr)
//! - No-Allocation: pool pre-allocated, tidak ada alokasi di hot path
//! - Single-threaded: exclusion diatur caller, bukan oleh buffer

use std::marker::PhantomData;

use super::error::ConstructionError;

/// Circular buffer berkapasitas tetap di atas memory pool `S`.
///
/// `T` adalah tipe elemen (`Copy + Default`; `T::default()` dipakai sebagai
/// nilai nol saat clear dan pop). `S` adalah storage pool: `Box<[T]>` untuk
/// pool milik sendiri, `&mut [T]` untuk pool pinjaman milik caller, atau
/// storage lain yang contiguous seperti [`MmapPool`](super::MmapPool).
/// Lifetime pool pinjaman dijamin compiler lebih panjang dari buffer.
///
/// Dua cursor menjaga window atas pool:
/// - `write`: slot tujuan write berikutnya
/// - `read`: slot elemen yang paling baru ditulis
///
/// Region valid adalah `count` elemen yang berakhir di `read`, mundur
/// modulo kapasitas - sliding window, bukan sub-range tetap.
///
/// # Concurrency
///
/// Tidak ada sinkronisasi internal. Semua operasi harus diperlakukan
/// sebagai atomic oleh caller: cegah write/pop/read bersamaan pada buffer
/// yang sama (mutex, atau disable interrupt di konteks embedded). Semua
/// mutator mengambil `&mut self`, jadi aliasing sudah ditolak compiler;
/// yang tersisa adalah tanggung jawab caller saat membagi buffer antar
/// konteks eksekusi.
pub struct Xifo<T, S = Box<[T]>> {
    pool: S,
    capacity: usize,
    // Index slot tujuan write berikutnya
    write: usize,
    // Index elemen paling baru
    read: usize,
    count: usize,
    full: bool,
    _elem: PhantomData<T>,
}

impl<T: Copy + Default> Xifo<T, Box<[T]>> {
    /// Membuat buffer dengan pool milik sendiri berisi `capacity` elemen.
    ///
    /// Pool dialokasikan sekali di sini dan dilepas saat buffer di-drop.
    /// Tidak ada alokasi setelah konstruksi.
    pub fn with_capacity(capacity: usize) -> Result<Self, ConstructionError> {
        if capacity == 0 {
            return Err(ConstructionError::ZeroCapacity);
        }
        Self::new(vec![T::default(); capacity].into_boxed_slice())
    }
}

impl<T, S> Xifo<T, S>
where
    T: Copy + Default,
    S: AsRef<[T]> + AsMut<[T]>,
{
    /// Binding buffer ke pool yang disediakan caller.
    ///
    /// Kapasitas adalah panjang pool. Isi pool tidak di-zero - elemen lama
    /// baru terlihat setelah ditulis. Gagal jika pool kosong.
    pub fn new(pool: S) -> Result<Self, ConstructionError> {
        let capacity = pool.as_ref().len();
        if capacity == 0 {
            return Err(ConstructionError::ZeroCapacity);
        }
        Ok(Self {
            pool,
            capacity,
            write: 0,
            read: 0,
            count: 0,
            full: false,
            _elem: PhantomData,
        })
    }

    /// Binding dengan kapasitas eksplisit, bentuk `init(pool, size)` klasik.
    ///
    /// Gagal jika panjang pool tidak sama persis dengan `capacity`.
    pub fn bind(pool: S, capacity: usize) -> Result<Self, ConstructionError> {
        let pool_len = pool.as_ref().len();
        if pool_len != capacity {
            return Err(ConstructionError::PoolSizeMismatch {
                requested: capacity,
                pool: pool_len,
            });
        }
        Self::new(pool)
    }

    /// Menulis satu elemen ke buffer. Tidak pernah gagal.
    ///
    /// Saat penuh, elemen tertua ditimpa diam-diam (overwrite-on-full).
    /// Cursor `read` selalu menunjuk elemen yang baru saja ditulis.
    ///
    /// Returns jumlah slot kosong tersisa - diagnostik, bukan sinyal
    /// sukses/gagal.
    #[inline(always)]
    pub fn write(&mut self, value: T) -> usize {
        self.pool.as_mut()[self.write] = value;
        // Elemen yang baru ditulis menjadi "most recent"
        self.read = self.write;
        self.write += 1;
        if self.write == self.capacity {
            self.write = 0;
        }
        self.count += 1;
        if self.count >= self.capacity {
            // Saturasi: count tidak pernah melewati kapasitas
            self.full = true;
            self.count = self.capacity;
        }
        self.capacity - self.count
    }

    /// Peek berorientasi least-recent (FIFO): index 0 = elemen tertua,
    /// index `used() - 1` = elemen terbaru.
    ///
    /// Tidak mengubah state buffer. `None` jika `index >= used()`.
    #[inline(always)]
    pub fn read_lr(&self, index: usize) -> Option<T> {
        if index >= self.count {
            return None;
        }
        let back = self.count - 1 - index;
        Some(self.pool.as_ref()[self.slot_back(back)])
    }

    /// Peek berorientasi most-recent (LIFO/history): index 0 = elemen
    /// terbaru, index `used() - 1` = elemen tertua. Cocok untuk window
    /// history ala DSP.
    ///
    /// Tidak mengubah state buffer. `None` jika `index >= used()`.
    #[inline(always)]
    pub fn read_mr(&self, index: usize) -> Option<T> {
        if index >= self.count {
            return None;
        }
        Some(self.pool.as_ref()[self.slot_back(index)])
    }

    /// Pop elemen tertua (FIFO). `None` jika buffer kosong.
    ///
    /// Slot yang dikosongkan di-zero. Cursor `write` TIDAK bergerak:
    /// slot bekas pop baru terpakai lagi saat `write` wrap ke sana secara
    /// alami. Ini menjaga rotasi ring yang ketat, kontras dengan
    /// [`pop_mr`](Self::pop_mr) yang langsung me-reclaim slotnya.
    #[inline(always)]
    pub fn pop_lr(&mut self) -> Option<T> {
        if self.count == 0 {
            return None;
        }
        let slot = self.slot_back(self.count - 1);
        let pool = self.pool.as_mut();
        let value = pool[slot];
        pool[slot] = T::default();
        self.count -= 1;
        self.full = false;
        Some(value)
    }

    /// Pop elemen terbaru (LIFO). `None` jika buffer kosong.
    ///
    /// Slot yang dikosongkan di-zero dan langsung di-reclaim: `write`
    /// dikembalikan ke slot tersebut, sehingga write berikutnya mendarat
    /// persis di sana. `pop_mr` + `write` berperilaku seperti push/pop
    /// stack pada slot yang sama.
    #[inline(always)]
    pub fn pop_mr(&mut self) -> Option<T> {
        if self.count == 0 {
            return None;
        }
        let read = self.read;
        let pool = self.pool.as_mut();
        let value = pool[read];
        pool[read] = T::default();
        // Reclaim: slot yang baru dikosongkan jadi target write berikutnya
        self.write = read;
        self.read = self.slot_back(1);
        self.count -= 1;
        self.full = false;
        Some(value)
    }

    /// Menulis nilai nol ke seluruh slot pool.
    ///
    /// Cursor dan count TIDAK disentuh - ini primitif terpisah dari
    /// [`reset`](Self::reset). Elemen yang masih "terpakai" akan terbaca
    /// sebagai nol setelahnya. O(capacity).
    pub fn clear(&mut self) {
        for slot in self.pool.as_mut() {
            *slot = T::default();
        }
    }

    /// Zero seluruh pool DAN kembalikan buffer ke state awal:
    /// cursor ke slot 0, count 0, flag full turun. O(capacity).
    pub fn reset(&mut self) {
        self.clear();
        self.write = 0;
        self.read = 0;
        self.count = 0;
        self.full = false;
    }

    /// Kapasitas buffer (jumlah slot di pool).
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Kapasitas buffer, nama klasik `get_size`.
    /// Alias dari [`capacity`](Self::capacity), bukan jumlah elemen valid
    /// (itu [`used`](Self::used)).
    #[inline(always)]
    pub fn size(&self) -> usize {
        self.capacity
    }

    /// Jumlah elemen valid saat ini.
    #[inline(always)]
    pub fn used(&self) -> usize {
        self.count
    }

    /// Jumlah slot kosong (`capacity - used`).
    #[inline(always)]
    pub fn free(&self) -> usize {
        self.capacity - self.count
    }

    /// Cek apakah buffer penuh.
    #[inline(always)]
    pub fn is_full(&self) -> bool {
        self.full
    }

    /// Cek apakah buffer kosong.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Melepas buffer dan mengembalikan pool ke caller.
    pub fn into_pool(self) -> S {
        self.pool
    }

    /// Index slot `back` langkah di belakang cursor `read`, wraparound
    /// modulo kapasitas. Precondition: `back <= capacity`.
    #[inline(always)]
    fn slot_back(&self, back: usize) -> usize {
        (self.read + self.capacity - back) % self.capacity
    }
}
