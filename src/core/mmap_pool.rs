//! Memory-Mapped Element Pool
//!
//! Pool elemen yang di-backing file lewat mmap, bisa langsung dipakai
//! sebagai storage [`Xifo`](super::Xifo):
//! - Zero-copy: slot buffer hidup langsung di page cache
//! - Persistence: isi pool bertahan melewati restart proses
//!   (cursor buffer tidak ikut tersimpan - hanya isi pool)
//!
//! Layout file: header 64-byte aligned (magic, versi, lebar elemen,
//! kapasitas) diikuti payload `capacity * size_of::<T>()` bytes. Offset
//! payload = 64 menjaga alignment untuk semua lebar elemen yang didukung.

use memmap2::{MmapMut, MmapOptions};
use std::fs::OpenOptions;
use std::io;
use std::marker::PhantomData;
use std::path::Path;

/// Header di awal file pool - menyimpan metadata untuk validasi
#[repr(C, align(64))]
struct PoolHeader {
    magic: u64,    // Magic number untuk validasi format
    version: u32,  // Versi layout
    elem_size: u32, // Lebar elemen dalam bytes
    capacity: u64, // Jumlah elemen di pool
}

const MAGIC: u64 = 0x5849_464F_504F_4F4C; // "XIFOPOOL" in hex
const VERSION: u32 = 1;
const HEADER_SIZE: usize = std::mem::size_of::<PoolHeader>();

/// Tipe elemen yang boleh hidup di pool mmap.
///
/// # Safety
///
/// Implementor menjamin setiap bit pattern adalah nilai `T` yang valid,
/// karena isi pool dibaca ulang dari file tanpa validasi per elemen.
/// Tipe dengan niche/padding (bool, enum, reference, struct ber-padding)
/// tidak boleh mengimplementasikan trait ini.
pub unsafe trait PoolElement: Copy + Default {}

unsafe impl PoolElement for u8 {}
unsafe impl PoolElement for u16 {}
unsafe impl PoolElement for u32 {}
unsafe impl PoolElement for u64 {}
unsafe impl PoolElement for i8 {}
unsafe impl PoolElement for i16 {}
unsafe impl PoolElement for i32 {}
unsafe impl PoolElement for i64 {}
unsafe impl PoolElement for f32 {}
unsafe impl PoolElement for f64 {}

/// Pool elemen persistent di atas file mmap.
#[derive(Debug)]
pub struct MmapPool<T> {
    mmap: MmapMut,
    capacity: usize,
    _elem: PhantomData<T>,
}

impl<T: PoolElement> MmapPool<T> {
    /// Membuat atau membuka pool file dengan kapasitas `capacity` elemen.
    ///
    /// File baru (atau file dengan magic asing) diinisialisasi ulang.
    /// File dengan magic cocok tapi versi, lebar elemen, atau kapasitas
    /// berbeda ditolak dengan `InvalidData`.
    pub fn open<P: AsRef<Path>>(path: P, capacity: usize) -> io::Result<Self> {
        if capacity == 0 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "pool capacity must be at least 1",
            ));
        }

        let elem_size = std::mem::size_of::<T>();
        let total_size = HEADER_SIZE + capacity * elem_size;

        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(path)?;

        // Validasi header yang sudah ada SEBELUM menyentuh ukuran file:
        // open yang ditolak tidak boleh merusak pool tersimpan
        if file.metadata()?.len() >= HEADER_SIZE as u64 {
            // SAFETY: Region read-only sepanjang HEADER_SIZE dan file
            // minimal sepanjang itu; mmap page-aligned sehingga alignment
            // 64 terpenuhi
            let probe = unsafe { MmapOptions::new().len(HEADER_SIZE).map(&file)? };
            let header = unsafe { &*(probe.as_ptr() as *const PoolHeader) };
            if header.magic == MAGIC
                && (header.version != VERSION
                    || header.elem_size != elem_size as u32
                    || header.capacity != capacity as u64)
            {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidData,
                    "pool file does not match requested element size or capacity",
                ));
            }
        }

        // Sampai sini file pasti baru, ber-magic asing, atau cocok persis
        // (set_len jadi no-op untuk file yang cocok)
        file.set_len(total_size as u64)?;

        // SAFETY: File dibuka dengan read/write permission dan panjangnya
        // sudah dipastikan total_size
        let mut mmap = unsafe { MmapOptions::new().len(total_size).map_mut(&file)? };

        // SAFETY: Header berada di awal region; mmap page-aligned sehingga
        // alignment 64 terpenuhi
        let header = unsafe { &mut *(mmap.as_mut_ptr() as *mut PoolHeader) };

        if header.magic != MAGIC {
            header.magic = MAGIC;
            header.version = VERSION;
            header.elem_size = elem_size as u32;
            header.capacity = capacity as u64;
        }

        Ok(Self {
            mmap,
            capacity,
            _elem: PhantomData,
        })
    }

    /// Kapasitas pool dalam elemen.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Flush isi pool ke disk secara sinkron.
    pub fn flush(&self) -> io::Result<()> {
        self.mmap.flush()
    }
}

impl<T: PoolElement> AsRef<[T]> for MmapPool<T> {
    #[inline(always)]
    fn as_ref(&self) -> &[T] {
        // SAFETY: Payload mulai di offset HEADER_SIZE (64) dari pointer
        // page-aligned, jadi aligned untuk T; panjang region menjamin
        // capacity elemen; PoolElement menjamin semua bit pattern valid
        unsafe {
            let ptr = self.mmap.as_ptr().add(HEADER_SIZE) as *const T;
            std::slice::from_raw_parts(ptr, self.capacity)
        }
    }
}

impl<T: PoolElement> AsMut<[T]> for MmapPool<T> {
    #[inline(always)]
    fn as_mut(&mut self) -> &mut [T] {
        // SAFETY: Sama dengan as_ref; &mut self menjamin akses eksklusif
        unsafe {
            let ptr = self.mmap.as_mut_ptr().add(HEADER_SIZE) as *mut T;
            std::slice::from_raw_parts_mut(ptr, self.capacity)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_persists_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pool.dat");

        {
            let mut pool: MmapPool<u32> = MmapPool::open(&path, 8).unwrap();
            pool.as_mut()[0] = 0xDEAD_BEEF;
            pool.as_mut()[7] = 42;
            pool.flush().unwrap();
        }

        let pool: MmapPool<u32> = MmapPool::open(&path, 8).unwrap();
        assert_eq!(pool.as_ref()[0], 0xDEAD_BEEF);
        assert_eq!(pool.as_ref()[7], 42);
        assert_eq!(pool.capacity(), 8);
    }

    #[test]
    fn test_pool_rejects_layout_mismatch() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pool.dat");

        let _pool: MmapPool<u32> = MmapPool::open(&path, 8).unwrap();

        // Kapasitas beda
        let err = MmapPool::<u32>::open(&path, 16).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);

        // Lebar elemen beda
        let err = MmapPool::<u64>::open(&path, 8).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_rejected_open_leaves_file_intact() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pool.dat");

        {
            let mut pool: MmapPool<u32> = MmapPool::open(&path, 16).unwrap();
            pool.as_mut()[15] = 0xCAFE_F00D;
            pool.flush().unwrap();
        }
        let len_before = std::fs::metadata(&path).unwrap().len();

        // Kapasitas lebih kecil ditolak tanpa memotong file
        let err = MmapPool::<u32>::open(&path, 8).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        assert_eq!(std::fs::metadata(&path).unwrap().len(), len_before);

        // Elemen terakhir masih terbaca setelah open yang gagal
        let pool: MmapPool<u32> = MmapPool::open(&path, 16).unwrap();
        assert_eq!(pool.as_ref()[15], 0xCAFE_F00D);
    }

    #[test]
    fn test_pool_rejects_zero_capacity() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pool.dat");
        let err = MmapPool::<u8>::open(&path, 0).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }
}
