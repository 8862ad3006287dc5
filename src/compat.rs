//! Compatibility surface: alias per lebar elemen dan mode zero-on-miss
//!
//! API klasik menyediakan satu implementasi terpisah per lebar elemen
//! (8/16/32/64-bit, float) dan menyinyalkan kondisi gagal dengan nilai
//! nol. Di sini keduanya tinggal lapisan tipis di atas engine generik:
//! alias tipe menggantikan duplikasi per lebar, dan varian `*_or_zero`
//! mempertahankan kontrak nol-saat-gagal untuk kode yang porting dari
//! API lama.
//!
//! Catatan: pada mode zero-on-miss, nol hasil "gagal" tidak bisa
//! dibedakan dari nol yang memang tersimpan. Pakai kontrak `Option`
//! di [`Xifo`] kecuali kompatibilitas menuntut sebaliknya.

use crate::core::Xifo;

/// Buffer elemen 8-bit unsigned.
pub type Xifo8<S = Box<[u8]>> = Xifo<u8, S>;
/// Buffer elemen 16-bit unsigned.
pub type Xifo16<S = Box<[u16]>> = Xifo<u16, S>;
/// Buffer elemen 32-bit unsigned.
pub type Xifo32<S = Box<[u32]>> = Xifo<u32, S>;
/// Buffer elemen 64-bit unsigned.
pub type Xifo64<S = Box<[u64]>> = Xifo<u64, S>;
/// Buffer elemen float 32-bit.
pub type Xifo32f<S = Box<[f32]>> = Xifo<f32, S>;

/// Buffer elemen 8-bit signed.
pub type XifoI8<S = Box<[i8]>> = Xifo<i8, S>;
/// Buffer elemen 16-bit signed.
pub type XifoI16<S = Box<[i16]>> = Xifo<i16, S>;
/// Buffer elemen 32-bit signed.
pub type XifoI32<S = Box<[i32]>> = Xifo<i32, S>;
/// Buffer elemen 64-bit signed.
pub type XifoI64<S = Box<[i64]>> = Xifo<i64, S>;

impl<T, S> Xifo<T, S>
where
    T: Copy + Default,
    S: AsRef<[T]> + AsMut<[T]>,
{
    /// [`read_lr`](Self::read_lr) mode kompatibilitas: nilai nol saat
    /// `index >= used()`.
    #[inline(always)]
    pub fn read_lr_or_zero(&self, index: usize) -> T {
        self.read_lr(index).unwrap_or_default()
    }

    /// [`read_mr`](Self::read_mr) mode kompatibilitas: nilai nol saat
    /// `index >= used()`.
    #[inline(always)]
    pub fn read_mr_or_zero(&self, index: usize) -> T {
        self.read_mr(index).unwrap_or_default()
    }

    /// [`pop_lr`](Self::pop_lr) mode kompatibilitas: nilai nol saat
    /// buffer kosong.
    #[inline(always)]
    pub fn pop_lr_or_zero(&mut self) -> T {
        self.pop_lr().unwrap_or_default()
    }

    /// [`pop_mr`](Self::pop_mr) mode kompatibilitas: nilai nol saat
    /// buffer kosong.
    #[inline(always)]
    pub fn pop_mr_or_zero(&mut self) -> T {
        self.pop_mr().unwrap_or_default()
    }
}
