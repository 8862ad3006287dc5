//! History Window Demo - smoothing stream sensor
//!
//! Simulasi stream sample sensor masuk ke window most-recent
//! berkapasitas tetap:
//! 1. Setiap sample baru di-write (yang tertua tergusur saat penuh)
//! 2. Moving average dihitung lewat peek `read_mr` tanpa mengubah state
//! 3. Di akhir, isi window di-drain FIFO dengan `pop_lr`
//!
//! Usage:
//!   cargo run --release --example history_window

use xifo::Xifo;

const WINDOW: usize = 8;
const SAMPLES: usize = 48;

/// Pseudo-random walk sederhana untuk simulasi sensor
fn next_sample(state: &mut u64) -> f32 {
    *state = state
        .wrapping_mul(6364136223846793005)
        .wrapping_add(1442695040888963407);
    let noise = ((*state >> 33) % 2000) as f32 / 1000.0 - 1.0;
    20.0 + 5.0 * noise
}

fn main() {
    println!("📊 xifo History Window Demo");
    println!("===========================\n");

    let mut window: Xifo<f32> = Xifo::with_capacity(WINDOW).unwrap();
    let mut rng = 0x5EED_u64;

    for n in 0..SAMPLES {
        let sample = next_sample(&mut rng);
        window.write(sample);

        // Rata-rata window: read_mr(0) = terbaru, mundur ke yang tertua
        let mut sum = 0.0f32;
        for i in 0..window.used() {
            sum += window.read_mr(i).unwrap_or_default();
        }
        let avg = sum / window.used() as f32;

        if n % 8 == 7 {
            println!(
                "  sample #{:02}: raw = {:6.3}  avg({}) = {:6.3}  [used {}/{}]",
                n,
                sample,
                window.used(),
                avg,
                window.used(),
                window.capacity()
            );
        }
    }

    println!("\n  Drain FIFO (tertua lebih dulu):");
    let mut drained = Vec::new();
    while let Some(v) = window.pop_lr() {
        drained.push(v);
    }
    println!("  {:?}", drained);
    assert!(window.is_empty());

    println!("\n✅ Demo selesai: {} sample tersisa di window", drained.len());
}
