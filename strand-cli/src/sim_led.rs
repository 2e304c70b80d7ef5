//! A simulated LED strip: a pixel buffer that renders into the log.

use log::info;
use strand_core::hal::LedDriver;

#[derive(Default)]
pub struct SimLedStrip {
    pixels: Vec<i32>,
    frames: u64,
}

impl SimLedStrip {
    pub fn new() -> Self {
        SimLedStrip::default()
    }
}

impl LedDriver for SimLedStrip {
    fn init(&mut self, total: usize, per_strip: usize) {
        info!("led strip up: {} pixels, {} per strip", total, per_strip);
        self.pixels = vec![0; total];
        self.frames = 0;
    }

    fn len(&self) -> usize {
        self.pixels.len()
    }

    fn set_pixel(&mut self, idx: usize, color: i32) {
        if let Some(p) = self.pixels.get_mut(idx) {
            *p = color;
        }
    }

    fn get_pixel(&self, idx: usize) -> i32 {
        self.pixels.get(idx).copied().unwrap_or(0)
    }

    fn show(&mut self) {
        self.frames += 1;
        let preview: Vec<String> = self
            .pixels
            .iter()
            .take(8)
            .map(|c| format!("{:06X}", c & 0xffffff))
            .collect();
        info!(
            "frame {}: {}{}",
            self.frames,
            preview.join(" "),
            if self.pixels.len() > 8 { " ..." } else { "" }
        );
    }

    fn busy(&self) -> bool {
        false
    }
}
