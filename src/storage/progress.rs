use std::io::{self, Read};
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct ProgressStats {
    pub total_bytes: u64,
    pub processed_bytes: u64,
    pub elapsed: Duration,
}

impl ProgressStats {
    pub fn bytes_per_second(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.processed_bytes as f64 / secs
        } else {
            0.0
        }
    }
}

pub trait ProgressFormatter {
    fn format_progress(&self) -> String;
    fn format_speed(&self) -> String;
}

impl ProgressFormatter for ProgressStats {
    fn format_progress(&self) -> String {
        if self.total_bytes == 0 {
            return format!("{} bytes", self.processed_bytes);
        }
        let percent = (self.processed_bytes as f64 / self.total_bytes as f64) * 100.0;
        format!("{:.1}% ({}/{} bytes)", percent, self.processed_bytes, self.total_bytes)
    }

    fn format_speed(&self) -> String {
        let speed = self.bytes_per_second();
        if speed >= 1_000_000.0 {
            format!("{:.2} MB/s", speed / 1_000_000.0)
        } else if speed >= 1_000.0 {
            format!("{:.2} KB/s", speed / 1_000.0)
        } else {
            format!("{:.0} B/s", speed)
        }
    }
}

/// Counts the bytes pulled through a reader.
pub struct ProgressReader<R> {
    inner: R,
    total_bytes: u64,
    processed_bytes: u64,
    start_time: Instant,
}

impl<R: Read> ProgressReader<R> {
    pub fn new(inner: R, total_bytes: u64) -> Self {
        Self {
            inner,
            total_bytes,
            processed_bytes: 0,
            start_time: Instant::now(),
        }
    }

    pub fn stats(&self) -> ProgressStats {
        ProgressStats {
            total_bytes: self.total_bytes,
            processed_bytes: self.processed_bytes,
            elapsed: self.start_time.elapsed(),
        }
    }
}

impl<R: Read> Read for ProgressReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        self.processed_bytes += n as u64;
        Ok(n)
    }
}
