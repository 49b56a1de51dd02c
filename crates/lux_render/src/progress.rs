//! Advisory render progress display.

use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};

const BAR_WIDTH: usize = 70;
const SPINNER: [char; 4] = ['|', '/', '-', '\\'];

/// Row-completion counter driving a textual progress bar on stderr.
///
/// All state is explicit and atomic; any worker may call `row_done`.
/// Output is purely advisory, interleaving with other stderr writers
/// is harmless.
pub struct Progress {
    total: usize,
    done: AtomicUsize,
    spin: AtomicUsize,
    enabled: bool,
}

impl Progress {
    pub fn new(total: usize) -> Self {
        Self {
            total: total.max(1),
            done: AtomicUsize::new(0),
            spin: AtomicUsize::new(0),
            enabled: true,
        }
    }

    /// A reporter that counts but never prints, for tests.
    pub fn silent(total: usize) -> Self {
        Self {
            enabled: false,
            ..Self::new(total)
        }
    }

    pub fn done(&self) -> usize {
        self.done.load(Ordering::Relaxed)
    }

    /// Record one finished row and redraw the bar.
    pub fn row_done(&self) {
        let done = self.done.fetch_add(1, Ordering::Relaxed) + 1;
        if !self.enabled {
            return;
        }

        let spin = self.spin.fetch_add(1, Ordering::Relaxed);
        let filled = done * BAR_WIDTH / self.total;
        let percent = done * 100 / self.total;

        let mut line = String::with_capacity(BAR_WIDTH + 16);
        line.push('\r');
        line.push(SPINNER[spin % SPINNER.len()]);
        line.push(' ');
        for i in 0..BAR_WIDTH {
            line.push(if i < filled { '#' } else { ' ' });
        }
        line.push_str(&format!(" {percent:3}%"));

        let mut stderr = std::io::stderr().lock();
        let _ = stderr.write_all(line.as_bytes());
        let _ = stderr.flush();
    }

    pub fn finish(&self) {
        if self.enabled {
            eprintln!("\rDone.{:width$}", "", width = BAR_WIDTH);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn counts_rows_from_many_threads() {
        let progress = Arc::new(Progress::silent(64));

        std::thread::scope(|scope| {
            for _ in 0..4 {
                let progress = progress.clone();
                scope.spawn(move || {
                    for _ in 0..16 {
                        progress.row_done();
                    }
                });
            }
        });

        assert_eq!(progress.done(), 64);
    }
}
