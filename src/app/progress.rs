use crossterm::{cursor, execute};
use std::io::{stdout, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

const FRAMES: &[&str] = &["|", "/", "-", "\\"];
const FRAME_INTERVAL: Duration = Duration::from_millis(120);

pub struct Spinner {
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl Spinner {
    pub fn start(label: &str) -> Self {
        let stop = Arc::new(AtomicBool::new(false));
        let stop_flag = stop.clone();
        let label = label.to_string();
        let _ = execute!(stdout(), cursor::Hide);
        let handle = thread::spawn(move || {
            let mut frame = 0usize;
            while !stop_flag.load(Ordering::Relaxed) {
                print!("\r{} {label}", FRAMES[frame % FRAMES.len()]);
                let _ = stdout().flush();
                frame += 1;
                thread::sleep(FRAME_INTERVAL);
            }
            print!("\r{}\r", " ".repeat(label.len() + 2));
            let _ = stdout().flush();
        });
        Self {
            stop,
            handle: Some(handle),
        }
    }

    pub fn stop(mut self) {
        self.finish();
    }

    fn finish(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
        let _ = execute!(stdout(), cursor::Show);
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        if self.handle.is_some() {
            self.finish();
        }
    }
}
