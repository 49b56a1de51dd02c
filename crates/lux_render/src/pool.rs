//! Fixed-size worker pool with a FIFO job queue.
//!
//! Workers block on a condition variable while the queue is empty;
//! `await_all` blocks the coordinator until the queue is drained and
//! no job is still executing. A panicking job does not kill its
//! worker: the panic is caught, counted, and surfaced as an error
//! from `await_all` so the caller can abort before producing output.

use std::collections::VecDeque;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::{Arc, Condvar, Mutex};
use std::thread::JoinHandle;
use thiserror::Error;

type Job = Box<dyn FnOnce() + Send + 'static>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PoolError {
    #[error("{0} job(s) panicked during execution")]
    JobsPanicked(usize),
}

struct State {
    queue: VecDeque<Job>,
    active: usize,
    panicked: usize,
    stopping: bool,
}

struct Shared {
    state: Mutex<State>,
    /// Signals workers that a job arrived or shutdown began.
    job_ready: Condvar,
    /// Signals the coordinator that the pool may have gone idle.
    idle: Condvar,
}

pub struct ThreadPool {
    shared: Arc<Shared>,
    workers: Vec<JoinHandle<()>>,
}

impl ThreadPool {
    /// Pool with one worker per available core.
    pub fn new() -> Self {
        let threads = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);
        Self::with_threads(threads)
    }

    pub fn with_threads(num_threads: usize) -> Self {
        let num_threads = num_threads.max(1);
        let shared = Arc::new(Shared {
            state: Mutex::new(State {
                queue: VecDeque::new(),
                active: 0,
                panicked: 0,
                stopping: false,
            }),
            job_ready: Condvar::new(),
            idle: Condvar::new(),
        });

        let workers = (0..num_threads)
            .map(|i| {
                let shared = shared.clone();
                std::thread::Builder::new()
                    .name(format!("lux-worker-{i}"))
                    .spawn(move || worker_loop(&shared))
                    .expect("failed to spawn worker thread")
            })
            .collect();

        Self { shared, workers }
    }

    pub fn thread_count(&self) -> usize {
        self.workers.len()
    }

    /// Enqueue a job and wake one idle worker.
    ///
    /// Submitting after `shutdown` is a programming error.
    pub fn submit<F>(&self, job: F)
    where
        F: FnOnce() + Send + 'static,
    {
        {
            let mut state = self.shared.state.lock().unwrap();
            assert!(!state.stopping, "submit after shutdown");
            state.queue.push_back(Box::new(job));
        }
        self.shared.job_ready.notify_one();
    }

    /// Block until the queue is empty and every worker is idle.
    ///
    /// Reports jobs that panicked since the pool was created.
    pub fn await_all(&self) -> Result<(), PoolError> {
        let mut state = self.shared.state.lock().unwrap();
        while !(state.queue.is_empty() && state.active == 0) {
            state = self.shared.idle.wait(state).unwrap();
        }
        if state.panicked > 0 {
            Err(PoolError::JobsPanicked(state.panicked))
        } else {
            Ok(())
        }
    }

    /// Stop accepting work, let queued jobs finish, join all workers.
    pub fn shutdown(&mut self) {
        {
            let mut state = self.shared.state.lock().unwrap();
            state.stopping = true;
        }
        self.shared.job_ready.notify_all();
        for worker in self.workers.drain(..) {
            let _ = worker.join();
        }
    }
}

impl Default for ThreadPool {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ThreadPool {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn worker_loop(shared: &Shared) {
    loop {
        let job = {
            let mut state = shared.state.lock().unwrap();
            loop {
                if let Some(job) = state.queue.pop_front() {
                    state.active += 1;
                    break job;
                }
                if state.stopping {
                    return;
                }
                state = shared.job_ready.wait(state).unwrap();
            }
        };

        let result = catch_unwind(AssertUnwindSafe(job));

        let mut state = shared.state.lock().unwrap();
        state.active -= 1;
        if result.is_err() {
            state.panicked += 1;
        }
        if state.queue.is_empty() && state.active == 0 {
            shared.idle.notify_all();
        }
    }
}
