//! Background chunk generation on a fixed pool of worker threads.
//!
//! Workers share one immutable [`ChunkGenerator`] and pull origins from a
//! bounded queue. A discarded request is skipped if it has not started yet;
//! one already running finishes and its result is dropped.

use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Instant;

use crossbeam_channel::{Receiver, Sender, bounded};
use dashmap::DashMap;
use strata_voxel::ChunkGrid;

use crate::generator::{ChunkGenerator, ChunkOrigin};

/// A finished chunk ready to be handed to the world.
#[derive(Debug)]
pub struct GeneratedChunk {
    /// The origin that was submitted.
    pub origin: ChunkOrigin,
    /// The generated cells.
    pub grid: ChunkGrid,
    /// Wall time spent generating, in microseconds.
    pub generation_time_us: u64,
}

struct Job {
    origin: ChunkOrigin,
    discarded: Arc<AtomicBool>,
}

/// A finished chunk with the discard flag of the request that produced it.
struct Finished {
    chunk: GeneratedChunk,
    discarded: Arc<AtomicBool>,
}

/// Generates chunks on background threads.
pub struct AsyncChunkGenerator {
    job_sender: Sender<Job>,
    result_receiver: Receiver<Finished>,
    /// Discard flag of every submitted origin whose result is still wanted.
    /// The flag identifies the request: a result is delivered only while its
    /// own flag is the one mapped here.
    pending: Arc<DashMap<ChunkOrigin, Arc<AtomicBool>>>,
    in_flight: Arc<AtomicU64>,
}

impl AsyncChunkGenerator {
    /// Spawn `thread_count` workers over `generator`.
    ///
    /// At most `max_queued` requests wait for a worker; further submissions
    /// are handed back. Finished chunks buffer up to `result_capacity` before
    /// workers block on delivery.
    ///
    /// # Errors
    ///
    /// Returns the OS error if a worker thread cannot be spawned.
    pub fn new(
        generator: Arc<ChunkGenerator>,
        thread_count: usize,
        max_queued: usize,
        result_capacity: usize,
    ) -> io::Result<Self> {
        let (job_sender, job_receiver) = bounded::<Job>(max_queued);
        let (result_sender, result_receiver) = bounded::<Finished>(result_capacity);
        let in_flight = Arc::new(AtomicU64::new(0));

        for _ in 0..thread_count {
            let receiver = job_receiver.clone();
            let sender = result_sender.clone();
            let generator = Arc::clone(&generator);
            let in_flight = Arc::clone(&in_flight);

            std::thread::Builder::new()
                .name("chunk-gen-worker".into())
                .spawn(move || {
                    while let Ok(job) = receiver.recv() {
                        if job.discarded.load(Ordering::Relaxed) {
                            tracing::trace!("skipping discarded chunk at {}", job.origin);
                            in_flight.fetch_sub(1, Ordering::Relaxed);
                            continue;
                        }

                        let start = Instant::now();
                        let grid = generator.generate(job.origin);
                        let elapsed = start.elapsed().as_micros() as u64;

                        if !job.discarded.load(Ordering::Relaxed) {
                            let _ = sender.send(Finished {
                                chunk: GeneratedChunk {
                                    origin: job.origin,
                                    grid,
                                    generation_time_us: elapsed,
                                },
                                discarded: job.discarded,
                            });
                        }
                        in_flight.fetch_sub(1, Ordering::Relaxed);
                    }
                })?;
        }

        tracing::debug!(thread_count, max_queued, "started chunk generation workers");
        Ok(Self {
            job_sender,
            result_receiver,
            pending: Arc::new(DashMap::new()),
            in_flight,
        })
    }

    /// Pool sized to the machine, leaving two cores for the caller.
    ///
    /// # Errors
    ///
    /// Returns the OS error if a worker thread cannot be spawned.
    pub fn with_defaults(generator: Arc<ChunkGenerator>) -> io::Result<Self> {
        let cpus = num_cpus::get().max(2);
        let threads = (cpus - 2).max(1);
        Self::new(generator, threads, 64, 128)
    }

    /// Queue `origin` for generation.
    ///
    /// Returns `Err(origin)` if the queue is full or the origin is already
    /// pending.
    pub fn submit(&self, origin: ChunkOrigin) -> Result<(), ChunkOrigin> {
        if self.pending.contains_key(&origin) {
            return Err(origin);
        }
        let discarded = Arc::new(AtomicBool::new(false));
        self.pending.insert(origin, Arc::clone(&discarded));
        self.in_flight.fetch_add(1, Ordering::Relaxed);

        self.job_sender
            .try_send(Job { origin, discarded })
            .map_err(|e| {
                self.in_flight.fetch_sub(1, Ordering::Relaxed);
                let origin = e.into_inner().origin;
                self.pending.remove(&origin);
                origin
            })
    }

    /// Drop the result of a pending request.
    ///
    /// A request that has not started is skipped. One that is running or
    /// already finished is never delivered. No-op if nothing is pending for
    /// `origin`.
    pub fn discard(&self, origin: &ChunkOrigin) {
        if let Some((_, discarded)) = self.pending.remove(origin) {
            discarded.store(true, Ordering::Relaxed);
        }
    }

    /// Collect every chunk finished since the last call without blocking.
    ///
    /// Results of discarded requests are dropped here, including those of an
    /// earlier request for an origin that has since been resubmitted.
    pub fn drain_results(&self) -> Vec<GeneratedChunk> {
        let mut results = Vec::new();
        while let Ok(Finished { chunk, discarded }) = self.result_receiver.try_recv() {
            let live = self
                .pending
                .remove_if(&chunk.origin, |_, current| Arc::ptr_eq(current, &discarded))
                .is_some();
            if live {
                results.push(chunk);
            } else {
                tracing::trace!("dropping discarded chunk at {}", chunk.origin);
            }
        }
        results
    }

    /// Requests queued or running.
    pub fn in_flight_count(&self) -> u64 {
        self.in_flight.load(Ordering::Relaxed)
    }

    /// Whether a result for `origin` is still expected.
    pub fn is_pending(&self, origin: &ChunkOrigin) -> bool {
        self.pending.contains_key(origin)
    }
}
