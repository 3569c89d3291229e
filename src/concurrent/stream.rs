//! Turning a pull-based [`Seq`] into a concurrently readable stream.
//!
//! [`to_stream`] moves a sequence onto its own worker thread. The worker pulls
//! values and hands each one over through a single-slot channel; the consumer
//! reads them from the returned [`Stream`]. The paired [`Cancel`] handle closes the
//! stream from any thread.
//!
//! # Lifecycle
//!
//! A stream starts [`Running`](StreamState::Running) and closes exactly once, into
//! either [`Exhausted`](StreamState::Exhausted) (the sequence ran out) or
//! [`Cancelled`](StreamState::Cancelled) (a [`Cancel`] handle fired or the
//! [`Stream`] was dropped). Whoever closes first wins; later attempts are no-ops.
//!
//! Closing wakes a worker blocked on a full slot, so cancelling never deadlocks.
//! A worker busy inside the sequence's own `next` finishes that call, notices the
//! closure and exits without handing anything else over.
//!
//! # Examples
//!
//! ```
//! use lazyseq::prelude::*;
//!
//! let mut n = 0;
//! let naturals = from_fn(move || {
//!     n += 1;
//!     just(n)
//! });
//!
//! let (stream, cancel) = to_stream(naturals).unwrap();
//! assert_eq!(stream.recv(), Maybe::Just(1));
//! assert_eq!(stream.recv(), Maybe::Just(2));
//!
//! assert!(cancel.cancel());
//! assert!(!cancel.cancel());
//! assert_eq!(stream.recv(), Maybe::Nothing);
//! ```

use std::{
    fmt, io,
    sync::{
        Arc, Mutex,
        atomic::{AtomicU8, Ordering},
    },
    thread,
    time::Duration,
};

use crossbeam_channel::{Receiver, Sender, bounded, select};
use log::{debug, trace};

use crate::{Maybe, Seq, iter::SeqIter};

const DEFAULT_THREAD_NAME: &str = "lazyseq-stream";

/// Where a stream is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum StreamState {
    /// The worker is still producing values.
    Running = 0,
    /// The sequence ran out; values already handed over can still be read.
    Exhausted = 1,
    /// The stream was cancelled; reads return `Nothing`.
    Cancelled = 2,
}

impl StreamState {
    /// Returns `true` for every state except `Running`.
    pub const fn is_closed(self) -> bool {
        !matches!(self, StreamState::Running)
    }

    fn from_u8(raw: u8) -> Self {
        match raw {
            0 => StreamState::Running,
            1 => StreamState::Exhausted,
            _ => StreamState::Cancelled,
        }
    }
}

/// Errors from starting a stream.
#[derive(Debug, thiserror::Error)]
pub enum StreamError {
    /// The operating system refused to start the worker thread.
    #[error("failed to spawn stream worker `{name}`")]
    Spawn {
        name: String,
        #[source]
        source: io::Error,
    },
}

/// The one-shot close shared by the worker, the [`Stream`] and every [`Cancel`].
///
/// `signal` is a rendezvous channel nobody ever sends on. Dropping its only
/// sender disconnects it, which wakes every `select!` waiting on a receiver.
struct Shutdown {
    state: AtomicU8,
    signal: Mutex<Option<Sender<()>>>,
}

impl Shutdown {
    fn new() -> (Arc<Self>, Receiver<()>) {
        let (signal_tx, signal_rx) = bounded(0);
        let shutdown = Shutdown {
            state: AtomicU8::new(StreamState::Running as u8),
            signal: Mutex::new(Some(signal_tx)),
        };
        (Arc::new(shutdown), signal_rx)
    }

    fn state(&self) -> StreamState {
        StreamState::from_u8(self.state.load(Ordering::Acquire))
    }

    /// Move from `Running` to `reason`. Returns `false` if the stream was already closed.
    fn close(&self, reason: StreamState) -> bool {
        debug_assert!(reason.is_closed());
        let won = self
            .state
            .compare_exchange(
                StreamState::Running as u8,
                reason as u8,
                Ordering::AcqRel,
                Ordering::Acquire,
            )
            .is_ok();
        if won {
            let sender = match self.signal.lock() {
                Ok(mut guard) => guard.take(),
                Err(poisoned) => poisoned.into_inner().take(),
            };
            drop(sender);
        }
        won
    }
}

impl fmt::Debug for Shutdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Shutdown").field("state", &self.state()).finish()
    }
}

/// The reading end of a stream.
///
/// Reads block until the worker hands over a value or the stream closes. Dropping
/// the `Stream` cancels it.
#[derive(Debug)]
pub struct Stream<T> {
    values: Receiver<T>,
    signal: Receiver<()>,
    shutdown: Arc<Shutdown>,
}

impl<T> Stream<T> {
    /// Block until the next value arrives or the stream closes.
    ///
    /// After an [`Exhausted`](StreamState::Exhausted) close, a value still in the
    /// slot is delivered before `Nothing`. After cancellation this returns
    /// `Nothing` straight away.
    pub fn recv(&self) -> Maybe<T> {
        select! {
            recv(self.values) -> value => self.deliver(value.ok()),
            recv(self.signal) -> _ => self.drain(),
        }
    }

    /// Like [`recv`](Stream::recv), but gives up after `timeout` and returns `Nothing`.
    ///
    /// Use [`state`](Stream::state) to tell a timeout from a closed stream.
    pub fn recv_timeout(&self, timeout: Duration) -> Maybe<T> {
        select! {
            recv(self.values) -> value => self.deliver(value.ok()),
            recv(self.signal) -> _ => self.drain(),
            default(timeout) => Maybe::Nothing,
        }
    }

    /// Return a value if one is already waiting in the slot.
    pub fn try_recv(&self) -> Maybe<T> {
        self.deliver(self.values.try_recv().ok())
    }

    /// Current lifecycle state.
    pub fn state(&self) -> StreamState {
        self.shutdown.state()
    }

    /// Returns `true` once the stream has been exhausted or cancelled.
    pub fn is_closed(&self) -> bool {
        self.state().is_closed()
    }

    /// A new cancellation handle for this stream.
    pub fn cancel_handle(&self) -> Cancel {
        Cancel {
            shutdown: Arc::clone(&self.shutdown),
        }
    }

    fn deliver(&self, value: Option<T>) -> Maybe<T> {
        match self.shutdown.state() {
            StreamState::Cancelled => Maybe::Nothing,
            _ => value.into(),
        }
    }

    fn drain(&self) -> Maybe<T> {
        match self.shutdown.state() {
            StreamState::Cancelled => Maybe::Nothing,
            // exhausted: the worker drops its sender right after closing
            _ => self.values.recv().ok().into(),
        }
    }
}

impl<T> Seq for Stream<T> {
    type Item = T;

    fn next(&mut self) -> Maybe<Self::Item> {
        self.recv()
    }
}

impl<T> IntoIterator for Stream<T> {
    type Item = T;
    type IntoIter = SeqIter<Stream<T>>;

    fn into_iter(self) -> Self::IntoIter {
        SeqIter::new(self)
    }
}

impl<T> Drop for Stream<T> {
    fn drop(&mut self) {
        if self.shutdown.close(StreamState::Cancelled) {
            debug!("stream dropped while running, cancelling worker");
        }
    }
}

/// Closes a stream from any thread.
///
/// Cheap to clone; every clone controls the same stream. Cancelling is idempotent
/// and safe to race against other cancels and against the worker running out.
#[derive(Debug, Clone)]
pub struct Cancel {
    shutdown: Arc<Shutdown>,
}

impl Cancel {
    /// Close the stream.
    ///
    /// Returns `true` only for the call that actually closed it. Returns `false` if
    /// the stream was already cancelled or exhausted.
    pub fn cancel(&self) -> bool {
        let closed = self.shutdown.close(StreamState::Cancelled);
        if closed {
            debug!("stream cancelled");
        }
        closed
    }

    /// Returns `true` once the stream has been exhausted or cancelled.
    pub fn is_closed(&self) -> bool {
        self.shutdown.state().is_closed()
    }

    /// Current lifecycle state.
    pub fn state(&self) -> StreamState {
        self.shutdown.state()
    }
}

/// Configures the worker thread behind a stream.
///
/// ```
/// use lazyseq::prelude::*;
///
/// let (stream, _cancel) = StreamBuilder::new()
///     .name("numbers")
///     .spawn(from_vec(vec![1, 2, 3]))
///     .unwrap();
/// assert_eq!(stream.collect_vec(), vec![1, 2, 3]);
/// ```
#[derive(Debug, Clone)]
pub struct StreamBuilder {
    name: String,
    stack_size: Option<usize>,
}

impl Default for StreamBuilder {
    fn default() -> Self {
        Self {
            name: DEFAULT_THREAD_NAME.to_owned(),
            stack_size: None,
        }
    }
}

impl StreamBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Name of the worker thread.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Stack size of the worker thread, in bytes.
    pub fn stack_size(mut self, size: usize) -> Self {
        self.stack_size = Some(size);
        self
    }

    /// Move `seq` onto a new worker thread and return its reading end and a
    /// cancellation handle.
    pub fn spawn<S>(self, seq: S) -> Result<(Stream<S::Item>, Cancel), StreamError>
    where
        S: Seq + Send + 'static,
        S::Item: Send + 'static,
    {
        let (values_tx, values_rx) = bounded(1);
        let (shutdown, signal_rx) = Shutdown::new();

        let mut builder = thread::Builder::new().name(self.name.clone());
        if let Some(size) = self.stack_size {
            builder = builder.stack_size(size);
        }

        let worker = Worker {
            seq,
            values: values_tx,
            signal: signal_rx.clone(),
            shutdown: Arc::clone(&shutdown),
        };
        builder
            .spawn(move || worker.run())
            .map_err(|source| StreamError::Spawn {
                name: self.name.clone(),
                source,
            })?;
        debug!("started stream worker `{}`", self.name);

        let cancel = Cancel {
            shutdown: Arc::clone(&shutdown),
        };
        let stream = Stream {
            values: values_rx,
            signal: signal_rx,
            shutdown,
        };
        Ok((stream, cancel))
    }
}

/// Run `seq` on a background thread with the default configuration.
///
/// Shorthand for `StreamBuilder::new().spawn(seq)`.
pub fn to_stream<S>(seq: S) -> Result<(Stream<S::Item>, Cancel), StreamError>
where
    S: Seq + Send + 'static,
    S::Item: Send + 'static,
{
    StreamBuilder::new().spawn(seq)
}

struct Worker<S: Seq> {
    seq: S,
    values: Sender<S::Item>,
    signal: Receiver<()>,
    shutdown: Arc<Shutdown>,
}

impl<S: Seq> Worker<S> {
    fn run(mut self) {
        let mut handed_off = 0_usize;
        while !self.shutdown.state().is_closed() {
            let Maybe::Just(value) = self.seq.next() else {
                self.shutdown.close(StreamState::Exhausted);
                break;
            };
            if self.shutdown.state().is_closed() {
                break;
            }
            select! {
                send(self.values, value) -> sent => match sent {
                    Ok(()) => {
                        handed_off += 1;
                        trace!("handed off value {handed_off}");
                    }
                    // the consumer hung up
                    Err(_) => {
                        self.shutdown.close(StreamState::Cancelled);
                        break;
                    }
                },
                recv(self.signal) -> _ => break,
            }
        }
        debug!(
            "stream worker stopped after {handed_off} values ({:?})",
            self.shutdown.state()
        );
    }
}

// Every normal exit closes before returning, so this only wins when `seq.next()`
// panicked and the worker is unwinding.
impl<S: Seq> Drop for Worker<S> {
    fn drop(&mut self) {
        if self.shutdown.close(StreamState::Cancelled) {
            debug!("stream worker unwound while running, closing stream");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::{from_fn, from_vec};
    use crate::maybe::{just, nothing};
    use std::sync::atomic::AtomicUsize;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn naturals() -> impl Seq<Item = u64> + Send + 'static {
        let mut n = 0;
        from_fn(move || {
            n += 1;
            just(n)
        })
    }

    #[test]
    fn test_exhaustion_delivers_everything_then_closes() {
        init_logger();
        let (stream, cancel) = to_stream(from_vec(vec![1, 2, 3])).unwrap();

        assert_eq!(stream.recv(), just(1));
        assert_eq!(stream.recv(), just(2));
        assert_eq!(stream.recv(), just(3));
        assert_eq!(stream.recv(), nothing());
        assert_eq!(stream.recv(), nothing());
        assert_eq!(stream.state(), StreamState::Exhausted);
        assert!(!cancel.cancel());
        assert_eq!(cancel.state(), StreamState::Exhausted);
    }

    #[test]
    fn test_cancel_unblocks_full_slot() {
        init_logger();
        let (stream, cancel) = to_stream(naturals()).unwrap();
        assert_eq!(stream.recv(), just(1));

        // the worker is now parked on a full slot
        assert!(cancel.cancel());
        assert_eq!(stream.recv(), nothing());
        assert_eq!(stream.try_recv(), nothing());
        assert_eq!(stream.state(), StreamState::Cancelled);
    }

    #[test]
    fn test_cancel_is_idempotent() {
        let (_stream, cancel) = to_stream(naturals()).unwrap();
        let other = cancel.clone();

        assert!(cancel.cancel());
        assert!(!cancel.cancel());
        assert!(!other.cancel());
        assert!(other.is_closed());
    }

    #[test]
    fn test_recv_timeout_on_slow_source() {
        let (stream, cancel) = to_stream(from_fn(|| {
            thread::sleep(Duration::from_millis(200));
            just(())
        }))
        .unwrap();

        assert_eq!(stream.recv_timeout(Duration::from_millis(1)), nothing());
        assert_eq!(stream.state(), StreamState::Running);
        cancel.cancel();
    }

    #[test]
    fn test_dropping_stream_stops_worker() {
        struct Tracked {
            inner: Box<dyn Seq<Item = u64> + Send>,
            dropped: Arc<AtomicUsize>,
        }
        impl Seq for Tracked {
            type Item = u64;
            fn next(&mut self) -> Maybe<u64> {
                self.inner.next()
            }
        }
        impl Drop for Tracked {
            fn drop(&mut self) {
                self.dropped.fetch_add(1, Ordering::SeqCst);
            }
        }

        init_logger();
        let dropped = Arc::new(AtomicUsize::new(0));
        let seq = Tracked {
            inner: Box::new(naturals()),
            dropped: Arc::clone(&dropped),
        };
        let (stream, cancel) = StreamBuilder::new().name("tracked").spawn(seq).unwrap();
        assert_eq!(stream.recv(), just(1));
        drop(stream);

        assert_eq!(cancel.state(), StreamState::Cancelled);
        for _ in 0..200 {
            if dropped.load(Ordering::SeqCst) == 1 {
                return;
            }
            thread::sleep(Duration::from_millis(10));
        }
        panic!("worker did not release its sequence");
    }

    #[test]
    fn test_panicking_sequence_closes_stream() {
        init_logger();
        let (gate_tx, gate_rx) = bounded::<()>(0);
        let mut n = 0;
        let (stream, cancel) = to_stream(from_fn(move || {
            n += 1;
            if n > 1 {
                let _ = gate_rx.recv();
                panic!("source failed");
            }
            just(n)
        }))
        .unwrap();

        assert_eq!(stream.recv(), just(1));
        gate_tx.send(()).unwrap();
        assert_eq!(stream.recv(), nothing());
        assert_eq!(stream.state(), StreamState::Cancelled);
        assert!(stream.is_closed());
        assert!(!cancel.cancel());
    }

    #[test]
    fn test_stream_as_seq_and_iterator() {
        let (stream, _cancel) = to_stream(from_vec(vec!["a", "b"])).unwrap();
        let collected: Vec<_> = stream.into_iter().collect();
        assert_eq!(collected, vec!["a", "b"]);
    }
}
