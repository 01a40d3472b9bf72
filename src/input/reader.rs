//! Input Reader: Dedicated thread for pulling raw bytes off the terminal.
//!
//! The reader does no decoding. It forwards byte chunks, in arrival order,
//! to the session loop, which owns the decoder, the canvas and the pen.
//! End of input (or a read failure) drops the sender, which the session
//! observes as a disconnected channel. The thread ends on its own once the
//! receiver is gone and the next read returns.

use crossbeam_channel::Sender;
use std::io::{self, Read};
use std::thread::{self, JoinHandle};

/// Size of a single read from the terminal.
const CHUNK_SIZE: usize = 1024;

/// Reader actor that forwards terminal bytes.
pub struct InputReader {
    /// Handle to the reader thread.
    handle: JoinHandle<()>,
}

impl InputReader {
    /// Spawn a reader over the process's stdin.
    pub fn spawn_stdin(sender: Sender<Vec<u8>>) -> io::Result<Self> {
        Self::spawn(io::stdin(), sender)
    }

    /// Spawn the reader thread over any byte source.
    ///
    /// # Arguments
    ///
    /// * `source` - Where bytes come from (stdin in production).
    /// * `sender` - Channel to send byte chunks to the session loop.
    pub fn spawn<R>(source: R, sender: Sender<Vec<u8>>) -> io::Result<Self>
    where
        R: Read + Send + 'static,
    {
        let handle = thread::Builder::new()
            .name("sketchpad-input".to_string())
            .spawn(move || Self::run_loop(source, &sender))?;

        Ok(Self { handle })
    }

    /// Wait for the reader thread to finish.
    ///
    /// Blocks until the source reaches end of input, fails, or the
    /// receiver has been dropped.
    pub fn join(self) {
        let _ = self.handle.join();
    }

    /// Main read loop.
    fn run_loop<R: Read>(mut source: R, sender: &Sender<Vec<u8>>) {
        let mut chunk = [0u8; CHUNK_SIZE];

        loop {
            match source.read(&mut chunk) {
                Ok(0) => {
                    tracing::debug!("input reached end of stream");
                    break;
                }
                Ok(n) => {
                    if sender.send(chunk[..n].to_vec()).is_err() {
                        // Receiver dropped, exit
                        break;
                    }
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => {
                    tracing::error!(error = %e, "terminal read failed");
                    break;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::unbounded;
    use std::io::Cursor;
    use std::time::Duration;

    #[test]
    fn test_reader_forwards_bytes_then_disconnects() {
        let (tx, rx) = unbounded();
        let reader = InputReader::spawn(Cursor::new(b"\x1b[<0;1;1Mq".to_vec()), tx).unwrap();

        let mut received = Vec::new();
        while let Ok(chunk) = rx.recv_timeout(Duration::from_secs(2)) {
            received.extend(chunk);
        }
        assert_eq!(received, b"\x1b[<0;1;1Mq");

        reader.join();
    }

    #[test]
    fn test_reader_large_input_is_chunked_in_order() {
        let data: Vec<u8> = (0..5000u32).map(|i| (i % 251) as u8).collect();
        let (tx, rx) = unbounded();
        let reader = InputReader::spawn(Cursor::new(data.clone()), tx).unwrap();
        reader.join();

        let received: Vec<u8> = rx.try_iter().flatten().collect();
        assert_eq!(received, data);
    }

    #[test]
    fn test_reader_exits_when_receiver_dropped() {
        let (tx, rx) = unbounded();
        drop(rx);
        let reader = InputReader::spawn(Cursor::new(vec![1, 2, 3]), tx).unwrap();
        reader.join();
    }

    struct FailingSource;

    impl Read for FailingSource {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "gone"))
        }
    }

    #[test]
    fn test_reader_failure_disconnects() {
        let (tx, rx) = unbounded();
        let reader = InputReader::spawn(FailingSource, tx).unwrap();
        assert!(rx.recv_timeout(Duration::from_secs(2)).is_err());
        reader.join();
    }
}
