//! Where REPL lines come from.
//!
//! Tests feed any `BufRead`. The terminal uses [`Console`], which reads stdin on a
//! worker thread and shares one channel with a signal listener, so Ctrl+C (and SIGTERM
//! on unix) arrives at the loop as an ordinary [`Line::Interrupted`] and the session
//! closes through its normal save path.

use log::{debug, warn};
use std::io::{self, BufRead};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

/// One read from the input source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// A line without its terminator
    Text(String),
    /// End of input
    Closed,
    /// The user asked the process to stop
    Interrupted,
}

pub trait LineSource {
    fn next_line(&mut self) -> io::Result<Line>;
}

impl<R: BufRead> LineSource for R {
    fn next_line(&mut self) -> io::Result<Line> {
        let mut line = String::new();
        if self.read_line(&mut line)? == 0 {
            return Ok(Line::Closed);
        }
        Ok(Line::Text(line.trim_end_matches(['\n', '\r']).to_string()))
    }
}

/// Stdin plus interrupt signals, merged into one stream of [`Line`]s.
pub(super) struct Console {
    events: Receiver<io::Result<Line>>,
}

impl Console {
    pub fn start() -> Self {
        let (tx, events) = mpsc::channel();
        if let Err(e) = listen_for_interrupt(tx.clone()) {
            warn!("Could not install the interrupt handler: {}", e);
        }
        thread::spawn(move || read_stdin(tx));
        Self { events }
    }
}

impl LineSource for Console {
    fn next_line(&mut self) -> io::Result<Line> {
        // Both senders gone means stdin finished and no signal can arrive.
        self.events.recv().unwrap_or(Ok(Line::Closed))
    }
}

fn read_stdin(tx: Sender<io::Result<Line>>) {
    let mut stdin = io::stdin().lock();
    loop {
        let read = stdin.next_line();
        let done = !matches!(read, Ok(Line::Text(_)));
        if tx.send(read).is_err() || done {
            return;
        }
    }
}

/// Registers the handlers before returning, so a signal sent once the banner is up
/// cannot fall through to the default action and kill the process unsaved.
#[cfg(unix)]
fn listen_for_interrupt(tx: Sender<io::Result<Line>>) -> io::Result<()> {
    use tokio::signal::unix::{signal, SignalKind};

    let runtime = signal_runtime()?;
    let (mut interrupt, mut terminate) = {
        let _guard = runtime.enter();
        (
            signal(SignalKind::interrupt())?,
            signal(SignalKind::terminate())?,
        )
    };

    thread::spawn(move || {
        runtime.block_on(async {
            tokio::select! {
                _ = interrupt.recv() => debug!("Received SIGINT"),
                _ = terminate.recv() => debug!("Received SIGTERM"),
            }
        });
        let _ = tx.send(Ok(Line::Interrupted));
    });
    Ok(())
}

#[cfg(not(unix))]
fn listen_for_interrupt(tx: Sender<io::Result<Line>>) -> io::Result<()> {
    let runtime = signal_runtime()?;
    thread::spawn(move || match runtime.block_on(tokio::signal::ctrl_c()) {
        Ok(()) => {
            debug!("Received Ctrl+C");
            let _ = tx.send(Ok(Line::Interrupted));
        }
        Err(e) => warn!("Ctrl+C listener failed: {}", e),
    });
    Ok(())
}

fn signal_runtime() -> io::Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffered_reader_yields_lines_then_closes() {
        let mut input = "first\r\nsecond\n\nlast".as_bytes();
        assert_eq!(input.next_line().unwrap(), Line::Text("first".into()));
        assert_eq!(input.next_line().unwrap(), Line::Text("second".into()));
        assert_eq!(input.next_line().unwrap(), Line::Text(String::new()));
        assert_eq!(input.next_line().unwrap(), Line::Text("last".into()));
        assert_eq!(input.next_line().unwrap(), Line::Closed);
    }

    #[test]
    fn console_forwards_events_in_order() {
        let (tx, events) = mpsc::channel();
        tx.send(Ok(Line::Text("hello".into()))).unwrap();
        tx.send(Ok(Line::Interrupted)).unwrap();
        drop(tx);

        let mut console = Console { events };
        assert_eq!(console.next_line().unwrap(), Line::Text("hello".into()));
        assert_eq!(console.next_line().unwrap(), Line::Interrupted);
        assert_eq!(console.next_line().unwrap(), Line::Closed);
    }
}
