//! One-shot broadcast cancellation.
//!
//! The signal is a zero-capacity channel that is never sent on. Firing drops
//! the only sender, which makes every receiver ready with a disconnect at once,
//! so workers can race it against queue operations inside `select!`.

use crossbeam::channel::{self, Receiver, Sender, TryRecvError};
use parking_lot::Mutex;

#[derive(Debug)]
pub struct ShutdownSignal {
    trigger: Mutex<Option<Sender<()>>>,
    listener: Receiver<()>,
}

impl Default for ShutdownSignal {
    fn default() -> Self {
        Self::new()
    }
}

impl ShutdownSignal {
    pub fn new() -> Self {
        let (trigger, listener) = channel::bounded(0);
        Self {
            trigger: Mutex::new(Some(trigger)),
            listener,
        }
    }

    /// A receiver that becomes ready once the signal fires
    pub fn listener(&self) -> Receiver<()> {
        self.listener.clone()
    }

    /// Fire the signal. Returns `false` if it had already fired.
    pub fn fire(&self) -> bool {
        self.trigger.lock().take().is_some()
    }

    pub fn is_fired(&self) -> bool {
        matches!(self.listener.try_recv(), Err(TryRecvError::Disconnected))
    }
}
