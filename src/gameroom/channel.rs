use super::*;
use tokio::sync::mpsc;
use tokio::sync::oneshot;
use tokio_util::sync::CancellationToken;

/// A value in flight, paired with the acknowledgement the receiver fires
/// once it has taken the value.
type Parcel<T> = (T, oneshot::Sender<()>);

/// Create a one-directional rendezvous link.
/// A send completes only after the matching receive has taken the value.
pub fn link<T>() -> (Outbox<T>, Inbox<T>) {
    let (tx, rx) = mpsc::channel(1);
    (Outbox { tx }, Inbox { rx })
}

/// Sending end of a rendezvous link.
#[derive(Debug)]
pub struct Outbox<T> {
    tx: mpsc::Sender<Parcel<T>>,
}

/// Receiving end of a rendezvous link.
#[derive(Debug)]
pub struct Inbox<T> {
    rx: mpsc::Receiver<Parcel<T>>,
}

impl<T> Outbox<T> {
    /// Hand a value over, waiting until the receiver has taken it.
    pub async fn send(&self, value: T) -> Result<(), Hangup> {
        let (ack, taken) = oneshot::channel();
        self.tx
            .send((value, ack))
            .await
            .map_err(|_| Hangup::Closed)?;
        taken.await.map_err(|_| Hangup::Closed)
    }
    /// Like [`Outbox::send`], but gives up when the token is cancelled.
    /// A hand-off that has already completed wins over cancellation, and a
    /// cancelled value is never seen by the receiver.
    pub async fn give(&self, value: T, token: &CancellationToken) -> Result<(), Hangup> {
        let (ack, mut taken) = oneshot::channel();
        tokio::select! {
            biased;
            res = self.tx.send((value, ack)) => res.map_err(|_| Hangup::Closed)?,
            _ = token.cancelled() => return Err(Hangup::Cancelled),
        }
        tokio::select! {
            biased;
            res = &mut taken => res.map_err(|_| Hangup::Closed),
            _ = token.cancelled() => {
                // closing first settles a race with an ack already in flight
                taken.close();
                taken.try_recv().map_err(|_| Hangup::Cancelled)
            }
        }
    }
}

impl<T> Inbox<T> {
    /// Wait for a sender and take its value.
    /// Values whose sender gave up before the hand-off are discarded.
    pub async fn recv(&mut self) -> Result<T, Hangup> {
        loop {
            let (value, ack) = self.rx.recv().await.ok_or(Hangup::Closed)?;
            match ack.send(()) {
                Ok(()) => return Ok(value),
                Err(()) => log::trace!("discarding a withdrawn hand-off"),
            }
        }
    }
    /// Like [`Inbox::recv`], but gives up when the token is cancelled.
    pub async fn take(&mut self, token: &CancellationToken) -> Result<T, Hangup> {
        tokio::select! {
            biased;
            res = self.recv() => res,
            _ = token.cancelled() => Err(Hangup::Cancelled),
        }
    }
}
