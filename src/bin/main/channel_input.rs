use std::{
    convert::Infallible,
    sync::mpsc::{Receiver, Sender, TryRecvError, channel},
};

use folio_core::input::{InputEvent, InputProvider};

/// Input provider fed from the driver loop through a channel.
pub(super) struct ChannelInput {
    events: Receiver<InputEvent>,
}

impl ChannelInput {
    pub(super) fn new() -> (Sender<InputEvent>, Self) {
        let (tx, rx) = channel();
        (tx, Self { events: rx })
    }
}

impl InputProvider for ChannelInput {
    type Error = Infallible;

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error> {
        match self.events.try_recv() {
            Ok(event) => Ok(Some(event)),
            Err(TryRecvError::Empty | TryRecvError::Disconnected) => Ok(None),
        }
    }
}
