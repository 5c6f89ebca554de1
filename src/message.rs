#[cfg(feature = "rtrb")]
use rtrb::Consumer;

/// Parameter updates sent from the UI thread to the audio callback.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ToneMessage {
    SetFrequency(f32),
    SetVoltage(f32),
}

pub trait MessageReceiver {
    fn pop(&mut self) -> Option<ToneMessage>;
}

#[cfg(feature = "rtrb")]
impl MessageReceiver for Consumer<ToneMessage> {
    fn pop(&mut self) -> Option<ToneMessage> {
        Consumer::pop(self).ok()
    }
}
