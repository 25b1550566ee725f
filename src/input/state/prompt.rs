//! External collaborators called synchronously from pointer handlers: the text prompt and
//! color-pick observers.

use super::CanvasState;
use crate::draw::Color;

/// Modal prompt asked for the string to place when the text pen is used.
///
/// `None` means the prompt was cancelled; the click that triggered it then draws nothing.
pub trait TextPrompt {
    fn prompt_text(&mut self) -> Option<String>;
}

impl<F> TextPrompt for F
where
    F: FnMut() -> Option<String>,
{
    fn prompt_text(&mut self) -> Option<String> {
        self()
    }
}

/// Handle returned by [`CanvasState::subscribe_pick`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PickSubscription(u64);

type PickCallback = Box<dyn FnMut(Color)>;

/// Registered color-pick observers.
#[derive(Default)]
pub(crate) struct PickSubscribers {
    next_id: u64,
    callbacks: Vec<(PickSubscription, PickCallback)>,
}

impl PickSubscribers {
    fn add(&mut self, callback: PickCallback) -> PickSubscription {
        let id = PickSubscription(self.next_id);
        self.next_id += 1;
        self.callbacks.push((id, callback));
        id
    }

    fn remove(&mut self, id: PickSubscription) -> bool {
        let before = self.callbacks.len();
        self.callbacks.retain(|(sub, _)| *sub != id);
        self.callbacks.len() != before
    }

    pub(crate) fn notify(&mut self, color: Color) {
        for (_, callback) in &mut self.callbacks {
            callback(color);
        }
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.callbacks.len()
    }
}

impl CanvasState {
    /// Installs the prompt used by the text pen.
    ///
    /// Without a prompt, text clicks are treated as cancelled.
    pub fn set_text_prompt(&mut self, prompt: impl TextPrompt + 'static) {
        self.text_prompt = Some(Box::new(prompt));
    }

    /// Registers a callback run with every color picked in pick mode.
    ///
    /// Registering the same closure logic twice notifies twice; no deduplication is done.
    pub fn subscribe_pick(&mut self, callback: impl FnMut(Color) + 'static) -> PickSubscription {
        self.pick_subscribers.add(Box::new(callback))
    }

    /// Removes a pick callback. Returns false if it was not registered.
    pub fn unsubscribe_pick(&mut self, subscription: PickSubscription) -> bool {
        self.pick_subscribers.remove(subscription)
    }

    /// Asks the installed prompt for text. Empty answers count as cancellation.
    pub(crate) fn request_text(&mut self) -> Option<String> {
        let prompt = self.text_prompt.as_mut()?;
        prompt.prompt_text().filter(|text| !text.is_empty())
    }
}
