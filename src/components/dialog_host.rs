//! Dialog Host Component
//!
//! Renders the alert or confirmation currently requested through [`SignalDialogs`].

use std::collections::VecDeque;

use async_trait::async_trait;
use futures::channel::oneshot;
use leptos::prelude::*;

use crate::dialog::{Alert, AlertKind, ConfirmPrompt, Dialogs};

#[derive(Clone, Debug)]
enum ActiveDialog {
    Alert(Alert),
    Confirm(ConfirmPrompt),
}

/// `Dialogs` backed by signals; one dialog is visible at a time.
///
/// Alerts raised while another dialog is showing wait in a queue, so a pending
/// confirmation is only ever answered by the user.
#[derive(Clone, Copy)]
pub struct SignalDialogs {
    active: RwSignal<Option<ActiveDialog>>,
    /// Resolves the pending `confirm` call
    pending: RwSignal<Option<oneshot::Sender<bool>>>,
    queued: RwSignal<VecDeque<Alert>>,
}

impl SignalDialogs {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(None),
            pending: RwSignal::new(None),
            queued: RwSignal::new(VecDeque::new()),
        }
    }

    /// Close the visible dialog, answering a pending confirmation with `confirmed`,
    /// and show the next queued alert.
    fn answer(&self, confirmed: bool) {
        if let Some(sender) = self.pending.try_update(Option::take).flatten() {
            let _ = sender.send(confirmed);
        }
        let next = self.queued.try_update(|queued| queued.pop_front()).flatten();
        self.active.set(next.map(ActiveDialog::Alert));
    }
}

#[async_trait(?Send)]
impl Dialogs for SignalDialogs {
    fn alert(&self, alert: Alert) {
        if self.active.with_untracked(Option::is_some) {
            self.queued.update(|queued| queued.push_back(alert));
        } else {
            self.active.set(Some(ActiveDialog::Alert(alert)));
        }
    }

    async fn confirm(&self, prompt: ConfirmPrompt) -> bool {
        // A visible alert goes back to the front of the queue
        if let Some(ActiveDialog::Alert(shown)) = self.active.get_untracked() {
            self.queued.update(|queued| queued.push_front(shown));
        }
        let (sender, receiver) = oneshot::channel();
        // Replacing an older sender cancels that confirmation
        self.pending.set(Some(sender));
        self.active.set(Some(ActiveDialog::Confirm(prompt)));
        receiver.await.unwrap_or(false)
    }
}

/// Modal overlay for alerts and confirmations
#[component]
pub fn DialogHost(dialogs: SignalDialogs) -> impl IntoView {
    view! {
        {move || dialogs.active.get().map(move |dialog| match dialog {
            ActiveDialog::Alert(alert) => view! {
                <div class="dialog-backdrop">
                    <div class=format!("dialog {}", alert.kind.css_class()) role="alertdialog">
                        <h4 class="dialog-title">{alert.title}</h4>
                        <p class="dialog-text">{alert.text}</p>
                        <div class="dialog-actions">
                            <button class="btn btn-primary" on:click=move |_| dialogs.answer(false)>
                                "OK"
                            </button>
                        </div>
                    </div>
                </div>
            }.into_any(),
            ActiveDialog::Confirm(prompt) => view! {
                <div class="dialog-backdrop">
                    <div class=format!("dialog {}", AlertKind::Warning.css_class()) role="alertdialog">
                        <h4 class="dialog-title">{prompt.title}</h4>
                        <p class="dialog-text">{prompt.text}</p>
                        <div class="dialog-actions">
                            <button class="btn btn-confirm" on:click=move |_| dialogs.answer(true)>
                                {prompt.confirm_label}
                            </button>
                            <button class="btn btn-cancel" on:click=move |_| dialogs.answer(false)>
                                {prompt.cancel_label}
                            </button>
                        </div>
                    </div>
                </div>
            }.into_any(),
        })}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visible_title(dialogs: &SignalDialogs) -> Option<String> {
        dialogs.active.get_untracked().map(|dialog| match dialog {
            ActiveDialog::Alert(alert) => alert.title,
            ActiveDialog::Confirm(prompt) => prompt.title,
        })
    }

    #[tokio::test]
    async fn test_confirm_resolves_with_answer() {
        let dialogs = SignalDialogs::new();
        let mut confirmed = dialogs.confirm(ConfirmPrompt::delete_food());
        assert!(futures::poll!(&mut confirmed).is_pending());
        assert_eq!(visible_title(&dialogs), Some(ConfirmPrompt::delete_food().title));

        dialogs.answer(true);
        assert!(confirmed.await);
        assert_eq!(visible_title(&dialogs), None);

        let mut cancelled = dialogs.confirm(ConfirmPrompt::delete_food());
        assert!(futures::poll!(&mut cancelled).is_pending());
        dialogs.answer(false);
        assert!(!cancelled.await);
    }

    #[tokio::test]
    async fn test_alert_waits_behind_pending_confirm() {
        let dialogs = SignalDialogs::new();
        let mut confirmed = dialogs.confirm(ConfirmPrompt::delete_food());
        assert!(futures::poll!(&mut confirmed).is_pending());

        dialogs.alert(Alert::success("Agregado", "La comida fue agregada"));
        assert!(futures::poll!(&mut confirmed).is_pending());
        assert_eq!(visible_title(&dialogs), Some(ConfirmPrompt::delete_food().title));

        dialogs.answer(true);
        assert!(confirmed.await);
        assert_eq!(visible_title(&dialogs), Some("Agregado".to_string()));

        dialogs.answer(false);
        assert_eq!(visible_title(&dialogs), None);
    }

    #[tokio::test]
    async fn test_confirm_over_alert_keeps_alert() {
        let dialogs = SignalDialogs::new();
        dialogs.alert(Alert::error("Hubo un error al guardar la comida"));
        dialogs.alert(Alert::success("Eliminado", "La comida fue eliminada"));

        let mut confirmed = dialogs.confirm(ConfirmPrompt::delete_food());
        assert!(futures::poll!(&mut confirmed).is_pending());
        assert_eq!(visible_title(&dialogs), Some(ConfirmPrompt::delete_food().title));
        dialogs.answer(false);
        assert!(!confirmed.await);

        assert_eq!(visible_title(&dialogs), Some("Error".to_string()));
        dialogs.answer(false);
        assert_eq!(visible_title(&dialogs), Some("Eliminado".to_string()));
        dialogs.answer(false);
        assert_eq!(visible_title(&dialogs), None);
    }
}
