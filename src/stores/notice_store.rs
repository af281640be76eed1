use dioxus::prelude::*;

/// A non-fatal message shown over the current screen
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub message: String,
}

/// Global signal holding the visible notice, if any
pub static NOTICE: GlobalSignal<Option<Notice>> = Signal::global(|| None);

static NEXT_NOTICE_ID: GlobalSignal<u64> = Signal::global(|| 1);

/// Show a notice, replacing whatever is on screen. Returns its id.
pub fn show_notice(message: impl Into<String>) -> u64 {
    let id = *NEXT_NOTICE_ID.read();
    *NEXT_NOTICE_ID.write() = id + 1;

    let message = message.into();
    log::info!("Notice {}: {}", id, message);
    *NOTICE.write() = Some(Notice { id, message });
    id
}

/// Dismiss the notice with the given id.
/// A newer notice that replaced it stays visible.
pub fn dismiss_notice(id: u64) {
    let current = NOTICE.read().as_ref().map(|n| n.id);
    if current == Some(id) {
        *NOTICE.write() = None;
    }
}
