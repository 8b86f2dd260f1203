use crate::api::{ApiError, BackendClient, Message, MessageStatus};
use crate::i18n::{keys, Translator};
use crate::notice::Notice;
use crate::views::LoadState;
use tracing::{error, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Read,
    Unread,
}

impl StatusFilter {
    fn matches(self, status: MessageStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Read => status == MessageStatus::Read,
            StatusFilter::Unread => status == MessageStatus::Unread,
        }
    }
}

/// Message inbox page.
#[derive(Default)]
pub struct Inbox {
    messages: LoadState<Vec<Message>>,
    search: String,
    filter: StatusFilter,
    selected: Option<String>,
}

impl Inbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn load(&mut self, backend: &BackendClient, translator: &Translator<'_>) {
        self.messages = LoadState::Loading;
        self.messages = match backend.list_messages().await {
            Ok(messages) => LoadState::Ready(messages),
            Err(e) => {
                error!("Failed to load messages: {}", e);
                LoadState::Failed(translator.resolve(keys::FAILED_TO_LOAD_MESSAGES).to_string())
            }
        };
    }

    pub fn state(&self) -> &LoadState<Vec<Message>> {
        &self.messages
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
    }

    pub fn set_filter(&mut self, filter: StatusFilter) {
        self.filter = filter;
    }

    /// Messages matching the search text (sender or body, case-insensitive)
    /// and the status filter.
    pub fn visible(&self) -> Vec<&Message> {
        let query = self.search.to_lowercase();
        let contains = |field: &Option<String>| {
            field
                .as_deref()
                .is_some_and(|text| text.to_lowercase().contains(&query))
        };

        self.messages
            .ready()
            .map(|messages| {
                messages
                    .iter()
                    .filter(|m| query.is_empty() || contains(&m.sender_email) || contains(&m.message))
                    .filter(|m| self.filter.matches(m.status))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn selected(&self) -> Option<&Message> {
        let id = self.selected.as_deref()?;
        self.messages.ready()?.iter().find(|m| m.id == id)
    }

    /// Open a message; an unread one is marked read on the backend.
    pub async fn select(
        &mut self,
        message_id: &str,
        backend: &BackendClient,
        translator: &Translator<'_>,
    ) -> Option<Notice> {
        self.selected = Some(message_id.to_string());

        let unread = self
            .selected()
            .is_some_and(|m| m.status == MessageStatus::Unread);
        if !unread {
            return None;
        }

        match backend.mark_message_read(message_id).await {
            Ok(()) => {
                if let Some(message) = self.find_mut(message_id) {
                    message.status = MessageStatus::Read;
                }
                Some(Notice::success(translator.resolve(keys::MESSAGE_MARKED_READ)))
            }
            Err(e) => Some(failure(&e, translator)),
        }
    }

    /// Confirmation prompt shown before a delete.
    pub fn delete_prompt(&self, translator: &Translator<'_>) -> Notice {
        Notice::warning(translator.resolve(keys::DELETE_MESSAGE_CONFIRM))
    }

    /// Delete a message once the user has confirmed the prompt. Without
    /// confirmation nothing is sent.
    pub async fn delete(
        &mut self,
        message_id: &str,
        confirmed: bool,
        backend: &BackendClient,
        translator: &Translator<'_>,
    ) -> Option<Notice> {
        if !confirmed {
            return None;
        }

        match backend.delete_message(message_id).await {
            Ok(()) => {
                info!("Deleted message {}", message_id);
                if let LoadState::Ready(messages) = &mut self.messages {
                    messages.retain(|m| m.id != message_id);
                }
                if self.selected.as_deref() == Some(message_id) {
                    self.selected = None;
                }
                Some(Notice::success(translator.resolve(keys::MESSAGE_DELETED)))
            }
            Err(e) => Some(failure(&e, translator)),
        }
    }

    fn find_mut(&mut self, message_id: &str) -> Option<&mut Message> {
        match &mut self.messages {
            LoadState::Ready(messages) => messages.iter_mut().find(|m| m.id == message_id),
            _ => None,
        }
    }
}

fn failure(e: &ApiError, translator: &Translator<'_>) -> Notice {
    error!("Message action failed: {}", e);
    let notice = Notice::error(translator.resolve(keys::ERROR));
    match e.server_message() {
        Some(message) => notice.with_text(message),
        None => notice.with_text(translator.resolve(keys::PLEASE_TRY_AGAIN)),
    }
}
