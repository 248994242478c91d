use crate::domain::{Locale, Notice, Route};
use crate::modal::InquiryRunId;

#[derive(Debug, Clone)]
pub enum DomainEvent {
    // Navigation
    RouteChanged(Route),

    // Language
    LocaleChanged(Locale),

    // Notices
    NoticeShown(Notice),
    NoticeDismissed,

    // Bill inquiry worker
    InquiryCompleted { run_id: InquiryRunId, amount: u64 },
}
