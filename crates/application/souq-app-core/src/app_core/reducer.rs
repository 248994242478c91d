use crate::domain::{AppState, PageState};

use super::events::DomainEvent;

pub fn reduce(mut state: AppState, ev: DomainEvent) -> AppState {
    match ev {
        DomainEvent::RouteChanged(r) => {
            // Mounting rebuilds the page from the seed catalogs, so filters
            // and dialogs never survive navigation.
            state.route = r;
            state.page = PageState::mount(r);
            state.toast = None;
        }

        DomainEvent::LocaleChanged(l) => state.locale = l,

        DomainEvent::NoticeShown(n) => state.toast = Some(n),
        DomainEvent::NoticeDismissed => state.toast = None,

        DomainEvent::InquiryCompleted { run_id, amount } => {
            if let PageState::Government(page) = &mut state.page {
                if let Some(modal) = &mut page.modal {
                    modal.complete_inquiry(run_id, amount);
                }
            }
        }
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Locale, Notice, Route};

    #[test]
    fn navigation_mounts_a_fresh_page_and_clears_the_toast() {
        let mut state = AppState::default();
        state.toast = Some(Notice::PaymentSuccess);

        let state = reduce(state, DomainEvent::RouteChanged(Route::RealEstate));
        assert_eq!(state.route, Route::RealEstate);
        assert!(state.toast.is_none());
        assert!(matches!(state.page, PageState::RealEstate(_)));
    }

    #[test]
    fn locale_change_leaves_the_page_alone() {
        let state = reduce(
            AppState::default(),
            DomainEvent::RouteChanged(Route::Hotels),
        );
        let state = reduce(state, DomainEvent::LocaleChanged(Locale::En));
        assert_eq!(state.locale, Locale::En);
        assert!(matches!(state.page, PageState::Hotels(_)));
    }

    #[test]
    fn inquiry_completion_outside_the_government_page_is_ignored() {
        let state = reduce(
            AppState::default(),
            DomainEvent::InquiryCompleted {
                run_id: uuid::Uuid::new_v4(),
                amount: 12_345,
            },
        );
        assert!(matches!(state.page, PageState::Home));
    }
}
