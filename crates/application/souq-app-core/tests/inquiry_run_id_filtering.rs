use souq_app_core::app_core::DomainEvent;
use souq_app_core::domain::{PageState, Route};
use souq_app_core::modal::{InquiryRunId, PaymentStep, ServiceKind, TelecomProvider};
use souq_app_core::SouqApplication;

fn telecom_app_in_loading_step(app: &mut SouqApplication) -> InquiryRunId {
    app.navigate(Route::Government);
    app.open_service(ServiceKind::Telecom);
    app.select_provider(TelecomProvider::Syriatel);
    app.set_payment_input("0911111111".into());
    app.submit_payment().unwrap();

    match &app.state.page {
        PageState::Government(page) => {
            let modal = page.modal.as_ref().expect("dialog stays open");
            assert_eq!(modal.step, PaymentStep::Loading);
            modal.run_id.expect("an inquiry is pending")
        }
        _ => panic!("expected the government page"),
    }
}

#[tokio::test]
async fn stale_inquiry_completions_are_dropped() {
    let mut app = SouqApplication::new();
    let current = telecom_app_in_loading_step(&mut app);
    let stale: InquiryRunId = uuid::Uuid::new_v4();
    assert_ne!(current, stale);

    app.event_sender()
        .send(DomainEvent::InquiryCompleted {
            run_id: stale,
            amount: 77_777,
        })
        .await
        .unwrap();

    app.handle_events();

    match &app.state.page {
        PageState::Government(page) => {
            let modal = page.modal.as_ref().expect("dialog stays open");
            assert_eq!(modal.step, PaymentStep::Loading);
            assert!(modal.bill_amount.is_none());
        }
        _ => panic!("expected the government page"),
    }
}

#[tokio::test]
async fn the_pending_completion_moves_the_dialog_to_details() {
    let mut app = SouqApplication::new();
    let current = telecom_app_in_loading_step(&mut app);

    app.event_sender()
        .send(DomainEvent::InquiryCompleted {
            run_id: current,
            amount: 21_665,
        })
        .await
        .unwrap();

    app.handle_events();

    match &app.state.page {
        PageState::Government(page) => {
            let modal = page.modal.as_ref().expect("dialog stays open");
            assert_eq!(modal.step, PaymentStep::Details);
            assert_eq!(modal.bill_amount, Some(21_665));
        }
        _ => panic!("expected the government page"),
    }
}

#[tokio::test]
async fn a_completion_after_the_dialog_closed_is_a_no_op() {
    let mut app = SouqApplication::new();
    let current = telecom_app_in_loading_step(&mut app);

    app.close_payment_modal();

    app.event_sender()
        .send(DomainEvent::InquiryCompleted {
            run_id: current,
            amount: 21_665,
        })
        .await
        .unwrap();

    app.handle_events();

    match &app.state.page {
        PageState::Government(page) => assert!(page.modal.is_none()),
        _ => panic!("expected the government page"),
    }
    assert!(app.state.toast.is_none());
}

#[tokio::test]
async fn reopening_the_dialog_does_not_inherit_an_old_inquiry() {
    let mut app = SouqApplication::new();
    let first = telecom_app_in_loading_step(&mut app);

    app.close_payment_modal();
    app.open_service(ServiceKind::Telecom);
    app.select_provider(TelecomProvider::Mtn);

    app.event_sender()
        .send(DomainEvent::InquiryCompleted {
            run_id: first,
            amount: 55_555,
        })
        .await
        .unwrap();

    app.handle_events();

    match &app.state.page {
        PageState::Government(page) => {
            let modal = page.modal.as_ref().expect("dialog stays open");
            assert_eq!(modal.step, PaymentStep::Entry);
            assert!(modal.bill_amount.is_none());
        }
        _ => panic!("expected the government page"),
    }
}
