use souq_app_core::app_core::DomainEvent;
use souq_app_core::domain::{Notice, PageState, Route};
use souq_app_core::modal::{PaymentStep, ServiceKind, TelecomProvider};
use souq_app_core::SouqApplication;

fn government_app() -> SouqApplication {
    let mut app = SouqApplication::new();
    app.navigate(Route::Government);
    app
}

fn modal_step(app: &SouqApplication) -> Option<PaymentStep> {
    match &app.state.page {
        PageState::Government(page) => page.modal.as_ref().map(|m| m.step),
        _ => None,
    }
}

#[test]
fn a_bad_phone_number_blocks_the_inquiry() {
    let mut app = government_app();
    app.open_service(ServiceKind::Telecom);
    app.select_provider(TelecomProvider::Syriatel);
    app.set_payment_input("123".into());
    app.submit_payment().unwrap();

    assert_eq!(app.state.toast, Some(Notice::InvalidMobile));
    assert_eq!(modal_step(&app), Some(PaymentStep::Entry));
}

#[test]
fn an_empty_invoice_number_blocks_the_payment() {
    let mut app = government_app();
    app.open_service(ServiceKind::Water);
    app.set_payment_input("   ".into());
    app.submit_payment().unwrap();

    assert_eq!(app.state.toast, Some(Notice::EmptyInvoice));
    assert_eq!(modal_step(&app), Some(PaymentStep::Entry));
}

#[test]
fn an_invoice_payment_completes_in_one_step() {
    let mut app = government_app();
    app.open_service(ServiceKind::Electricity);
    app.set_payment_input("4821".into());
    app.submit_payment().unwrap();

    assert_eq!(app.state.toast, Some(Notice::PaymentSuccess));
    assert_eq!(modal_step(&app), None);
}

#[tokio::test]
async fn confirming_a_looked_up_bill_completes_the_payment() {
    let mut app = government_app();
    app.open_service(ServiceKind::Telecom);
    app.select_provider(TelecomProvider::SyrianTelecom);
    app.set_payment_input("0911111111".into());
    app.submit_payment().unwrap();

    let run_id = match &app.state.page {
        PageState::Government(page) => page
            .modal
            .as_ref()
            .and_then(|m| m.run_id)
            .expect("inquiry pending"),
        _ => panic!("expected the government page"),
    };

    app.event_sender()
        .send(DomainEvent::InquiryCompleted {
            run_id,
            amount: 21_665,
        })
        .await
        .unwrap();
    app.handle_events();
    assert_eq!(modal_step(&app), Some(PaymentStep::Details));

    app.submit_payment().unwrap();
    assert_eq!(app.state.toast, Some(Notice::PaymentSuccess));
    assert_eq!(modal_step(&app), None);
}

#[test]
fn closing_the_dialog_discards_the_entered_number() {
    let mut app = government_app();
    app.open_service(ServiceKind::TrafficFines);
    app.set_payment_input("998877".into());
    app.close_payment_modal();

    app.open_service(ServiceKind::TrafficFines);
    match &app.state.page {
        PageState::Government(page) => {
            let modal = page.modal.as_ref().expect("dialog reopened");
            assert!(modal.input.is_empty());
        }
        _ => panic!("expected the government page"),
    }
}

#[test]
fn the_input_is_locked_outside_the_entry_step() {
    let mut app = government_app();
    app.open_service(ServiceKind::Telecom);
    app.set_payment_input("0911111111".into());

    match &app.state.page {
        PageState::Government(page) => {
            let modal = page.modal.as_ref().expect("dialog open");
            assert_eq!(modal.step, PaymentStep::SelectProvider);
            assert!(modal.input.is_empty());
        }
        _ => panic!("expected the government page"),
    }
}
