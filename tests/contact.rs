use std::cell::Cell;

use portfolio_wasm::app::App;
use portfolio_wasm::config::{EmailConfig, EmailSettings};
use portfolio_wasm::email::{EmailRequest, DEFAULT_SUBJECT};
use portfolio_wasm::error::{ContactError, DELIVERY_FAILED_MESSAGE};
use portfolio_wasm::model::ContactFields;
use portfolio_wasm::state::{ContactForm, Field, SubmitStatus, Theme};

fn configured() -> EmailSettings {
    EmailSettings::from_parts(Some("service_x"), Some("template_y"), Some("pk_z"))
}

fn filled(app: &mut App) {
    app.contact.set(Field::Name, "Ada");
    app.contact.set(Field::Email, "ada@example.com");
    app.contact.set(Field::Subject, "Hello");
    app.contact.set(Field::Message, "Nice site");
}

/// Runs one submission through `deliver`, counting how often it is called.
fn submit(app: &mut App, calls: &Cell<usize>, deliver: impl FnOnce(&EmailRequest) -> Result<(), ContactError>) {
    if let Some((config, fields)) = app.submit() {
        assert!(app.contact.is_loading());
        calls.set(calls.get() + 1);
        let result = deliver(&EmailRequest::new(&config, &fields));
        app.contact.finish_submit(result);
    }
}

#[test]
fn successful_delivery_clears_fields() {
    let mut app = App::new(Theme::Dark, configured());
    filled(&mut app);
    let calls = Cell::new(0);

    submit(&mut app, &calls, |req| {
        assert_eq!(req.service_id, "service_x");
        assert_eq!(req.template_params.from_email, "ada@example.com");
        Ok(())
    });

    assert_eq!(calls.get(), 1);
    assert_eq!(app.contact.status, SubmitStatus::Success);
    assert_eq!(app.contact.fields, ContactFields::default());
}

#[test]
fn missing_settings_never_reach_delivery() {
    let partial = [
        EmailSettings::default(),
        EmailSettings::from_parts(Some("s"), Some("t"), None),
        EmailSettings::from_parts(Some("s"), None, Some("k")),
        EmailSettings::from_parts(None, Some("t"), Some("k")),
        EmailSettings::from_parts(Some("s"), Some("  "), Some("k")),
    ];
    for settings in partial {
        let mut app = App::new(Theme::Dark, settings);
        filled(&mut app);
        let calls = Cell::new(0);

        submit(&mut app, &calls, |_| panic!("delivery must not be attempted"));

        assert_eq!(calls.get(), 0);
        assert_eq!(
            app.contact.status,
            SubmitStatus::Error(ContactError::NotConfigured.to_string())
        );
        assert!(app.contact.value(Field::Message) == "Nice site");
    }
}

#[test]
fn configuration_message_names_the_settings() {
    let msg = ContactError::NotConfigured.to_string();
    for var in ["EMAILJS_SERVICE_ID", "EMAILJS_TEMPLATE_ID", "EMAILJS_PUBLIC_KEY"] {
        assert!(msg.contains(var), "{msg}");
    }
}

#[test]
fn delivery_failure_keeps_fields_and_reports_service_text() {
    let mut app = App::new(Theme::Dark, configured());
    filled(&mut app);
    let calls = Cell::new(0);

    submit(&mut app, &calls, |_| Err(ContactError::delivery(Some("The Public Key is invalid"))));

    assert_eq!(app.contact.status, SubmitStatus::Error("The Public Key is invalid".into()));
    assert_eq!(app.contact.value(Field::Name), "Ada");
    assert_eq!(app.contact.value(Field::Subject), "Hello");

    // retry from the error state goes through
    submit(&mut app, &calls, |_| Ok(()));
    assert_eq!(calls.get(), 2);
    assert_eq!(app.contact.status, SubmitStatus::Success);
}

#[test]
fn delivery_error_falls_back_to_generic_text() {
    assert_eq!(
        ContactError::delivery(None),
        ContactError::Delivery(DELIVERY_FAILED_MESSAGE.into())
    );
    assert_eq!(
        ContactError::delivery(Some("   ")),
        ContactError::Delivery(DELIVERY_FAILED_MESSAGE.into())
    );
}

#[test]
fn second_submit_while_loading_is_ignored() {
    let mut app = App::new(Theme::Dark, configured());
    filled(&mut app);

    assert!(app.submit().is_some());
    assert!(app.contact.is_loading());
    assert!(app.submit().is_none());
    assert!(app.contact.is_loading());
}

#[test]
fn labels_float_while_focused_or_filled() {
    let mut form = ContactForm::default();
    assert!(!form.is_raised(Field::Email));

    form.focus(Field::Email);
    assert!(form.is_raised(Field::Email));
    assert!(!form.is_raised(Field::Name));

    form.blur(Field::Email);
    assert!(!form.is_raised(Field::Email));

    form.set(Field::Email, "x@y.z");
    assert!(form.is_raised(Field::Email));
}

#[test]
fn email_request_matches_emailjs_shape() {
    let config = EmailConfig {
        service_id: "svc".into(),
        template_id: "tpl".into(),
        public_key: "pub".into(),
    };
    let fields = ContactFields {
        name: "Ada".into(),
        email: "ada@example.com".into(),
        subject: String::new(),
        message: "Hi".into(),
    };
    let json: serde_json::Value =
        serde_json::from_str(&EmailRequest::new(&config, &fields).to_json().unwrap()).unwrap();

    assert_eq!(json["service_id"], "svc");
    assert_eq!(json["template_id"], "tpl");
    assert_eq!(json["user_id"], "pub");
    let params = &json["template_params"];
    assert_eq!(params["from_name"], "Ada");
    assert_eq!(params["from_email"], "ada@example.com");
    assert_eq!(params["reply_to"], "ada@example.com");
    assert_eq!(params["subject"], DEFAULT_SUBJECT);
    assert_eq!(params["message"], "Hi");
}
