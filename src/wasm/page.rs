use std::cell::RefCell;

use gloo::events::EventListener;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    Document, Element, Event, HtmlCanvasElement, HtmlInputElement, HtmlTextAreaElement,
};

use super::canvas::{self, AnimationLoop};
use super::http::{self, ApiClient};
use super::storage::LocalThemeStore;
use crate::app::{Action, App, Region};
use crate::config::SiteConfig;
use crate::email::EmailRequest;
use crate::render;
use crate::state::{restore_theme, Field};

struct Page {
    app: App,
    store: LocalThemeStore,
    document: Document,
    _animation: Option<AnimationLoop>,
    _listeners: Vec<EventListener>,
}

thread_local! {
    static PAGE: RefCell<Option<Page>> = const { RefCell::new(None) };
}

/// Runs `f` against the mounted page. Returns `None` when nothing is
/// mounted or the page is already borrowed by an outer handler.
fn with_page<R>(f: impl FnOnce(&mut Page) -> R) -> Option<R> {
    PAGE.with(|cell| {
        let mut guard = cell.try_borrow_mut().ok()?;
        guard.as_mut().map(f)
    })
}

fn replace_region(document: &Document, region: Region, html: &str) {
    match document.get_element_by_id(region.element_id()) {
        Some(el) => el.set_outer_html(html),
        None => log::warn!("region #{} missing", region.element_id()),
    }
}

/// Brings one field's DOM node and container class in line with state.
fn sync_field(document: &Document, page_app: &App, field: Field, write_value: bool) {
    if let Some(container) = document.get_element_by_id(&format!("field-{}", field.key())) {
        container.set_class_name(render::field_class(&page_app.contact, field));
    }
    if !write_value {
        return;
    }
    let selector = format!("[data-field=\"{}\"]", field.key());
    let Ok(Some(el)) = document.query_selector(&selector) else {
        return;
    };
    let value = page_app.contact.value(field);
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        input.set_value(value);
    } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        area.set_value(value);
    }
}

fn target_element(event: &Event) -> Option<Element> {
    event.target()?.dyn_into::<Element>().ok()
}

fn field_of(event: &Event) -> Option<(Element, Field)> {
    let el = target_element(event)?;
    let field = Field::from_key(&el.get_attribute("data-field")?)?;
    Some((el, field))
}

fn on_click(event: &Event) {
    let Some(el) = target_element(event).and_then(|t| t.closest("[data-action]").ok().flatten())
    else {
        return;
    };
    let Some(action) = el
        .get_attribute("data-action")
        .and_then(|a| Action::parse(&a, el.get_attribute("data-arg").as_deref()))
    else {
        return;
    };
    let update = with_page(|page| {
        let region = page.app.dispatch(action, &mut page.store)?;
        Some((page.document.clone(), region, render::region(&page.app, region)))
    })
    .flatten();
    if let Some((document, region, html)) = update {
        replace_region(&document, region, &html);
    }
}

fn on_input(event: &Event) {
    let Some((el, field)) = field_of(event) else {
        return;
    };
    let value = if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else {
        return;
    };
    with_page(|page| {
        page.app.contact.set(field, value);
        sync_field(&page.document, &page.app, field, false);
    });
}

fn on_focus(event: &Event, focused: bool) {
    let Some((_, field)) = field_of(event) else {
        return;
    };
    with_page(|page| {
        if focused {
            page.app.contact.focus(field);
        } else {
            page.app.contact.blur(field);
        }
        sync_field(&page.document, &page.app, field, false);
    });
}

fn on_submit(event: &Event) {
    event.prevent_default();
    let started = with_page(|page| {
        let request = page.app.submit();
        let html = render::contact_status(&page.app.contact);
        (page.document.clone(), request, html)
    });
    let Some((document, request, html)) = started else {
        return;
    };
    replace_region(&document, Region::Contact, &html);

    let Some((config, fields)) = request else {
        return;
    };
    spawn_local(async move {
        let result = http::send_email(&EmailRequest::new(&config, &fields)).await;
        if result.is_ok() {
            log::info!("contact message delivered");
        }
        let html = with_page(|page| {
            page.app.contact.finish_submit(result);
            for field in Field::ALL {
                sync_field(&page.document, &page.app, field, true);
            }
            render::contact_status(&page.app.contact)
        });
        if let Some(html) = html {
            replace_region(&document, Region::Contact, &html);
        }
    });
}

/// Finds `#root` and `#smoke-canvas` in the document and mounts into them.
pub fn mount(config: SiteConfig) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or("no document")?;
    let Some(root) = document.get_element_by_id("root") else {
        // test harness pages and foreign hosts have no mount point
        log::info!("no #root element; portfolio not mounted");
        return Ok(());
    };
    let canvas = document
        .get_element_by_id("smoke-canvas")
        .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok());
    if canvas.is_none() {
        log::warn!("no #smoke-canvas element; particle trail disabled");
    }
    mount_into(root, canvas, config)
}

/// Renders the page into `root`, starts the trail on `canvas` and wires
/// every handler. A previously mounted page is dropped first.
pub fn mount_into(
    root: Element,
    canvas: Option<HtmlCanvasElement>,
    config: SiteConfig,
) -> Result<(), JsValue> {
    unmount();
    let win = web_sys::window().ok_or("no window")?;
    let document = win.document().ok_or("no document")?;

    let mut store = LocalThemeStore::new(&win, &document);
    let theme = restore_theme(&mut store);
    let mut app = App::new(theme, config.email.clone());
    if config.remote_content {
        app.content.begin_load();
    }

    let year = js_sys::Date::new_0().get_full_year();
    root.set_inner_html(&render::page(&app, year));

    let listeners = vec![
        EventListener::new(&root, "click", on_click),
        EventListener::new(&root, "input", on_input),
        EventListener::new(&root, "focusin", |e| on_focus(e, true)),
        EventListener::new(&root, "focusout", |e| on_focus(e, false)),
        EventListener::new(&root, "submit", on_submit),
    ];

    let animation = canvas.and_then(|canvas| match canvas::start(canvas) {
        Ok(anim) => Some(anim),
        Err(err) => {
            log::warn!("particle trail disabled: {err:?}");
            None
        }
    });

    PAGE.with(|cell| {
        *cell.borrow_mut() = Some(Page {
            app,
            store,
            document: document.clone(),
            _animation: animation,
            _listeners: listeners,
        })
    });
    log::info!("portfolio mounted (theme: {})", theme.as_str());

    if config.remote_content {
        let client = ApiClient::new(config.api_base);
        spawn_local(async move {
            let result = client.fetch_content().await;
            let html = with_page(|page| {
                page.app.content.finish_load(result);
                render::sections(&page.app)
            });
            if let Some(html) = html {
                replace_region(&document, Region::Sections, &html);
            }
        });
    }
    Ok(())
}

/// Drops the mounted page: listeners go away and the frame loop is cancelled.
pub fn unmount() {
    let page = PAGE.with(|cell| cell.borrow_mut().take());
    if page.is_some() {
        log::info!("portfolio unmounted");
    }
}
