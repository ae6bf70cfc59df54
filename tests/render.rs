use portfolio_wasm::app::{Action, App, Region};
use portfolio_wasm::config::EmailSettings;
use portfolio_wasm::content;
use portfolio_wasm::error::LoadError;
use portfolio_wasm::render;
use portfolio_wasm::state::{Field, PortfolioFilter, SkillTabs, SubmitStatus, Theme, ThemeStore};

struct NullStore;

impl ThemeStore for NullStore {
    fn load(&self) -> Option<String> {
        None
    }
    fn save(&mut self, _: &str) {}
    fn apply(&mut self, _: Theme) {}
}

fn app() -> App {
    App::new(Theme::Dark, EmailSettings::default())
}

fn widths(html: &str) -> Vec<String> {
    html.split("style=\"width: ")
        .skip(1)
        .filter_map(|rest| rest.split('"').next().map(str::to_string))
        .collect()
}

#[test]
fn default_skill_group_renders_its_four_bars() {
    let app = app();
    let html = render::skills(&app.content.skills, app.skills);

    assert_eq!(widths(&html), ["70%", "85%", "95%", "90%"]);
    for name in ["React", "JavaScript", "HTML", "CSS"] {
        assert!(html.contains(&format!(r#"<h3 class="skills-name">{name}</h3>"#)));
    }
    assert_eq!(html.matches("skills-header skills-active").count(), 1);
}

#[test]
fn selecting_a_tab_swaps_the_bars() {
    let mut app = app();
    app.dispatch(Action::SelectSkill(2), &mut NullStore);
    let html = render::skills(&app.content.skills, app.skills);
    assert_eq!(widths(&html).len(), 8);
    assert!(html.contains("C/C++"));
}

#[test]
fn out_of_range_tab_renders_no_bars() {
    let groups = content::default_skills();
    let html = render::skills(&groups, SkillTabs { active: 10 });
    assert!(widths(&html).is_empty());
    assert_eq!(html.matches("data-action=\"select-skill\"").count(), groups.len());
}

#[test]
fn overflowing_levels_are_clamped() {
    let mut groups = content::default_skills();
    groups[0].skills[0].level = 140.0;
    groups[0].skills[1].level = -5.0;
    let html = render::skills(&groups, SkillTabs::default());
    assert_eq!(widths(&html)[..2], ["100%", "0%"]);
}

#[test]
fn portfolio_shows_only_filtered_cards() {
    let items = content::default_portfolio();
    let html = render::portfolio(
        &items,
        PortfolioFilter::from_key("app").unwrap(),
        None,
    );
    assert_eq!(html.matches("class=\"work-card").count(), 2);
    assert!(html.contains("Wellnest Mobile App"));
    assert!(!html.contains("Police 360 Web Design"));
    // open-project carries the index into the full list
    assert!(html.contains(r#"data-action="open-project" data-arg="3""#));
    assert!(html.contains(r#"class="work-item active-work" data-action="filter" data-arg="app""#));
    assert!(!html.contains("portfolio-popup"));
}

#[test]
fn modal_shows_selected_project_details() {
    let mut app = app();
    app.dispatch(Action::OpenProject(0), &mut NullStore);
    let item = app.project.get().unwrap();
    let html = render::project_modal(item);

    assert!(html.contains("Police 360 Web Design"));
    assert!(html.contains(&render::escape(&item.description)));
    assert!(html.contains("Created - <span>2025</span>"));
    assert!(html.contains(
        "Technologies - <span>React, Node.js, Express.js, MongoDB, JavaScript, Tailwind CSS</span>"
    ));
    assert!(html.contains("Role - <span>complaint management</span>"));
    assert!(html.contains("https://police360-frontend.vercel.app/"));

    // overlay closes, inner panel stops
    let overlay = html.find(r#"class="portfolio-popup open" data-action="close-project""#);
    let inner = html.find(r#"class="portfolio-popup-inner" data-action="stop""#);
    assert!(overlay.is_some() && inner.is_some());
    assert!(overlay < inner);
}

#[test]
fn sections_follow_load_status() {
    let mut app = app();
    assert!(render::sections(&app).contains("id=\"skills\""));

    app.content.begin_load();
    let html = render::sections(&app);
    assert!(html.contains(render::LOADING_MESSAGE));
    assert!(!html.contains("id=\"work\""));

    app.content.finish_load(Err(LoadError::Network("offline".into())));
    let html = render::sections(&app);
    assert!(html.contains("Failed to load content"));
    assert!(!html.contains("id=\"services\""));
    assert!(html.starts_with(r#"<div id="sections">"#));
}

#[test]
fn active_service_panel_is_marked() {
    let html = render::services(content::SERVICES, Some(1));
    assert_eq!(html.matches("services-modal active-modal").count(), 1);
    assert!(html.contains("Usability Testing"));
    assert!(html.contains("UI/UX<br>Designer<br>"));
}

#[test]
fn sidebar_reflects_open_state_and_theme() {
    let mut app = app();
    let closed = render::sidebar(&app);
    assert!(closed.starts_with(r#"<aside class="sidebar" id="sidebar">"#));
    assert!(closed.contains("uil-sun"));

    app.dispatch(Action::OpenSidebar, &mut NullStore);
    app.dispatch(Action::ToggleTheme, &mut NullStore);
    let open = render::region(&app, Region::Sidebar);
    assert!(open.contains("sidebar show-sidebar"));
    assert!(open.contains("uil-moon"));
}

#[test]
fn contact_status_tracks_submission() {
    let mut app = App::new(
        Theme::Dark,
        EmailSettings::from_parts(Some("s"), Some("t"), Some("k")),
    );
    let idle = render::contact_status(&app.contact);
    assert!(idle.contains("Send Message") && !idle.contains("disabled"));

    app.submit();
    let loading = render::contact_status(&app.contact);
    assert!(loading.contains(" disabled") && loading.contains("Sending..."));

    app.contact.finish_submit(Ok(()));
    assert!(render::contact_status(&app.contact).contains(render::SUCCESS_MESSAGE));

    app.contact.status = SubmitStatus::Error("<b>nope</b>".into());
    assert!(render::contact_status(&app.contact).contains("&lt;b&gt;nope&lt;/b&gt;"));
}

#[test]
fn field_container_class_follows_focus_state() {
    let mut app = app();
    assert_eq!(render::field_class(&app.contact, Field::Name), "input-container");
    app.contact.focus(Field::Message);
    assert_eq!(
        render::field_class(&app.contact, Field::Message),
        "input-container textarea focus"
    );
}

#[test]
fn full_page_contains_every_region() {
    let html = render::page(&app(), 2026);
    for region in [Region::Sidebar, Region::Sections, Region::Contact] {
        assert_eq!(html.matches(&format!("id=\"{}\"", region.element_id())).count(), 1);
    }
    for id in ["home", "about", "skills", "work", "services", "contact", "contact-form"] {
        assert!(html.contains(&format!("id=\"{id}\"")), "missing #{id}");
    }
    assert!(html.contains("&#169; 2026"));
}

#[test]
fn escape_neutralises_markup() {
    assert_eq!(
        render::escape(r#"<a href="x">Tom & 'Jerry'</a>"#),
        "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
    );
}
