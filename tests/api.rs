use portfolio_wasm::api::{self, Endpoint};
use portfolio_wasm::config::{parse_flag, parse_level, SiteConfig};
use portfolio_wasm::error::LoadError;
use portfolio_wasm::model::{Category, ItemId};

#[test]
fn endpoints_join_the_base() {
    assert_eq!(Endpoint::Portfolio.url("/api"), "/api/portfolio");
    assert_eq!(Endpoint::Skills.url("https://example.com/api/"), "https://example.com/api/skills");
    assert_eq!(Endpoint::Testimonials.url("/api"), "/api/testimonials");
    assert_eq!(Endpoint::Contact.url("/api"), "/api/contact");
    assert_eq!(SiteConfig::default().api_base, "/api");
}

#[test]
fn non_success_status_is_an_error() {
    assert_eq!(api::check_status(200, "[]".into()), Ok("[]".to_string()));
    assert_eq!(api::check_status(404, "nope".into()), Err(LoadError::Status(404)));
    assert_eq!(LoadError::Status(500).to_string(), "Request failed: 500");
}

#[test]
fn portfolio_decodes_backend_shape() {
    let body = r#"[
        {"_id": "665f1c", "title": "Atlas", "category": "design", "image": "/a.png",
         "description": "Maps", "details": {"title": "Atlas UI", "year": 2024,
         "technologies": ["Figma"], "role": "Design"}},
        {"_id": 7, "title": "Misc", "category": "music", "image": "/m.png"}
    ]"#;
    let items = api::decode_portfolio(body).unwrap();

    assert_eq!(items[0].id, Some(ItemId::Text("665f1c".into())));
    assert_eq!(items[0].category, Category::Design);
    assert_eq!(items[0].detail_title(), "Atlas UI");
    assert_eq!(items[0].details.technologies, ["Figma"]);
    assert_eq!(items[0].link, None);

    assert_eq!(items[1].id, Some(ItemId::Number(7)));
    assert_eq!(items[1].category, Category::Other);
    assert_eq!(items[1].detail_title(), "Misc");
    assert!(items[1].details.technologies.is_empty());
}

#[test]
fn out_of_range_and_fractional_levels_still_decode() {
    let groups = api::decode_skills(
        r#"[{"title": "Rust", "subtitle": "x", "skills": [
            {"name": "a", "level": 300},
            {"name": "b", "level": 85.5}
        ]}]"#,
    )
    .unwrap();
    let skills = &groups[0].skills;
    assert_eq!(skills[0].level, 300.0);
    assert_eq!(skills[0].percent(), 100.0);
    assert_eq!(skills[1].percent(), 85.5);

    let portfolio = r#"[{"title": "P", "category": "web", "image": "p.png", "description": "d"}]"#;
    let skills = r#"[{"title": "Rust", "skills": [{"name": "a", "level": 300}]}]"#;
    let (items, groups) = api::combine(api::decode_portfolio(portfolio), api::decode_skills(skills)).unwrap();
    assert_eq!((items.len(), groups.len()), (1, 1));
}

#[test]
fn skills_and_testimonials_decode() {
    let groups = api::decode_skills(
        r#"[{"title": "Rust", "subtitle": "1 Year", "skills": [{"name": "async", "level": 60}]}]"#,
    )
    .unwrap();
    assert_eq!(groups[0].skills[0].level, 60.0);

    let quotes = api::decode_testimonials(
        r#"[{"name": "Kim", "message": "Great work"}, {"name": "Lee", "role": "PM", "quote": "Fast"}]"#,
    )
    .unwrap();
    assert_eq!(quotes[0].text, "Great work");
    assert_eq!(quotes[1].role.as_deref(), Some("PM"));
}

#[test]
fn malformed_body_is_a_decode_error() {
    assert!(matches!(api::decode_skills("{not json"), Err(LoadError::Decode(_))));
    assert!(matches!(api::decode_portfolio(r#"{"items": []}"#), Err(LoadError::Decode(_))));
}

#[test]
fn either_failure_fails_the_pair() {
    let skills_err = api::combine(Ok(vec![]), Err(LoadError::Status(500)));
    assert_eq!(skills_err, Err(LoadError::Status(500)));

    let portfolio_err = api::combine(Err(LoadError::Network("down".into())), Ok(vec![]));
    assert!(matches!(portfolio_err, Err(LoadError::Network(_))));

    assert!(api::combine(Ok(vec![]), Ok(vec![])).is_ok());
}

#[test]
fn build_flags_parse() {
    assert!(parse_flag(Some("1")));
    assert!(parse_flag(Some("TRUE")));
    assert!(!parse_flag(Some("0")));
    assert!(!parse_flag(None));
    assert_eq!(parse_level(Some("debug")), log::LevelFilter::Debug);
    assert_eq!(parse_level(Some("loud")), log::LevelFilter::Info);
    assert_eq!(parse_level(None), log::LevelFilter::Info);
}
