//! HTML for every page region.
//!
//! Each region function returns the complete element, including the id the
//! browser layer swaps on re-render (see [`Region::element_id`]).

use std::fmt::Write as _;

use crate::app::{App, Region};
use crate::content::{self, CONTACT_CARDS, NAV_ITEMS, SOCIAL_LINKS};
use crate::model::{PortfolioItem, Service, SkillGroup};
use crate::state::{ContactForm, Field, LoadStatus, PortfolioFilter, SkillTabs, SubmitStatus, Theme};

pub const LOADING_MESSAGE: &str = "Loading content...";
pub const SUCCESS_MESSAGE: &str = "Thanks! I will reply soon.";

pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn region(app: &App, region: Region) -> String {
    match region {
        Region::Sidebar => sidebar(app),
        Region::Sections => sections(app),
        Region::Contact => contact_status(&app.contact),
    }
}

/// Everything inside the page root.
pub fn page(app: &App, year: u32) -> String {
    let mut html = String::new();
    html.push_str(
        r#"<div class="nav-toggle" data-action="open-sidebar"><i class="uil uil-bars"></i></div>"#,
    );
    html.push_str(&sidebar(app));
    html.push_str(r#"<main class="main">"#);
    html.push_str(&hero());
    html.push_str(&about());
    html.push_str(&sections(app));
    html.push_str(&contact(&app.contact));
    html.push_str(&footer(year));
    html.push_str("</main>");
    html
}

fn section_title(heading: &str, title: &str) -> String {
    format!(
        r#"<h2 class="section-title" data-heading="{}">{}</h2>"#,
        escape(heading),
        escape(title)
    )
}

fn external_link(href: &str, class: &str, inner: &str) -> String {
    format!(
        r#"<a href="{}" target="_blank" rel="noopener noreferrer" class="{class}">{inner}</a>"#,
        escape(href)
    )
}

pub fn theme_icon(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "uil uil-sun",
        Theme::Light => "uil uil-moon",
    }
}

pub fn sidebar(app: &App) -> String {
    let class = if app.sidebar.is_open() {
        "sidebar show-sidebar"
    } else {
        "sidebar"
    };
    let mut links = String::new();
    for (href, label) in NAV_ITEMS {
        let _ = write!(
            links,
            r#"<li class="nav-item"><a href="{href}" class="nav-link">{label}</a></li>"#
        );
    }
    format!(
        r#"<aside class="{class}" id="sidebar"><nav class="nav">
<div class="nav-logo"><span class="nav-logo-text">T</span></div>
<div class="theme-toggle" data-action="toggle-theme"><i class="{icon}"></i></div>
<div class="nav-menu"><div class="menu"><ul class="nav-list">{links}</ul></div></div>
<div class="btn-share"><i class="uil uil-share-alt social-share"></i></div>
<div class="nav-close" data-action="close-sidebar"><i class="uil uil-times"></i></div>
</nav></aside>"#,
        icon = theme_icon(app.theme),
    )
}

fn hero() -> String {
    let mut social = String::new();
    for link in SOCIAL_LINKS {
        social.push_str(&external_link(
            link.href,
            "home-social-link",
            &format!(r#"<i class="{}" aria-label="{}"></i>"#, link.icon, link.label),
        ));
    }
    let mut info = String::new();
    for card in CONTACT_CARDS.iter().rev() {
        let _ = write!(
            info,
            r#"<div class="info-item"><a href="{href}" target="_blank" rel="noopener noreferrer"><i class="{icon} info-icon"></i></a><div><h3 class="info-title">{title}</h3><span class="info-subtitle">{data}</span></div></div>"#,
            href = escape(card.href),
            icon = card.icon,
            title = card.title,
            data = escape(card.data),
        );
    }
    format!(
        r##"<section class="home" id="home"><div class="home-container container grid">
<div class="home-social"><span class="home-social-follow">Follow Me</span><div class="home-social-links">{social}</div></div>
<div class="home-data"><h1 class="home-title">Hi, I'm {name}</h1><h3 class="home-subtitle">{role}</h3>
<p class="home-description">{desc}</p>
<a href="#about" class="button"><i class="uil uil-user button-icon"></i>More About me!</a></div>
<div class="my-info">{info}</div>
</div></section>"##,
        name = escape(content::OWNER_NAME),
        role = escape(content::OWNER_ROLE),
        desc = escape(content::HERO_DESCRIPTION),
    )
}

fn about() -> String {
    let mut stats = String::new();
    for (title, value, icon) in content::ABOUT_STATS {
        let _ = write!(
            stats,
            r#"<div class="about-box"><i class="{icon} about-icon"></i><h3 class="about-title">{title}</h3><span class="about-subtitle">{value}</span></div>"#
        );
    }
    format!(
        r##"<section class="about section" id="about">{title}<div class="about-container container grid">
<img src="{img}" alt="About" class="about-img">
<div class="about-data"><h3 class="about-heading">{heading}</h3><p class="about-description">{desc}</p>
<div class="about-info">{stats}</div>
<a href="#contact" class="button"><i class="uil uil-navigator button-icon"></i>Contact me</a></div>
</div></section>"##,
        title = section_title("My Intro", "About me"),
        img = escape(content::ABOUT_IMAGE),
        heading = escape(content::ABOUT_HEADING),
        desc = escape(content::ABOUT_DESCRIPTION),
    )
}

/// Skills, portfolio and services, or the load status that replaces them.
pub fn sections(app: &App) -> String {
    let inner = match &app.content.status {
        LoadStatus::Loading => format!(r#"<p class="muted center">{LOADING_MESSAGE}</p>"#),
        LoadStatus::Failed(msg) => format!(r#"<p class="error center">{}</p>"#, escape(msg)),
        LoadStatus::Ready => {
            let mut html = skills(&app.content.skills, app.skills);
            html.push_str(&portfolio(
                &app.content.portfolio,
                app.filter,
                app.project.get(),
            ));
            html.push_str(&services(app.services, app.service.get().copied()));
            html
        }
    };
    format!(r#"<div id="sections">{inner}</div>"#)
}

pub fn skills(groups: &[SkillGroup], tabs_state: SkillTabs) -> String {
    let mut tabs = String::new();
    for (i, g) in groups.iter().enumerate() {
        let class = if i == tabs_state.active {
            "skills-header skills-active"
        } else {
            "skills-header"
        };
        let _ = write!(
            tabs,
            r#"<div class="{class}" data-action="select-skill" data-arg="{i}"><i class="uil uil-brackets-curly skills-icon"></i><div><h1 class="skills-title">{}</h1><span class="skills-subtitle">{}</span></div><i class="uil uil-angle-down skills-arrow"></i></div>"#,
            escape(&g.title),
            escape(&g.subtitle),
        );
    }

    let mut list = String::new();
    for skill in tabs_state.current(groups).map(|g| g.skills.as_slice()).unwrap_or_default() {
        let _ = write!(
            list,
            r#"<div class="skills-data"><div class="skills-titles"><h3 class="skills-name">{name}</h3><span class="skills-number">{level}%</span></div><div class="skills-bar"><span class="skills-percentage" style="width: {pct}%"></span></div></div>"#,
            name = escape(&skill.name),
            level = skill.level,
            pct = skill.percent(),
        );
    }

    format!(
        r#"<section class="skills section" id="skills">{title}<div class="skills-container container grid">
<div class="skills-tabs">{tabs}</div>
<div class="skills-content"><div class="skills-group skills-active"><div class="skills-list grid">{list}</div></div></div>
</div></section>"#,
        title = section_title("My Abilities", "My Experience"),
    )
}

/// Detail block shared by the card and the modal.
pub fn project_details(item: &PortfolioItem) -> String {
    let mut html = format!(
        r#"<h3 class="details-title">{}</h3><p class="details-description">{}</p><ul class="details-info">"#,
        escape(item.detail_title()),
        escape(&item.description),
    );
    if let Some(year) = item.details.year {
        let _ = write!(html, "<li>Created - <span>{year}</span></li>");
    }
    if !item.details.technologies.is_empty() {
        let _ = write!(
            html,
            "<li>Technologies - <span>{}</span></li>",
            escape(&item.details.technologies.join(", "))
        );
    }
    let _ = write!(
        html,
        "<li>Role - <span>{}</span></li></ul>",
        escape(&item.details.role)
    );
    if let Some(link) = &item.link {
        html.push_str(&external_link(
            link,
            "button",
            r#"<i class="uil uil-external-link-alt button-icon"></i>Visit"#,
        ));
    }
    html
}

pub fn portfolio(
    items: &[PortfolioItem],
    filter: PortfolioFilter,
    modal: Option<&PortfolioItem>,
) -> String {
    let mut bar = String::new();
    for (f, label) in PortfolioFilter::BAR {
        let class = if f == filter {
            "work-item active-work"
        } else {
            "work-item"
        };
        let _ = write!(
            bar,
            r#"<span class="{class}" data-action="filter" data-arg="{}">{label}</span>"#,
            f.key()
        );
    }

    let mut cards = String::new();
    for i in filter.indices(items) {
        let item = &items[i];
        let _ = write!(
            cards,
            r#"<div class="work-card mix {cat}"><img src="{img}" alt="{title}" class="work-img"><h3 class="work-title">{title}</h3><span class="work-button" data-action="open-project" data-arg="{i}">Demo<i class="uil uil-arrow-right work-button-icon"></i></span><div class="portfolio-item-details">{details}</div></div>"#,
            cat = item.category.as_str(),
            img = escape(&item.image),
            title = escape(&item.title),
            details = project_details(item),
        );
    }

    let popup = modal.map(project_modal).unwrap_or_default();

    format!(
        r#"<section class="work section" id="work">{title}<div class="work-filters">{bar}</div><div class="work-container container grid">{cards}</div>{popup}</section>"#,
        title = section_title("My Portfolio", "Recent Works"),
    )
}

pub fn project_modal(item: &PortfolioItem) -> String {
    format!(
        r#"<div class="portfolio-popup open" data-action="close-project"><div class="portfolio-popup-inner" data-action="stop"><div class="portfolio-popup-content grid">
<span class="portfolio-popup-close" data-action="close-project"><i class="uil uil-times"></i></span>
<div class="pp-thumbnail"><img src="{img}" alt="{title}" class="portfolio-popup-img"></div>
<div class="portfolio-popup-info"><div class="portfolio-popup-subtitle">Featured - <span>{cat}</span></div><div class="portfolio-popup-body">{details}</div></div>
</div></div></div>"#,
        img = escape(&item.image),
        title = escape(&item.title),
        cat = item.category.as_str(),
        details = project_details(item),
    )
}

pub fn services(list: &[Service], active: Option<usize>) -> String {
    let mut cards = String::new();
    for (i, s) in list.iter().enumerate() {
        let title_lines: String = s
            .title
            .split(' ')
            .map(|part| format!("{}<br>", escape(part)))
            .collect();
        let bullets: String = s
            .bullets
            .iter()
            .map(|b| {
                format!(
                    r#"<li class="services-modal-service"><i class="uil uil-check-circle services-modal-icon"></i><p class="services-modal-info">{}</p></li>"#,
                    escape(b)
                )
            })
            .collect();
        let modal_class = if active == Some(i) {
            "services-modal active-modal"
        } else {
            "services-modal"
        };
        let _ = write!(
            cards,
            r#"<div class="services-content"><div><i class="{icon} services-icon"></i><h3 class="services-title">{title_lines}</h3></div>
<span class="services-button" data-action="open-service" data-arg="{i}">View More <i class="uil uil-arrow-right services-button-icon"></i></span>
<div class="{modal_class}" data-action="close-service"><div class="services-modal-content" data-action="stop">
<i class="uil uil-times services-modal-close" data-action="close-service"></i>
<h3 class="services-modal-title">{title}</h3><p class="services-modal-description">{desc}</p>
<ul class="services-modal-services grid">{bullets}</ul></div></div></div>"#,
            icon = s.icon,
            title = escape(s.title),
            desc = escape(s.description),
        );
    }
    format!(
        r#"<section class="services section" id="services">{title}<div class="services-container container grid">{cards}</div></section>"#,
        title = section_title("Services", "What I Offer"),
    )
}

pub fn field_class(form: &ContactForm, field: Field) -> &'static str {
    match (field, form.is_raised(field)) {
        (Field::Message, true) => "input-container textarea focus",
        (Field::Message, false) => "input-container textarea",
        (_, true) => "input-container focus",
        (_, false) => "input-container",
    }
}

fn contact_field(form: &ContactForm, field: Field) -> String {
    let key = field.key();
    let required = if field.required() { " required" } else { "" };
    let value = escape(form.value(field));
    let control = match field {
        Field::Message => format!(
            r#"<textarea name="{key}" class="input" rows="4" data-field="{key}"{required}>{value}</textarea>"#
        ),
        Field::Email => format!(
            r#"<input type="email" name="{key}" class="input" data-field="{key}" value="{value}"{required}>"#
        ),
        _ => format!(
            r#"<input type="text" name="{key}" class="input" data-field="{key}" value="{value}"{required}>"#
        ),
    };
    format!(
        r#"<div class="{class}" id="field-{key}">{control}<label>{label}</label><span>{label}</span></div>"#,
        class = field_class(form, field),
        label = field.label(),
    )
}

/// Submit button plus the success/error line.
pub fn contact_status(form: &ContactForm) -> String {
    let (disabled, label) = if form.is_loading() {
        (" disabled", "Sending...")
    } else {
        ("", "Send Message")
    };
    let message = match &form.status {
        SubmitStatus::Success => format!(r#"<p class="success">{SUCCESS_MESSAGE}</p>"#),
        SubmitStatus::Error(msg) => format!(r#"<p class="error">{}</p>"#, escape(msg)),
        SubmitStatus::Idle | SubmitStatus::Loading => String::new(),
    };
    format!(
        r#"<div id="contact-status"><button type="submit" class="button"{disabled}><i class="uil uil-navigator button-icon"></i>{label}</button>{message}</div>"#
    )
}

fn contact(form: &ContactForm) -> String {
    let mut cards = String::new();
    for card in CONTACT_CARDS {
        let _ = write!(
            cards,
            r#"<div class="contact-card"><i class="{icon} contact-card-icon"></i><h3 class="contact-card-title">{title}</h3><span class="contact-card-data">{data}</span>{link}</div>"#,
            icon = card.icon,
            title = card.title,
            data = escape(card.data),
            link = external_link(
                card.href,
                "contact-button",
                r#"Write me <i class="uil uil-arrow-right contact-button-icon"></i>"#
            ),
        );
    }
    let fields: String = Field::ALL
        .into_iter()
        .map(|f| contact_field(form, f))
        .collect();
    format!(
        r#"<section class="contact section" id="contact">{title}<div class="contact-container container grid">
<div class="contact-content"><div class="contact-info">{cards}</div></div>
<div class="contact-content"><form class="contact-form" id="contact-form">{fields}{status}</form></div>
</div></section>"#,
        title = section_title("Get in Touch", "Contact me"),
        status = contact_status(form),
    )
}

fn footer(year: u32) -> String {
    let mut social = String::new();
    for link in SOCIAL_LINKS.iter().take(3) {
        social.push_str(&external_link(
            link.href,
            "footer-social",
            &format!(r#"<i class="{}"></i>"#, link.icon),
        ));
    }
    format!(
        r##"<footer class="footer"><div class="footer-bg"><div class="footer-container container grid">
<div><h1 class="footer-title">{name}</h1><span class="footer-subtitle">{role}</span></div>
<ul class="footer-links"><li><a href="#services" class="footer-links">Services</a></li><li><a href="#work" class="footer-links">Work</a></li><li><a href="#contact" class="footer-links">Contact</a></li></ul>
<div class="footer-socials">{social}</div></div>
<p class="footer-copy">&#169; {year} <a href="#">{name}</a>. All rights reserved</p></div></footer>"##,
        name = escape(content::OWNER_SHORT_NAME),
        role = escape(content::OWNER_ROLE),
    )
}
