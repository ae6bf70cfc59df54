//! View-state containers. Each one is owned independently by [`crate::app::App`]
//! and changes only through the transitions defined here.

use crate::config::{EmailConfig, EmailSettings};
use crate::error::{ContactError, LoadError};
use crate::model::{Category, ContactFields, PortfolioItem, SkillGroup};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Sidebar {
    #[default]
    Closed,
    Open,
}

impl Sidebar {
    pub fn is_open(self) -> bool {
        self == Sidebar::Open
    }
}

// ---------------------------------------------------------------------------
// Theme
// ---------------------------------------------------------------------------

pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Unknown values fall back to dark.
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "light" => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

/// Persistence and presentation of the theme.
pub trait ThemeStore {
    fn load(&self) -> Option<String>;
    fn save(&mut self, value: &str);
    /// Reflect the theme on the document root.
    fn apply(&mut self, theme: Theme);
}

/// Reads the stored theme and applies it.
pub fn restore_theme<S: ThemeStore + ?Sized>(store: &mut S) -> Theme {
    let theme = store.load().map(|v| Theme::parse(&v)).unwrap_or_default();
    commit_theme(store, theme);
    theme
}

/// Persists and applies `theme`.
pub fn commit_theme<S: ThemeStore + ?Sized>(store: &mut S, theme: Theme) {
    store.save(theme.as_str());
    store.apply(theme);
}

// ---------------------------------------------------------------------------
// Skills / portfolio
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SkillTabs {
    pub active: usize,
}

impl SkillTabs {
    pub fn select(&mut self, index: usize) {
        self.active = index;
    }

    pub fn current<'a>(&self, groups: &'a [SkillGroup]) -> Option<&'a SkillGroup> {
        groups.get(self.active)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PortfolioFilter {
    #[default]
    All,
    Only(Category),
}

impl PortfolioFilter {
    /// Filter bar entries in display order.
    pub const BAR: [(PortfolioFilter, &'static str); 4] = [
        (PortfolioFilter::All, "All"),
        (PortfolioFilter::Only(Category::Web), "Web"),
        (PortfolioFilter::Only(Category::App), "App"),
        (PortfolioFilter::Only(Category::Design), "Design"),
    ];

    pub fn key(self) -> &'static str {
        match self {
            PortfolioFilter::All => "all",
            PortfolioFilter::Only(c) => c.as_str(),
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "all" => Some(PortfolioFilter::All),
            "web" => Some(PortfolioFilter::Only(Category::Web)),
            "app" => Some(PortfolioFilter::Only(Category::App)),
            "design" => Some(PortfolioFilter::Only(Category::Design)),
            _ => None,
        }
    }

    pub fn matches(self, item: &PortfolioItem) -> bool {
        match self {
            PortfolioFilter::All => true,
            PortfolioFilter::Only(c) => item.category == c,
        }
    }

    /// Indices into `items` that pass the filter, in original order.
    pub fn indices(self, items: &[PortfolioItem]) -> Vec<usize> {
        items
            .iter()
            .enumerate()
            .filter(|(_, item)| self.matches(item))
            .map(|(i, _)| i)
            .collect()
    }
}

/// A dismissable detail view holding at most one selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection<T> {
    current: Option<T>,
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Self { current: None }
    }
}

impl<T> Selection<T> {
    pub fn open(&mut self, value: T) {
        self.current = Some(value);
    }

    pub fn close(&mut self) {
        self.current = None;
    }

    pub fn get(&self) -> Option<&T> {
        self.current.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }
}

/// Portfolio modal. Holds its own copy so a content swap can't leave it dangling.
pub type ProjectModal = Selection<PortfolioItem>;

/// Active service detail panel, by index.
pub type ServicePanel = Selection<usize>;

// ---------------------------------------------------------------------------
// Remote content
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadStatus {
    #[default]
    Ready,
    Loading,
    Failed(String),
}

/// Portfolio and skill lists plus the page-level load status.
#[derive(Debug, Clone)]
pub struct Content {
    pub portfolio: Vec<PortfolioItem>,
    pub skills: Vec<SkillGroup>,
    pub status: LoadStatus,
}

impl Content {
    pub fn new(portfolio: Vec<PortfolioItem>, skills: Vec<SkillGroup>) -> Self {
        Self {
            portfolio,
            skills,
            status: LoadStatus::Ready,
        }
    }

    pub fn begin_load(&mut self) {
        self.status = LoadStatus::Loading;
    }

    /// Swaps both lists on success; on failure keeps the old lists but hides them.
    pub fn finish_load(
        &mut self,
        result: Result<(Vec<PortfolioItem>, Vec<SkillGroup>), LoadError>,
    ) {
        match result {
            Ok((portfolio, skills)) => {
                self.portfolio = portfolio;
                self.skills = skills;
                self.status = LoadStatus::Ready;
            }
            Err(err) => {
                log::error!("content load failed: {err}");
                self.status = LoadStatus::Failed(err.user_message().to_string());
            }
        }
    }

    /// Skills, portfolio and services render only while ready.
    pub fn sections_visible(&self) -> bool {
        self.status == LoadStatus::Ready
    }
}

// ---------------------------------------------------------------------------
// Contact form
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Field::ALL.into_iter().find(|f| f.key() == key)
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Username",
            Field::Email => "Email",
            Field::Subject => "Subject",
            Field::Message => "Message",
        }
    }

    pub fn required(self) -> bool {
        self != Field::Subject
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub fields: ContactFields,
    pub status: SubmitStatus,
    focused: Option<Field>,
}

impl ContactForm {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.fields.name,
            Field::Email => &self.fields.email,
            Field::Subject => &self.fields.subject,
            Field::Message => &self.fields.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.fields.name,
            Field::Email => &mut self.fields.email,
            Field::Subject => &mut self.fields.subject,
            Field::Message => &mut self.fields.message,
        };
        *slot = value.into();
    }

    pub fn focus(&mut self, field: Field) {
        self.focused = Some(field);
    }

    pub fn blur(&mut self, field: Field) {
        if self.focused == Some(field) {
            self.focused = None;
        }
    }

    /// Floating-label state: raised while focused or holding a value.
    pub fn is_raised(&self, field: Field) -> bool {
        self.focused == Some(field) || !self.value(field).is_empty()
    }

    pub fn is_loading(&self) -> bool {
        self.status == SubmitStatus::Loading
    }

    /// Moves to `Loading` and hands back what to send.
    ///
    /// Returns `None` while a send is already in flight. Missing settings put
    /// the form straight into `Error` without producing a request.
    pub fn begin_submit(&mut self, settings: &EmailSettings) -> Option<(EmailConfig, ContactFields)> {
        if self.is_loading() {
            return None;
        }
        self.status = SubmitStatus::Loading;
        match settings.resolve() {
            Ok(config) => Some((config, self.fields.clone())),
            Err(err) => {
                self.fail(err);
                None
            }
        }
    }

    pub fn finish_submit(&mut self, result: Result<(), ContactError>) {
        match result {
            Ok(()) => {
                self.fields = ContactFields::default();
                self.status = SubmitStatus::Success;
            }
            Err(err) => self.fail(err),
        }
    }

    fn fail(&mut self, err: ContactError) {
        log::warn!("contact submission failed: {err}");
        self.status = SubmitStatus::Error(err.to_string());
    }
}
