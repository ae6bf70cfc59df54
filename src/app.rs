//! Page state and click dispatch.
//!
//! Clickable markup carries `data-action` (and, where needed, `data-arg`).
//! The browser layer finds the nearest such element for a click, parses it
//! into an [`Action`] and feeds it to [`App::dispatch`], which reports which
//! [`Region`] of the page must be re-rendered.

use crate::config::{EmailConfig, EmailSettings};
use crate::content;
use crate::model::{ContactFields, Service};
use crate::state::{
    commit_theme, ContactForm, Content, PortfolioFilter, ProjectModal, ServicePanel, Sidebar,
    SkillTabs, Theme, ThemeStore,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    OpenSidebar,
    CloseSidebar,
    ToggleTheme,
    SelectSkill(usize),
    Filter(PortfolioFilter),
    OpenProject(usize),
    CloseProject,
    OpenService(usize),
    CloseService,
    /// Marks an element whose clicks must not reach an enclosing action.
    Stop,
}

impl Action {
    pub fn parse(action: &str, arg: Option<&str>) -> Option<Self> {
        let index = || arg.and_then(|a| a.parse::<usize>().ok());
        Some(match action {
            "open-sidebar" => Action::OpenSidebar,
            "close-sidebar" => Action::CloseSidebar,
            "toggle-theme" => Action::ToggleTheme,
            "select-skill" => Action::SelectSkill(index()?),
            "filter" => Action::Filter(PortfolioFilter::from_key(arg?)?),
            "open-project" => Action::OpenProject(index()?),
            "close-project" => Action::CloseProject,
            "open-service" => Action::OpenService(index()?),
            "close-service" => Action::CloseService,
            "stop" => Action::Stop,
            _ => return None,
        })
    }
}

/// Independently re-rendered parts of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Sidebar,
    Sections,
    Contact,
}

impl Region {
    pub fn element_id(self) -> &'static str {
        match self {
            Region::Sidebar => "sidebar",
            Region::Sections => "sections",
            Region::Contact => "contact-status",
        }
    }
}

pub struct App {
    pub sidebar: Sidebar,
    pub theme: Theme,
    pub skills: SkillTabs,
    pub filter: PortfolioFilter,
    pub project: ProjectModal,
    pub service: ServicePanel,
    pub contact: ContactForm,
    pub content: Content,
    pub services: &'static [Service],
    email: EmailSettings,
}

impl App {
    pub fn new(theme: Theme, email: EmailSettings) -> Self {
        Self {
            sidebar: Sidebar::default(),
            theme,
            skills: SkillTabs::default(),
            filter: PortfolioFilter::default(),
            project: ProjectModal::default(),
            service: ServicePanel::default(),
            contact: ContactForm::default(),
            content: Content::new(content::default_portfolio(), content::default_skills()),
            services: content::SERVICES,
            email,
        }
    }

    /// Applies a click. The theme store is only touched by `ToggleTheme`.
    pub fn dispatch<S: ThemeStore + ?Sized>(&mut self, action: Action, store: &mut S) -> Option<Region> {
        log::debug!("dispatch {action:?}");
        match action {
            Action::OpenSidebar => {
                self.sidebar = Sidebar::Open;
                Some(Region::Sidebar)
            }
            Action::CloseSidebar => {
                self.sidebar = Sidebar::Closed;
                Some(Region::Sidebar)
            }
            Action::ToggleTheme => {
                self.theme = self.theme.toggled();
                commit_theme(store, self.theme);
                Some(Region::Sidebar)
            }
            Action::SelectSkill(i) => {
                self.skills.select(i);
                Some(Region::Sections)
            }
            Action::Filter(f) => {
                self.filter = f;
                Some(Region::Sections)
            }
            Action::OpenProject(i) => {
                let item = self.content.portfolio.get(i)?.clone();
                self.project.open(item);
                Some(Region::Sections)
            }
            Action::CloseProject => {
                self.project.close();
                Some(Region::Sections)
            }
            Action::OpenService(i) if i < self.services.len() => {
                self.service.open(i);
                Some(Region::Sections)
            }
            Action::OpenService(_) => None,
            Action::CloseService => {
                self.service.close();
                Some(Region::Sections)
            }
            Action::Stop => None,
        }
    }

    /// Starts a contact submission; see [`ContactForm::begin_submit`].
    pub fn submit(&mut self) -> Option<(EmailConfig, ContactFields)> {
        self.contact.begin_submit(&self.email)
    }
}
