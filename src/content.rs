//! Bundled page content. The portfolio and skill lists double as the
//! defaults the remote loader replaces.

use crate::model::{Category, ItemId, PortfolioItem, ProjectDetails, Service, Skill, SkillGroup};

pub struct Link {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

pub struct ContactCard {
    pub title: &'static str,
    pub data: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

pub const OWNER_NAME: &str = "Tharusha Thathsara";
pub const OWNER_SHORT_NAME: &str = "Tharusha";
pub const OWNER_ROLE: &str = "Full Stack Developer";
pub const OWNER_EMAIL: &str = "tharushathathsara37@gmail.com";
pub const OWNER_PHONE: &str = "+94 76 052 3136";

pub const HERO_DESCRIPTION: &str = "I\u{2019}m a software engineering undergraduate who enjoys building \
efficient, innovative solutions that help organizations succeed. I\u{2019}m a motivated team player \
with strong leadership and communication skills, known for being hardworking, adaptable, and \
enthusiastic when working with others.";

pub const ABOUT_HEADING: &str = "Hi, I'm Tharusha Thathsara, based in Sri Lanka";
pub const ABOUT_IMAGE: &str = "/images/tharuwa.png";
pub const ABOUT_DESCRIPTION: &str = "I'm a software engineering undergraduate with a passion for \
developing innovative programs that expedite the efficiency and effectiveness of organizational \
success. Skilled leader who has the proven ability to motivate, educate and manage a team. Also a \
hardworking, flexible, enthusiastic and self-motivated individual with a friendly attitude. I \
believe that I have good interpersonal and communication skills, which makes me getting along and \
working with people easily.";

/// (title, value, icon) under the about blurb.
pub const ABOUT_STATS: &[(&str, &str, &str)] = &[
    ("Experience", "2 + Years", "uil uil-award"),
    ("Completed", "3 + Projects", "uil uil-suitcase-alt"),
];

pub const NAV_ITEMS: &[(&str, &str)] = &[
    ("#home", "Home"),
    ("#about", "About"),
    ("#skills", "Skills"),
    ("#work", "Work"),
    ("#services", "Services"),
    ("#contact", "Contact"),
];

const LINKEDIN: &str = "https://www.linkedin.com/in/tharusha-thathsara-a4abb3302";
const WHATSAPP: &str = "https://wa.me/94760523136";

pub const SOCIAL_LINKS: &[Link] = &[
    Link {
        label: "Facebook",
        href: "https://web.facebook.com/tharusha.thathsara.568",
        icon: "uil uil-facebook-f",
    },
    Link {
        label: "Instagram",
        href: "https://www.instagram.com/tharu.t.m",
        icon: "uil uil-instagram",
    },
    Link {
        label: "X",
        href: "https://x.com/tharushatm",
        icon: "uil uil-twitter",
    },
    Link {
        label: "GitHub",
        href: "https://github.com/GTMaheepala",
        icon: "uil uil-github",
    },
];

pub const CONTACT_CARDS: &[ContactCard] = &[
    ContactCard {
        title: "Email",
        data: OWNER_EMAIL,
        href: "mailto:tharushathathsara37@gmail.com",
        icon: "uil uil-envelope-edit",
    },
    ContactCard {
        title: "Whatsapp",
        data: OWNER_PHONE,
        href: WHATSAPP,
        icon: "uil uil-whatsapp",
    },
    ContactCard {
        title: "LinkedIn",
        data: OWNER_NAME,
        href: LINKEDIN,
        icon: "uil uil-linkedin",
    },
];

pub const SERVICES: &[Service] = &[
    Service {
        title: "Web Designer",
        icon: "uil uil-web-grid",
        description: "Motivated Web Designer with hands-on experience in building responsive and \
interactive web pages using HTML, CSS, JavaScript, and React. Eager to learn new design trends and \
contribute creative ideas to real-world projects.",
        bullets: &[
            "User Interface Development",
            "Web Page Development",
            "Interactive UX/UI Creations",
            "Company Brand Positioning",
            "Design and Mockup of products for companies",
            "Wireframing & Prototyping",
            "Frontend Development (HTML, CSS, JavaScript, React)",
            "Backend Development (PHP, NodeJS, MySQL, MongoDB)",
        ],
    },
    Service {
        title: "UI/UX Designer",
        icon: "uil uil-arrow",
        description: "A passionate UI/UX Designer dedicated to creating user-friendly, visually \
appealing, and accessible digital products through research-driven design and modern UI principles.",
        bullets: &[
            "Usability Testing",
            "User Research",
            "Interaction Design",
            "Responsive Design",
            "Branding & Style Guides",
            "Accessibility",
        ],
    },
];

fn group(title: &str, subtitle: &str, skills: &[(&str, u8)]) -> SkillGroup {
    SkillGroup {
        title: title.to_string(),
        subtitle: subtitle.to_string(),
        skills: skills
            .iter()
            .map(|&(name, level)| Skill {
                name: name.to_string(),
                level: f64::from(level),
            })
            .collect(),
    }
}

pub fn default_skills() -> Vec<SkillGroup> {
    vec![
        group(
            "Frontend Development",
            "2 Years Experience",
            &[("React", 70), ("JavaScript", 85), ("HTML", 95), ("CSS", 90)],
        ),
        group(
            "UI/UX Design",
            "1 Years Experience",
            &[("Figma", 85), ("Prototyping", 80), ("PhotoShop", 75), ("Wireframing", 90)],
        ),
        group(
            "Backend Development",
            "2 Year Experience",
            &[
                ("MySQL", 75),
                ("PHP", 70),
                ("MongoDB", 65),
                ("Java", 60),
                ("Python", 50),
                ("NodeJS", 60),
                ("Kotlin", 55),
                ("C/C++", 70),
            ],
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn project(
    id: u64,
    title: &str,
    category: Category,
    image: &str,
    link: Option<&str>,
    description: &str,
    year: u16,
    technologies: &[&str],
    role: &str,
) -> PortfolioItem {
    PortfolioItem {
        id: Some(ItemId::Number(id)),
        title: title.to_string(),
        category,
        image: image.to_string(),
        link: link.map(str::to_owned),
        description: description.to_string(),
        details: ProjectDetails {
            title: None,
            year: Some(year),
            technologies: technologies.iter().map(|t| t.to_string()).collect(),
            role: role.to_string(),
        },
    }
}

pub fn default_portfolio() -> Vec<PortfolioItem> {
    const FULL_STACK_ROLE: &str = "Role based user management , Frontend and Backend Development";
    vec![
        project(
            1,
            "Police 360 Web Design",
            Category::Web,
            "/images/police360.png",
            Some("https://police360-frontend.vercel.app/"),
            "A full-stack system to manage police complaints, officers, evidence, and case progress efficiently.",
            2025,
            &["React", "Node.js", "Express.js", "MongoDB", "JavaScript", "Tailwind CSS"],
            "complaint management",
        ),
        project(
            2,
            "The Fresh Mart Web Design",
            Category::Web,
            "/images/grocery.png",
            None,
            "Built a web-based grocery ordering system to digitize local grocery shopping for efficiency and convenience.",
            2025,
            &["JAVA", "PHP", "HTML", "JavaScript", "CSS", "MySQL"],
            FULL_STACK_ROLE,
        ),
        project(
            3,
            "Fashion Haven Web Design",
            Category::Web,
            "/images/fashion.png",
            None,
            "Developed a dynamic and responsive fashion retail website targeting youth and style-conscious shoppers.",
            2024,
            &["HTML", "JavaScript", "CSS", "MySQL"],
            FULL_STACK_ROLE,
        ),
        project(
            4,
            "Furni House Mobile App",
            Category::App,
            "/images/Furni app.jpg",
            None,
            "Android mobile application & A native Android app built to simplify furniture shopping with a smooth and modern mobile experience.",
            2025,
            &["Kotlin", "Android SDK", "Gradle"],
            "UI/UX Design , Function",
        ),
        project(
            5,
            "Wellnest Mobile App",
            Category::App,
            "/images/wellnest.png",
            None,
            "Android mobile application & A wellness app promoting healthy habits through guided activities and progress tracking.",
            2025,
            &["Kotlin", "Android SDK", "Gradle"],
            "UI/UX Design , Key Functionality",
        ),
        project(
            6,
            "Furni House UI Design",
            Category::Design,
            "/images/furni house uiux.png",
            Some("https://www.figma.com/design/DQ1EnZz4vmupHuVuHbYMRB/Untitled?node-id=0-1"),
            "Complete UI design system",
            2025,
            &["Figma", "Design System"],
            "UI/UX Design",
        ),
    ]
}
