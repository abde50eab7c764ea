//! Translation keys used by the page sections

pub const NAVIGATION_WORK: &str = "navigation.work";
pub const NAVIGATION_ABOUT: &str = "navigation.about";
pub const NAVIGATION_CONTACT: &str = "navigation.contact";

pub const HERO_TITLE: &str = "hero.title";
pub const HERO_TITLE_HIGHLIGHT: &str = "hero.titleHighlight";
pub const HERO_SUBTITLE: &str = "hero.subtitle";
pub const HERO_DESCRIPTION: &str = "hero.description";
pub const HERO_VIEW_WORK: &str = "hero.viewWork";
pub const HERO_DOWNLOAD_RESUME: &str = "hero.downloadResume";

pub const PROJECTS_TITLE: &str = "projects.title";
pub const PROJECTS_SUBTITLE: &str = "projects.subtitle";
pub const PROJECTS_VIEW_PROJECT: &str = "projects.viewProject";
pub const PROJECTS_LIVE_DEMO: &str = "projects.liveDemo";
pub const PROJECTS_SOURCE: &str = "projects.source";
pub const PROJECTS_VIEW_ALL: &str = "projects.viewAllProjects";

pub const SKILLS_TITLE: &str = "skills.title";
pub const SKILLS_SUBTITLE: &str = "skills.subtitle";
pub const SKILLS_FOUNDATIONS: &str = "skills.foundations";
pub const SKILLS_ADVANCED: &str = "skills.advanced";
pub const SKILLS_EXPERT: &str = "skills.expert";
pub const SKILLS_DESCRIPTION: &str = "skills.description";
pub const SKILLS_CATEGORY_FRONTEND: &str = "skills.categories.frontend";
pub const SKILLS_CATEGORY_BACKEND: &str = "skills.categories.backend";
pub const SKILLS_CATEGORY_TOOLS: &str = "skills.categories.tools";
pub const SKILLS_CATEGORY_DESIGN: &str = "skills.categories.design";

pub const ABOUT_TITLE: &str = "about.title";
pub const ABOUT_SUBTITLE: &str = "about.subtitle";
pub const ABOUT_DESCRIPTION_1: &str = "about.description1";
pub const ABOUT_DESCRIPTION_2: &str = "about.description2";
pub const ABOUT_DESCRIPTION_3: &str = "about.description3";
pub const ABOUT_STATS_PROJECTS: &str = "about.stats.projectsCompleted";
pub const ABOUT_STATS_CLIENTS: &str = "about.stats.happyClients";
pub const ABOUT_STATS_YEARS: &str = "about.stats.yearsExperience";
pub const ABOUT_STATS_COFFEE: &str = "about.stats.cupsOfCoffee";
pub const ABOUT_PHILOSOPHY: &str = "about.philosophy";
pub const ABOUT_PHILOSOPHY_TEXT: &str = "about.philosophyText";

/// Every key a locale document is expected to provide
pub const ALL: &[&str] = &[
    NAVIGATION_WORK,
    NAVIGATION_ABOUT,
    NAVIGATION_CONTACT,
    HERO_TITLE,
    HERO_TITLE_HIGHLIGHT,
    HERO_SUBTITLE,
    HERO_DESCRIPTION,
    HERO_VIEW_WORK,
    HERO_DOWNLOAD_RESUME,
    PROJECTS_TITLE,
    PROJECTS_SUBTITLE,
    PROJECTS_VIEW_PROJECT,
    PROJECTS_LIVE_DEMO,
    PROJECTS_SOURCE,
    PROJECTS_VIEW_ALL,
    SKILLS_TITLE,
    SKILLS_SUBTITLE,
    SKILLS_FOUNDATIONS,
    SKILLS_ADVANCED,
    SKILLS_EXPERT,
    SKILLS_DESCRIPTION,
    SKILLS_CATEGORY_FRONTEND,
    SKILLS_CATEGORY_BACKEND,
    SKILLS_CATEGORY_TOOLS,
    SKILLS_CATEGORY_DESIGN,
    ABOUT_TITLE,
    ABOUT_SUBTITLE,
    ABOUT_DESCRIPTION_1,
    ABOUT_DESCRIPTION_2,
    ABOUT_DESCRIPTION_3,
    ABOUT_STATS_PROJECTS,
    ABOUT_STATS_CLIENTS,
    ABOUT_STATS_YEARS,
    ABOUT_STATS_COFFEE,
    ABOUT_PHILOSOPHY,
    ABOUT_PHILOSOPHY_TEXT,
];

/// Key for a skill category label ("frontend", "backend", "tools", "design")
pub fn skill_category(category: &str) -> String {
    format!("skills.categories.{}", category)
}
