//! English strings served before the client is confirmed
//!
//! These must match `locales/en.json` value for value so the first client
//! render produces the same text as the server render.

use super::keys;

pub const BOOTSTRAP_TABLE: &[(&str, &str)] = &[
    (keys::NAVIGATION_WORK, "Work"),
    (keys::NAVIGATION_ABOUT, "About"),
    (keys::NAVIGATION_CONTACT, "Contact"),
    (keys::HERO_TITLE, "Crafting Digital"),
    (keys::HERO_TITLE_HIGHLIGHT, "Experiences"),
    (
        keys::HERO_SUBTITLE,
        "Precision-driven software engineering with an ear for detail and an eye for elegance",
    ),
    (
        keys::HERO_DESCRIPTION,
        "I specialize in building sophisticated web applications with meticulous attention to performance, accessibility, and user experience. Every line of code is crafted with intention.",
    ),
    (keys::HERO_VIEW_WORK, "View My Work"),
    (keys::HERO_DOWNLOAD_RESUME, "Download Resume"),
    (keys::PROJECTS_TITLE, "Selected Work"),
    (
        keys::PROJECTS_SUBTITLE,
        "A curated selection of projects that showcase precision engineering and thoughtful design",
    ),
    (keys::PROJECTS_VIEW_PROJECT, "View Project"),
    (keys::PROJECTS_LIVE_DEMO, "Live Demo"),
    (keys::PROJECTS_SOURCE, "Source"),
    (keys::PROJECTS_VIEW_ALL, "View All Projects"),
    (keys::SKILLS_TITLE, "Expertise"),
    (
        keys::SKILLS_SUBTITLE,
        "A comprehensive skill set honed through years of precision engineering",
    ),
    (keys::SKILLS_FOUNDATIONS, "Foundations"),
    (keys::SKILLS_ADVANCED, "Advanced"),
    (keys::SKILLS_EXPERT, "Expert"),
    (
        keys::SKILLS_DESCRIPTION,
        "Continuously expanding my toolkit with emerging technologies and best practices. Each project presents an opportunity to refine and enhance these capabilities.",
    ),
    (keys::SKILLS_CATEGORY_FRONTEND, "Frontend"),
    (keys::SKILLS_CATEGORY_BACKEND, "Backend"),
    (keys::SKILLS_CATEGORY_TOOLS, "Tools"),
    (keys::SKILLS_CATEGORY_DESIGN, "Design"),
    (keys::ABOUT_TITLE, "About Me"),
    (keys::ABOUT_SUBTITLE, "Crafting Digital Experiences"),
    (
        keys::ABOUT_DESCRIPTION_1,
        "I'm a software engineer with a passion for creating elegant, performant applications. My approach combines technical precision with thoughtful design, resulting in digital experiences that feel both powerful and intuitive.",
    ),
    (
        keys::ABOUT_DESCRIPTION_2,
        "With a background in both frontend and backend development, I specialize in full-stack solutions that scale. Every project is an opportunity to push boundaries and deliver something exceptional.",
    ),
    (
        keys::ABOUT_DESCRIPTION_3,
        "When I'm not coding, you'll find me exploring new technologies, contributing to open source projects, or enjoying the finer details of audio equipment and minimalist design.",
    ),
    (keys::ABOUT_STATS_PROJECTS, "Projects Completed"),
    (keys::ABOUT_STATS_CLIENTS, "Happy Clients"),
    (keys::ABOUT_STATS_YEARS, "Years Experience"),
    (keys::ABOUT_STATS_COFFEE, "Cups of Coffee"),
    (keys::ABOUT_PHILOSOPHY, "Philosophy"),
    (
        keys::ABOUT_PHILOSOPHY_TEXT,
        "I believe in the power of thoughtful design and clean code. Every interaction, every animation, and every line of code should serve a purpose. It's this attention to detail that transforms good software into exceptional experiences.",
    ),
];

/// Look up a bootstrap string
pub fn lookup(key: &str) -> Option<&'static str> {
    BOOTSTRAP_TABLE
        .iter()
        .find(|(candidate, _)| *candidate == key)
        .map(|(_, value)| *value)
}
