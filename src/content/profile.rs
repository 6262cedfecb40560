//! Static profile copy: hero text, experience timeline, skills, articles
//! and the call-to-action blurb.

pub const NAME: &str = "Alex Morgan";
pub const ROLE: &str = "Full-Stack Developer";
pub const TAGLINE: &str = "I build fast, friendly software for the web and beyond.";

pub const BIO: &str = "Developer with a soft spot for clean interfaces and \
boring, reliable backends. I enjoy taking an idea from a napkin sketch to \
something people actually use, and writing about what breaks along the way.";

/// One entry of the experience timeline, newest first.
#[derive(Debug, Clone, Copy)]
pub struct ExperienceEntry {
    pub role: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub summary: &'static str,
}

pub const EXPERIENCE: [ExperienceEntry; 4] = [
    ExperienceEntry {
        role: "Senior Full-Stack Developer",
        company: "Brightline Labs",
        period: "2023 - Present",
        summary: "Leading the storefront platform team; shipped a checkout rewrite that cut abandonment by a third.",
    },
    ExperienceEntry {
        role: "Full-Stack Developer",
        company: "Northwind Digital",
        period: "2020 - 2023",
        summary: "Built client dashboards and internal tooling across a dozen product launches.",
    },
    ExperienceEntry {
        role: "Frontend Developer",
        company: "Pixelforge Studio",
        period: "2018 - 2020",
        summary: "Turned design comps into accessible, animation-heavy marketing sites.",
    },
    ExperienceEntry {
        role: "Junior Developer",
        company: "Freelance",
        period: "2016 - 2018",
        summary: "Small-business websites, WordPress rescues, and a lot of learning in public.",
    },
];

/// A named group of related skills.
#[derive(Debug, Clone, Copy)]
pub struct SkillGroup {
    pub name: &'static str,
    pub skills: &'static [&'static str],
}

pub const SKILLS: [SkillGroup; 4] = [
    SkillGroup {
        name: "Languages",
        skills: &["JavaScript", "TypeScript", "Rust", "Python", "SQL"],
    },
    SkillGroup {
        name: "Frontend",
        skills: &["React", "Vue", "CSS animations", "Accessibility"],
    },
    SkillGroup {
        name: "Backend",
        skills: &["Node.js", "PostgreSQL", "Redis", "REST & GraphQL"],
    },
    SkillGroup {
        name: "Tooling",
        skills: &["Git", "Docker", "CI pipelines", "Observability"],
    },
];

/// One published article: title, date, one-line blurb.
#[derive(Debug, Clone, Copy)]
pub struct Article {
    pub title: &'static str,
    pub date: &'static str,
    pub blurb: &'static str,
}

pub const ARTICLES: [Article; 4] = [
    Article {
        title: "Animations That Respect the Frame Budget",
        date: "2025-11-02",
        blurb: "Why most page transitions jank, and the two properties that never do.",
    },
    Article {
        title: "The Case for Boring State Machines",
        date: "2025-06-18",
        blurb: "Replacing a pile of CSS-class toggles with one explicit enum.",
    },
    Article {
        title: "Shipping a Side Project in a Weekend",
        date: "2024-12-09",
        blurb: "Scope cuts, default styles, and the deploy button as a deadline.",
    },
    Article {
        title: "What Code Review Taught Me About Writing",
        date: "2024-04-27",
        blurb: "Short sentences, one idea each. Works for prose, works for diffs.",
    },
];

pub const CTA_HEADING: &str = "Let's build something together";
pub const CTA_BODY: &str = "I'm open to freelance projects, consulting, and \
interesting full-time roles. If you have an idea that needs shipping, I'd \
love to hear about it.";
