//! The view registry: the fixed, ordered set of navigable sections.
//!
//! Each section carries the animation variant used when it becomes active.
//! This table is the single source of truth for variants; lookups by unknown
//! id fall back to [`Variant::Fade`].

/// Identifier of one navigable section. The set is fixed for the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Home,
    Experience,
    Skills,
    Projects,
    Articles,
    Cta,
    Contact,
}

impl SectionId {
    pub const COUNT: usize = 7;

    pub const ALL: [SectionId; Self::COUNT] = [
        SectionId::Home,
        SectionId::Experience,
        SectionId::Skills,
        SectionId::Projects,
        SectionId::Articles,
        SectionId::Cta,
        SectionId::Contact,
    ];

    /// Stable string id, used for navigation requests.
    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::Experience => "experience",
            SectionId::Skills => "skills",
            SectionId::Projects => "projects",
            SectionId::Articles => "articles",
            SectionId::Cta => "cta",
            SectionId::Contact => "contact",
        }
    }

    /// Position in the registry order.
    pub fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|&id| id == self)
            .expect("SectionId::ALL covers every variant")
    }

    pub fn next(self) -> SectionId {
        Self::ALL[(self.index() + 1) % Self::COUNT]
    }

    pub fn prev(self) -> SectionId {
        Self::ALL[(self.index() + Self::COUNT - 1) % Self::COUNT]
    }
}

/// Named animation style for a section's enter/exit transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    #[default]
    Fade,
    Slide,
    SlideUp,
    Zoom,
    Rotate,
    Pop,
}

/// One navigable section: stable id, navigation label, animation variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub id: SectionId,
    pub label: &'static str,
    pub variant: Variant,
}

const REGISTRY: [Section; SectionId::COUNT] = [
    Section {
        id: SectionId::Home,
        label: "Home",
        variant: Variant::Fade,
    },
    Section {
        id: SectionId::Experience,
        label: "Experience",
        variant: Variant::SlideUp,
    },
    Section {
        id: SectionId::Skills,
        label: "Skills",
        variant: Variant::Slide,
    },
    Section {
        id: SectionId::Projects,
        label: "Projects",
        variant: Variant::Zoom,
    },
    Section {
        id: SectionId::Articles,
        label: "Articles",
        variant: Variant::Rotate,
    },
    Section {
        id: SectionId::Cta,
        label: "Hire Me",
        variant: Variant::Pop,
    },
    Section {
        id: SectionId::Contact,
        label: "Contact",
        variant: Variant::Slide,
    },
];

/// The ordered section registry.
pub fn registry() -> &'static [Section] {
    &REGISTRY
}

/// Resolves a string id to its registry entry.
pub fn lookup(id: &str) -> Option<&'static Section> {
    REGISTRY.iter().find(|section| section.id.as_str() == id)
}

/// Animation variant for a section id, falling back to the default.
pub fn variant_for(id: &str) -> Variant {
    lookup(id).map(|section| section.variant).unwrap_or_default()
}
