//! The project catalog and its category filter.
//!
//! Categories are free-form strings on the entries, not a closed enum; the
//! legal filter set is derived from the catalog in first-seen order.

/// One portfolio project entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub link: &'static str,
    pub image: &'static str,
}

/// Filter value that selects every project.
pub const ALL_CATEGORIES: &str = "All";

const CATALOG: [Project; 6] = [
    Project {
        title: "Personal Portfolio",
        category: "Web",
        description: "A responsive website to showcase my skills and projects.",
        link: "https://github.com/",
        image: "https://images.unsplash.com/photo-1460925895917-afdab827c52f?auto=format&fit=crop&w=600&q=80",
    },
    Project {
        title: "To-Do List App",
        category: "App",
        description: "A JavaScript application to manage daily tasks efficiently.",
        link: "https://github.com/",
        image: "https://images.unsplash.com/photo-1484480974693-6ca0a78fb36b?auto=format&fit=crop&w=600&q=80",
    },
    Project {
        title: "Weather Dashboard",
        category: "API",
        description: "Real-time weather tracking using OpenWeather API.",
        link: "https://github.com/",
        image: "https://images.unsplash.com/photo-1592210454359-9043f067919b?auto=format&fit=crop&w=600&q=80",
    },
    Project {
        title: "E-commerce Store",
        category: "Web",
        description: "Full-stack online shop with cart and payment integration.",
        link: "https://github.com/",
        image: "https://images.unsplash.com/photo-1556740758-90de374c12ad?auto=format&fit=crop&w=600&q=80",
    },
    Project {
        title: "Task Manager API",
        category: "API",
        description: "RESTful API for managing tasks, built with Node.js and Express.",
        link: "https://github.com/",
        image: "https://images.unsplash.com/photo-1555099962-4199c345e5dd?auto=format&fit=crop&w=600&q=80",
    },
    Project {
        title: "Real-time Chat App",
        category: "App",
        description: "Instant messaging application using Socket.io.",
        link: "https://github.com/",
        image: "https://images.unsplash.com/photo-1611162617474-5b21e879e113?auto=format&fit=crop&w=600&q=80",
    },
];

/// The full catalog in display order.
pub fn catalog() -> &'static [Project] {
    &CATALOG
}

/// `["All", ...]` followed by the distinct categories in first-seen order.
pub fn categories() -> Vec<&'static str> {
    let mut out = vec![ALL_CATEGORIES];
    for project in &CATALOG {
        if !out.contains(&project.category) {
            out.push(project.category);
        }
    }
    out
}

/// The catalog entries matching a category, preserving catalog order.
///
/// `"All"` selects everything. An unknown category is a caller mistake but
/// not an error: this is a display filter, so it just comes back empty.
pub fn filter(category: &str) -> Vec<&'static Project> {
    CATALOG
        .iter()
        .filter(|project| category == ALL_CATEGORIES || project.category == category)
        .collect()
}
