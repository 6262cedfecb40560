//! Personal portfolio for the terminal.
//!
//! The application is a single-screen TUI with one active section at a time:
//! a hero/profile view, an experience timeline, skills, a filterable project
//! gallery, an articles list, a call-to-action and a contact form. Section
//! switches run through a small transition engine that sequences enter/exit
//! animation phases with fixed-delay cleanup. The dark/light theme preference
//! is the only thing persisted between runs.

pub mod config;
pub mod content;
pub mod ui;
