//! One render function per section. Views are pure: they read state and
//! draw, never mutate.

pub mod articles;
pub mod contact;
pub mod cta;
pub mod experience;
pub mod hero;
pub mod projects;
pub mod skills;
