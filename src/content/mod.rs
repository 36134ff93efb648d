//! Static content store.
//!
//! Read-only records for the profile, experience, projects, achievements,
//! skills, education and contact sections. Nothing here is computed at
//! runtime; [`portfolio()`] just bundles the statics.

mod data;
mod model;

pub use data::{ACHIEVEMENTS, CONTACT, EDUCATION, EXPERIENCE, PROFILE, PROJECTS, SKILLS, portfolio};
pub use model::{
    Achievement, CardItem, CardKind, Contact, Education, Experience, Link, Portfolio, Profile,
    Project, SkillCategory, Stat,
};
