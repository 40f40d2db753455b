//! Shared UI crate for EduCred: the analysis workflow, result panels and
//! pages used by both the web and desktop shells.

pub mod components;
pub mod core;
pub mod i18n;
pub mod panels;
pub mod report;
pub mod views;
pub mod workflow;

#[cfg(test)]
mod tests;
