pub mod app_navbar;
mod loading;
mod upload;

pub use app_navbar::{register_nav, AppNavbar, NavBuilder};
pub use loading::{step_states, LoadingOverlay, StepState, ANALYSIS_STEPS};
pub use upload::FileUpload;
