mod dashboard;
mod hash_check;

pub use dashboard::Dashboard;
pub use hash_check::HashCheck;
