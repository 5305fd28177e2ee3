pub mod help;
pub mod status;

pub use help::HelpWidget;
pub use status::StatusWidget;
