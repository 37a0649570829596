// View layer: routing table, navigation history, views and the root composition.

pub mod history;
pub mod routing;
pub mod shell;
pub mod views;

pub use history::{History, Navigator};
pub use routing::Route;
pub use shell::{ChefApp, Screen};
