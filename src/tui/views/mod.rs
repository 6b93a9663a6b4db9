/// Console overlay rendering.
pub mod console;

/// Scenario picker page.
pub mod page;

/// Toast stack rendering.
pub mod toast;
