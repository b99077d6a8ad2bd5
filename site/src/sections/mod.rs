// Shared page chrome

mod footer;
mod nav;

pub use footer::Footer;
pub use nav::Nav;

/// Product name shown in the nav bar and footer.
pub const BRAND: &str = "NeuraScan";
