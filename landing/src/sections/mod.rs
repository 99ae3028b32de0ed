// Landing page sections
// Developed by the Virex Team (c)2025

mod about;
mod contact;
mod features;
mod footer;
mod heading;
mod hero;
mod navbar;
mod portfolio;
mod services;
mod testimonials;

pub use about::About;
pub use contact::Contact;
pub use features::Features;
pub use footer::Footer;
pub use hero::Hero;
pub use navbar::Navbar;
pub use portfolio::Portfolio;
pub use services::Services;
pub use testimonials::Testimonials;
