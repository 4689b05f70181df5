//! Page Components

mod contact;
mod home;
mod pricing;

pub use contact::ContactPage;
pub use home::HomePage;
pub use pricing::PricingPage;
