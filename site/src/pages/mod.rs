// Site routes

mod about;
mod education;
mod home;
mod not_found;
mod scanner;

pub use about::AboutPage;
pub use education::EducationPage;
pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use scanner::ScannerPage;
