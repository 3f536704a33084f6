mod about;
mod feedback;
mod not_found;
mod theory;
mod widgets;

pub use about::AboutPage;
pub use feedback::FeedbackPage;
pub use not_found::NotFoundPage;
pub use theory::TheoryPage;
pub use widgets::WidgetsPage;
