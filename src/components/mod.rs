mod app;
mod charge_sandbox;
mod coordinate_widget;
mod coulomb_widget;
mod feedback_form;
mod nav_bar;
mod potential_graph;
mod sandbox_renderer;

pub use app::App;
pub use charge_sandbox::ChargeSandbox;
pub use coordinate_widget::CoordinateWidget;
pub use coulomb_widget::CoulombWidget;
pub use feedback_form::{FeedbackForm, FeedbackList};
pub use nav_bar::NavBar;
pub use potential_graph::PotentialGraph;
