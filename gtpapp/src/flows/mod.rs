mod actions;
mod controller;
mod matches;

pub use controller::GtpFlowController;
