//! Shorewave library - parametric wave-shoaling simulation and rendering

pub mod cli;
pub mod params;
pub mod propagation;
pub mod rendering;
pub mod scene;
pub mod seabed;
pub mod shoaling;
pub mod sim;
pub mod surface;
