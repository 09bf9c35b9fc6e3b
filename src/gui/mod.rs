pub mod viewer;

pub use viewer::{PlotViewer, show_plot};
