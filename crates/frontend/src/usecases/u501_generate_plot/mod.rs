pub mod api;
pub mod state;
pub mod view;

pub use view::GeneratePlotView;
