// Terminal presentation: binds result view-models into a display surface and
// drives the interactive picker.

pub mod picker;
pub mod status;
pub mod surface;

pub use picker::run_picker;
pub use status::show_while_loading;
pub use surface::DisplaySurface;
