// Result handling: normalize the service's response, track the selected outcome,
// and project outcomes into summary cards and detail views.
// Everything in here is pure or owned state; no I/O.

pub mod detail;
pub mod format;
pub mod normalizer;
pub mod selection;
pub mod summary;

pub use detail::{DetailOptions, DetailView};
pub use normalizer::{normalize, ResultSet};
pub use selection::{SelectionChange, SelectionController};
pub use summary::SummaryCard;
