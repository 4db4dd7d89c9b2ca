mod ids;
mod progress;
mod start_date;
mod week;

pub use ids::{ParseIdError, WeekId};
pub use progress::{CompletionMap, NotesMap, ProgressSummary};
pub use start_date::{StartDate, StartDateError};
pub use week::{CatalogError, Week, WeekCatalog};
