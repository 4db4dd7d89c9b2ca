#![forbid(unsafe_code)]

pub mod app_services;
pub mod command;
pub mod dispatch;
pub mod error;
pub mod progress_service;

pub use tracker_core::Clock;

pub use app_services::AppServices;
pub use command::{Command, ResetDecision, Rerender};
pub use dispatch::{ActionOrigin, DispatchTable, EventKind, UiEvent};
pub use error::{AppServicesError, ProgressServiceError};
pub use progress_service::{ProgressService, TrackerSnapshot};
