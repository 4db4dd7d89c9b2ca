mod tracker_vm;

pub use tracker_vm::{
    ProgressVm, StartDateVm, TrackerVm, WeekRowVm, build_tracker_vm, map_progress, map_week_rows,
};
