pub mod calibration_service;
pub mod metrics_service;
pub mod profile_service;
pub mod schedule_service;
pub mod scheduling_algorithms;
