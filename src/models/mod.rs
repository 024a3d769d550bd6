pub mod calibration;
pub mod personality;
pub mod productivity;
pub mod task;
