pub mod drift_check;
