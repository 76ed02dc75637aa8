pub mod consts;
pub mod pgs;

// re-exports
pub use pgs::compute_bmi_pgs;
