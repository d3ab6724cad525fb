pub mod rounding;

pub use rounding::round_half_up;
