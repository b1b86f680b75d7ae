pub mod clock;
pub mod presence;
pub mod reconstruct;
