pub mod analog;
pub mod clock;
