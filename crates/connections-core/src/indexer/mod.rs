pub mod company;
pub mod overlap;
pub mod pipeline;
