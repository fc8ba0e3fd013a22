pub mod colleagues;
pub mod connections;
pub mod guards;
pub mod phone_pals;
