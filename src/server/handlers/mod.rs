pub mod home;
pub mod trips;
