pub mod account;
pub mod government;
pub mod home;
pub mod hotels;
pub mod marketing;
pub mod medical;
pub mod real_estate;
pub mod tourism;
pub mod transportation;
