pub mod booking;
pub mod movie;
pub mod report;
pub mod seats;
pub mod user;
