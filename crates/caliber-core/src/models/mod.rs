pub mod rating;
pub mod review;
