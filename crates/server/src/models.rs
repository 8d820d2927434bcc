mod movie;
mod random;
mod review;
mod user;

pub use movie::{Clearable, CreateMovie, Movie, UpdateMovie};
pub use random::RandomMovie;
pub use review::{CreateReview, Review, ReviewWithMovie, UpdateReview};
pub use user::{CreateUser, UpdateUser, User};
