mod movie;
mod review;
mod user;

pub use movie::MovieRepository;
pub use review::ReviewRepository;
pub use user::UserRepository;
