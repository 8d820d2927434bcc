mod movie;
mod random;
mod review;
mod user;

pub use movie::{MovieError, MovieService};
pub use random::{MovieCatalog, RandomMovieError, RandomMovieService};
pub use review::{ReviewError, ReviewService};
pub use user::{UserError, UserService};
