mod list;
mod seed;

pub use list::cmd_list_movies;
pub use seed::{cmd_seed_director, cmd_seed_genre};
