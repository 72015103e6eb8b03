pub mod ao_star;
pub mod astar;
pub mod best_first;

pub use ao_star::ao_star_search;
pub use astar::a_star_search;
pub use best_first::best_first_search;
