//! Everything specific to the stats site's page markup: locating the stats
//! table (live or comment-embedded), normalizing it, and pulling the career
//! totals row out of it.

pub mod career;
pub mod locate;
pub mod table;
