pub mod auth;
pub mod bookies;
pub mod clusters;
pub mod errors;
pub mod helpers;
pub mod ledgers;
pub mod middleware;
pub mod system;
