pub mod auth;
pub mod categories;
pub mod items;
pub mod menu;
pub mod seed;
pub mod users;
