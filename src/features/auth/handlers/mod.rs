pub mod auth_handler;

pub use auth_handler::{
    __path_check_auth, __path_login, __path_logout, check_auth, login, logout,
};
