pub mod store;
pub mod time;
pub mod validator;
