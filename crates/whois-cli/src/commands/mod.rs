pub mod connect;
pub mod lookup;
pub mod shell;
pub mod token;
pub mod tokens;
