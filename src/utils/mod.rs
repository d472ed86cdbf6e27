pub mod jwt;
pub mod money;
pub mod password;
pub mod validate;

pub use money::format_rupiah;
pub use validate::ValidatedJson;
