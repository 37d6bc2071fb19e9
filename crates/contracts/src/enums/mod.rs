pub mod pg_type;

pub use pg_type::PgType;
