pub mod a001_pg_listing;
