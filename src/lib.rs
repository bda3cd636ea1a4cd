pub mod columns;
pub mod export;
pub mod fetch;
pub mod table;
