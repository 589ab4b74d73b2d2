//! SeaORM entity definitions mirroring the relational schema.

pub mod category;
pub mod post;
