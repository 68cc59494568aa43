pub mod index;
pub mod interp;
pub mod record;
pub mod series;
