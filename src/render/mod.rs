//! Output rendering for bucket statistics.

pub mod csv;

pub use self::csv::render_csv;
