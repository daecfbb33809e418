mod http;
mod ieee_csv;
mod local;

pub use http::HttpOuiFeed;
pub use ieee_csv::parse_ieee_csv;
pub use local::LocalCsvFeed;
