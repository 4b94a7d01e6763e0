//! App shell components: Header, Footer

mod footer;
mod header;

pub use footer::Footer;
pub use header::Header;
