// Preview rendering and print export.
// Everything here is a pure function of the document; no state is kept between calls.

pub mod html;
pub mod preview;
pub mod print;
pub mod text;

pub use preview::{render, FormattedDocument};
pub use print::print_page;
