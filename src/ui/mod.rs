pub mod components;
pub mod escape;
pub mod page;

pub use escape::escape_html;
pub use page::render_board;
