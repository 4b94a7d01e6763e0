//! Search view components: SearchView, TextInput, SliderInput, ResultCard

mod result_card;
mod search_view;
mod slider_input;
mod text_input;

pub use result_card::ResultCard;
pub use search_view::SearchView;
pub use slider_input::SliderInput;
pub use text_input::TextInput;
