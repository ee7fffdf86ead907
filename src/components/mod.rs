mod process_button;

pub use process_button::ProcessButton;
