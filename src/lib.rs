pub mod core {
    pub mod alphabet;
    pub mod round;
    pub mod words;
}

pub mod ui {
    pub mod app;
    pub mod failure;
    pub mod gallows;
    pub mod keyboard;
    pub mod layout;
    pub mod text;
    pub mod view;
}

// Re-export for convenience
pub use crate::core::round::Round;
pub use crate::core::words::Category;
