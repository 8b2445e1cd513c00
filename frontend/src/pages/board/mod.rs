mod panel;

pub use panel::BoardPage;
