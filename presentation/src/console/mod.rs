//! Console presenter

pub mod presenter;

pub use presenter::ConsolePresenter;
