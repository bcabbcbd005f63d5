mod blog;
mod charts;
mod home;

#[derive(Debug, Clone, Copy, Default)]
pub enum Page {
    #[default]
    Home,
    Blog,
    Charts,
}

impl Page {
    pub fn path(&self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Blog => "/blog",
            Self::Charts => "/charts",
        }
    }
}

pub use self::{blog::*, charts::*, home::*};
