mod chart;
mod comment_form;
mod comments;
mod navbar;

pub use self::{chart::*, comment_form::*, comments::*, navbar::*};
