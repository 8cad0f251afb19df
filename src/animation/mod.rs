mod common;
mod spiral;

pub(crate) use common::{Animation, AnimationContext, Channel};
pub(crate) use spiral::Spiral;
