#[macro_use]
pub mod logger;
pub mod error;
pub mod element_trait;
pub mod general;
pub mod typed_view;
pub mod typed_view_mut;
pub mod multi_type_view;
pub mod sequential_reader;

pub use crate::element_trait::ElementTrait;
pub use crate::error::{ErrorType, Result};
pub use crate::multi_type_view::{ElementSet, MultiTypeView, Selector};
pub use crate::sequential_reader::SequentialReader;
pub use crate::typed_view::TypedView;
pub use crate::typed_view_mut::TypedViewMut;
