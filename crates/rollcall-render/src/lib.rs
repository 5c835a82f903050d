pub mod fields;
pub mod rooms;
pub mod template;

pub use fields::{
    ANSWER_NO, DINNER_DECLINED, DocumentFields, ID_DISPLAY_WIDTH, normalize_dinner, pad_id,
};
pub use rooms::room_table;
pub use template::{RenderedDocument, render};
